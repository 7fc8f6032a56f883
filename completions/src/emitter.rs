//! Rendering of scraped help data as fish `complete` statements.

use std::io::Write;

use docker_fish_core::{Subcommand, Switch};
use docker_fish_discovery::{CommandLine, HelpRunner};
use tracing::debug;

use crate::error::Result;
use crate::policy::ToolPolicy;
use crate::quote::fish_quote;

/// Guard that is true until a known verb has been typed.
const NO_SUBCOMMAND_GUARD: &str = "__fish_docker_no_subcommand";

/// Writes a complete fish completion script for one tool.
///
/// The tool is queried while rendering, so output is streamed into the sink
/// section by section. A scraping failure part way through leaves the sink
/// with an incomplete script.
///
/// # Examples
///
/// ```
/// use docker_fish_completions::{FishEmitter, ToolPolicy};
/// use docker_fish_discovery::CannedRunner;
///
/// let runner = CannedRunner::new()
///     .with_output(&["help"], "Commands:\n  logs        Fetch the logs of a container\n")
///     .with_output(&["help", "logs"], "Usage:  docker logs [OPTIONS] CONTAINER\n");
///
/// let mut script = Vec::new();
/// FishEmitter::new(ToolPolicy::docker(), runner)
///     .generate(&mut script)
///     .unwrap();
///
/// let script = String::from_utf8(script).unwrap();
/// assert!(script.contains(
///     "complete -c docker -A -f -n '__fish_seen_subcommand_from logs' \
///      -a '(__fish_print_docker_containers running)' -d \"Container\""
/// ));
/// ```
#[derive(Debug)]
pub struct FishEmitter<R> {
    policy: ToolPolicy,
    tool: CommandLine<R>,
}

impl<R: HelpRunner> FishEmitter<R> {
    /// Creates an emitter that queries `policy.binary` through `runner`.
    pub fn new(policy: ToolPolicy, runner: R) -> Self {
        let tool = CommandLine::new(policy.binary, runner);
        Self { policy, tool }
    }

    /// The policy this emitter renders with.
    pub fn policy(&self) -> &ToolPolicy {
        &self.policy
    }

    /// Renders the whole script into `out`.
    pub fn generate<W: Write>(&self, out: &mut W) -> Result<()> {
        self.header(out)?;
        self.common_options(out)?;
        self.subcommands(out)?;
        if let Some(block) = self.policy.extra_block {
            writeln!(out, "{block}")?;
        }
        out.flush()?;
        Ok(())
    }

    fn header<W: Write>(&self, out: &mut W) -> Result<()> {
        let mut verbs: Vec<String> = self
            .tool
            .list_subcommands()?
            .into_iter()
            .map(|entry| entry.name)
            .collect();
        verbs.sort();
        writeln!(out, "{}", self.policy.render_header(&verbs))?;
        Ok(())
    }

    fn common_options<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "# common options")?;
        for switch in self.tool.global_switches()? {
            writeln!(
                out,
                "complete -c {} -n '{NO_SUBCOMMAND_GUARD}' {}",
                self.tool.binary(),
                switch_completion(&switch)
            )?;
        }
        writeln!(out)?;
        Ok(())
    }

    fn subcommands<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "# subcommands")?;
        for entry in self.tool.list_subcommands()? {
            let sub = self.tool.subcommand(&entry)?;
            self.subcommand(out, &sub)?;
        }
        writeln!(out)?;
        Ok(())
    }

    fn subcommand<W: Write>(&self, out: &mut W, sub: &Subcommand) -> Result<()> {
        let binary = self.tool.binary();
        writeln!(out, "# {}", sub.name)?;
        writeln!(
            out,
            "complete -c {binary} -f -n '{NO_SUBCOMMAND_GUARD}' -a {} -d {}",
            sub.name,
            fish_quote(&sub.description)
        )?;
        for switch in &sub.switches {
            writeln!(
                out,
                "complete -c {binary} -A -n '__fish_seen_subcommand_from {}' {}",
                sub.name,
                switch_completion(switch)
            )?;
        }

        for placeholder in sub.argument_names() {
            let Some(listing) = self.policy.listing_for(&placeholder, &sub.name) else {
                continue;
            };
            debug!(subcommand = %sub.name, %placeholder, ?listing, "Emitting dynamic completion");
            writeln!(
                out,
                "complete -c {binary} -A -f -n '__fish_seen_subcommand_from {}' -a '{}' -d \"{}\"",
                sub.name,
                listing.command_substitution(),
                listing.label()
            )?;
        }
        writeln!(out)?;
        Ok(())
    }
}

/// The switch-specific tail of a `complete` statement:
/// `-s f -l file [-f] -d 'description'`.
///
/// File-target switches omit `-f` so fish keeps completing file names.
pub fn switch_completion(switch: &Switch) -> String {
    let mut spec: Vec<String> = switch
        .shorts
        .iter()
        .map(|short| format!("-s {short}"))
        .chain(switch.longs.iter().map(|long| format!("-l {long}")))
        .collect();
    if !switch.is_file_target() {
        spec.push("-f".to_string());
    }
    format!("{} -d {}", spec.join(" "), fish_quote(&switch.description))
}

#[cfg(test)]
mod tests {
    use super::*;

    use docker_fish_discovery::CannedRunner;

    fn render(policy: ToolPolicy, runner: CannedRunner) -> String {
        let mut out = Vec::new();
        FishEmitter::new(policy, runner)
            .generate(&mut out)
            .expect("generate");
        String::from_utf8(out).expect("utf-8 output")
    }

    #[test]
    fn test_switch_completion_plain_flag() {
        let switch = Switch::new(vec!["a".into()], vec!["all".into()], "Show all containers");
        assert_eq!(
            switch_completion(&switch),
            "-s a -l all -f -d 'Show all containers'"
        );
    }

    #[test]
    fn test_switch_completion_file_target_keeps_file_completion() {
        let switch = Switch::new(vec!["f".into()], vec!["file".into()], "Use FILE").with_metavar("FILE");
        assert_eq!(switch_completion(&switch), "-s f -l file -d 'Use FILE'");
    }

    #[test]
    fn test_section_layout_and_order() {
        let runner = CannedRunner::new()
            .with_output(
                &["--help"],
                "Options:\n  -D, --debug   Enable debug mode\n\nCommands:\n",
            )
            .with_output(
                &["help"],
                "Commands:\n  ps          List containers\n  attach      Attach to a container\n",
            )
            .with_output(&["help", "ps"], "Usage:  docker ps [OPTIONS]\n")
            .with_output(
                &["help", "attach"],
                "Usage:  docker attach [OPTIONS] CONTAINER\n\nOptions:\n      --no-stdin   Do not attach STDIN\n",
            );
        let mut policy = ToolPolicy::docker();
        policy.extra_block = None;

        let script = render(policy, runner);
        let body = script
            .split_once("# common options\n")
            .map(|(_, body)| body)
            .expect("common options section");

        assert!(script.contains("if contains -- $i compose attach ps\n"));
        assert_eq!(
            body,
            "\
complete -c docker -n '__fish_docker_no_subcommand' -s D -l debug -f -d 'Enable debug mode'

# subcommands
# ps
complete -c docker -f -n '__fish_docker_no_subcommand' -a ps -d 'List containers'

# attach
complete -c docker -f -n '__fish_docker_no_subcommand' -a attach -d 'Attach to a container'
complete -c docker -A -n '__fish_seen_subcommand_from attach' -l no-stdin -f -d 'Do not attach STDIN'
complete -c docker -A -f -n '__fish_seen_subcommand_from attach' -a '(__fish_print_docker_containers running)' -d \"Container\"


"
        );
    }

    #[test]
    fn test_emitter_keeps_policy_and_binary() {
        let emitter = FishEmitter::new(ToolPolicy::docker_compose(), CannedRunner::new());

        assert_eq!(emitter.policy().binary, "docker-compose");
        assert_eq!(emitter.tool.binary(), "docker-compose");
    }

    #[test]
    fn test_placeholders_sorted_and_deduplicated() {
        let runner = CannedRunner::new()
            .with_output(&["help"], "Commands:\n  push        Upload an image to a registry\n")
            .with_output(&["help", "push"], "Usage:  docker push [OPTIONS] NAME[:TAG]\n");

        let script = render(ToolPolicy::docker(), runner);
        let image = script
            .find("-a '(__fish_print_docker_images)' -d \"Image\"")
            .expect("image listing");
        let repository = script
            .find("-a '(__fish_print_docker_repositories)' -d \"Repository\"")
            .expect("repository listing");
        assert!(image < repository);
    }

    #[test]
    fn test_compose_block_appended_for_docker_only() {
        let runner = CannedRunner::new();

        let docker = render(ToolPolicy::docker(), runner.clone());
        assert!(docker.contains("function __fish_docker_compose_has_subcommand"));
        assert!(docker.ends_with("-d \"Service\"\n\n"));

        let compose = render(ToolPolicy::docker_compose(), runner);
        assert!(!compose.contains("__fish_docker_compose_has_subcommand"));
    }
}
