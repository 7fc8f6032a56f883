//! Scraping a tool's help pages into switches and subcommands.
//!
//! [`CommandLine`] runs the tool through a [`HelpRunner`] and hands the
//! captured text to the `parse_*` functions in this module. Each query runs
//! the tool again; nothing is cached between calls.
//!
//! # Example
//!
//! ```
//! use docker_fish_discovery::introspect::CommandLine;
//! use docker_fish_discovery::runner::CannedRunner;
//!
//! let runner = CannedRunner::new()
//!     .with_output(&["help"], "Commands:\n  ps          List containers\n")
//!     .with_output(&["help", "ps"], "Usage:  docker ps [OPTIONS]\n\nOptions:\n  -a, --all   Show all containers\n");
//!
//! let docker = CommandLine::new("docker", runner);
//! assert_eq!(docker.binary(), "docker");
//! let subcommands = docker.subcommands().unwrap();
//! assert_eq!(subcommands[0].name, "ps");
//! assert!(subcommands[0].args.is_empty());
//! assert_eq!(subcommands[0].switches[0].longs, vec!["all"]);
//! ```

use std::collections::HashSet;

use docker_fish_core::{CommandEntry, Subcommand, Switch};
use tracing::{debug, trace};

use crate::error::{DiscoveryError, Result};
use crate::runner::HelpRunner;
use crate::switch::parse_switch;

/// Header lines that open the global options block.
const OPTIONS_HEADERS: &[&str] = &["Options:", "Global Options:"];

/// Suffix shared by every command-listing section header
/// (`Commands:`, `Management Commands:`, `Swarm Commands:`, ...).
const COMMANDS_HEADER_SUFFIX: &str = "Commands:";

/// Trailing marker on plugin commands (`buildx*`, `compose*`).
const PLUGIN_MARKER: char = '*';

/// Usage-line tokens before the first argument: `Usage:`, program, verb.
const USAGE_PREFIX_TOKENS: usize = 3;

/// Verbs whose usage lines do not name the placeholder completion needs.
const ARGUMENT_OVERRIDES: &[(&str, &[&str])] = &[
    ("push", &["REPOSITORY|IMAGE"]),
    ("pull", &["REPOSITORY|IMAGE"]),
    ("images", &["REPOSITORY"]),
];

/// A tool binary queried through a [`HelpRunner`].
#[derive(Debug, Clone)]
pub struct CommandLine<R> {
    binary: String,
    runner: R,
}

impl<R: HelpRunner> CommandLine<R> {
    pub fn new(binary: &str, runner: R) -> Self {
        Self {
            binary: binary.to_string(),
            runner,
        }
    }

    /// Name of the binary, e.g. `docker`.
    pub fn binary(&self) -> &str {
        &self.binary
    }

    fn help_output(&self, args: &[&str]) -> Result<String> {
        self.runner.run(&self.binary, args)
    }

    /// Switches from the `Options:` / `Global Options:` block of
    /// `<tool> --help`.
    pub fn global_switches(&self) -> Result<Vec<Switch>> {
        let switches = parse_global_switches(&self.help_output(&["--help"])?);
        debug!(binary = %self.binary, count = switches.len(), "Parsed global switches");
        Ok(switches)
    }

    /// Subcommand names and descriptions listed by `<tool> help`, in the
    /// order the tool prints them.
    pub fn list_subcommands(&self) -> Result<Vec<CommandEntry>> {
        let entries = parse_command_list(&self.help_output(&["help"])?);
        debug!(binary = %self.binary, count = entries.len(), "Parsed command list");
        Ok(entries)
    }

    /// Full detail for one listed subcommand from `<tool> help <name>`.
    pub fn subcommand(&self, entry: &CommandEntry) -> Result<Subcommand> {
        let text = self.help_output(&["help", &entry.name])?;
        parse_subcommand_help(entry, &text)
    }

    /// Every listed subcommand with its detail, in listing order.
    ///
    /// Fails on the first subcommand whose help page has no `Usage:` line.
    pub fn subcommands(&self) -> Result<Vec<Subcommand>> {
        self.list_subcommands()?
            .iter()
            .map(|entry| self.subcommand(entry))
            .collect()
    }
}

/// Extracts the global switches from `--help` output.
///
/// Returns an empty list when there is no options header.
pub fn parse_global_switches(text: &str) -> Vec<Switch> {
    let mut lines = text.lines();
    if !lines.by_ref().any(|line| OPTIONS_HEADERS.contains(&line)) {
        trace!("No options header in help output");
        return Vec::new();
    }

    let mut switches = Vec::new();
    for line in lines {
        if starts_new_section(line) && !line.starts_with('-') {
            break;
        }
        if let Some(switch) = parse_switch(line) {
            switches.push(switch);
        }
    }
    switches
}

/// Extracts the subcommand listing from `help` output.
///
/// Only lines inside a section whose header ends in `Commands:` are
/// considered. Plugin commands are left out, and a name listed in more than
/// one section keeps its first entry.
pub fn parse_command_list(text: &str) -> Vec<CommandEntry> {
    let mut entries = Vec::new();
    let mut seen = HashSet::new();
    let mut in_commands_section = false;

    for line in text.lines() {
        if line.ends_with(COMMANDS_HEADER_SUFFIX) {
            in_commands_section = true;
            continue;
        }
        if starts_new_section(line) && line.ends_with(':') {
            in_commands_section = false;
            continue;
        }
        if !in_commands_section {
            continue;
        }

        let Some((name, description)) = line.trim().split_once(char::is_whitespace) else {
            continue;
        };
        if name.ends_with(PLUGIN_MARKER) {
            trace!(name, "Skipping plugin command");
            continue;
        }
        if !seen.insert(name.to_string()) {
            trace!(name, "Skipping repeated command");
            continue;
        }
        entries.push(CommandEntry::new(name, description.trim_start()));
    }
    entries
}

/// Builds a [`Subcommand`] from the output of `help <name>`.
///
/// # Errors
///
/// Returns [`DiscoveryError::MissingUsage`] when no line starts with
/// `Usage:`.
pub fn parse_subcommand_help(entry: &CommandEntry, text: &str) -> Result<Subcommand> {
    let mut lines = text.lines();
    let usage = lines
        .by_ref()
        .find(|line| line.starts_with("Usage:"))
        .ok_or_else(|| DiscoveryError::MissingUsage {
            command: entry.name.clone(),
        })?;

    let switches: Vec<Switch> = lines
        .filter(|line| line.trim().starts_with('-'))
        .filter_map(parse_switch)
        .collect();

    let args = usage_arguments(&entry.name, usage);
    debug!(
        command = %entry.name,
        ?args,
        switches = switches.len(),
        "Parsed subcommand help"
    );

    Ok(Subcommand {
        name: entry.name.clone(),
        description: entry.description.clone(),
        args,
        switches,
    })
}

fn usage_arguments(command: &str, usage: &str) -> Vec<String> {
    if let Some((_, args)) = ARGUMENT_OVERRIDES.iter().find(|(name, _)| *name == command) {
        return args.iter().map(|arg| arg.to_string()).collect();
    }

    let mut args: Vec<&str> = usage
        .split_whitespace()
        .skip(USAGE_PREFIX_TOKENS)
        .collect();
    if args
        .first()
        .is_some_and(|first| first.eq_ignore_ascii_case("[OPTIONS]"))
    {
        args.remove(0);
    }
    args.into_iter().map(str::to_string).collect()
}

/// A non-blank line at column zero begins a new top-level section.
fn starts_new_section(line: &str) -> bool {
    !line.is_empty() && !line.starts_with(char::is_whitespace)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_switches_stop_at_next_section() {
        let help = "\
Usage:  docker [OPTIONS] COMMAND

Global Options:
      --config string      Location of client config files (default
                           \"/root/.docker\")
  -D, --debug              Enable debug mode

Run 'docker COMMAND --help' for more information on a command.
  -x, --hidden             Not part of the options block
";
        let switches = parse_global_switches(help);

        assert_eq!(switches.len(), 2);
        assert_eq!(switches[0].longs, vec!["config".to_string()]);
        assert_eq!(switches[1].shorts, vec!["D".to_string()]);
    }

    #[test]
    fn test_global_switches_missing_header_yields_nothing() {
        let help = "Usage:  docker-compose [OPTIONS] COMMAND\n\n  -f, --file FILE   Compose file\n";
        assert!(parse_global_switches(help).is_empty());
    }

    #[test]
    fn test_global_switches_header_must_match_exactly() {
        let help = "  Options:\n  -a, --all   All\n";
        assert!(parse_global_switches(help).is_empty());
    }

    #[test]
    fn test_command_list_bounded_by_sections() {
        let help = "\
Usage:  docker [OPTIONS] COMMAND

Common Commands:
  run         Create and run a new container from an image
  ps          List containers

Management Commands:
  buildx*     Docker Buildx
  container   Manage containers

Global Options:
  -D, --debug              Enable debug mode
  lonely
";
        let entries = parse_command_list(help);
        let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();

        assert_eq!(names, vec!["run", "ps", "container"]);
        assert_eq!(
            entries[0].description,
            "Create and run a new container from an image"
        );
    }

    #[test]
    fn test_command_list_keeps_first_of_repeated_names() {
        let help = "\
Common Commands:
  run         Run
  ps          List containers

Commands:
  run         Run again
  rm          Remove one or more containers
";
        let entries = parse_command_list(help);

        assert_eq!(
            entries,
            vec![
                CommandEntry::new("run", "Run"),
                CommandEntry::new("ps", "List containers"),
                CommandEntry::new("rm", "Remove one or more containers"),
            ]
        );
    }

    #[test]
    fn test_command_list_skips_single_field_lines() {
        let help = "Commands:\n  attach\n  build       Build an image\n";
        let entries = parse_command_list(help);

        assert_eq!(entries, vec![CommandEntry::new("build", "Build an image")]);
    }

    #[test]
    fn test_usage_drops_prefix_and_options() {
        assert_eq!(
            usage_arguments("start", "Usage:  docker start [OPTIONS] CONTAINER [CONTAINER...]"),
            vec!["CONTAINER", "[CONTAINER...]"]
        );
        assert_eq!(
            usage_arguments("ps", "Usage:  docker ps [OPTIONS]"),
            Vec::<String>::new()
        );
        assert_eq!(
            usage_arguments("up", "Usage:  docker compose up [options] [SERVICE...]"),
            vec!["up", "[options]", "[SERVICE...]"]
        );
        assert_eq!(
            usage_arguments("up", "Usage: docker-compose up [options] [SERVICE...]"),
            vec!["[SERVICE...]"]
        );
    }

    #[test]
    fn test_usage_overrides_for_registry_verbs() {
        let usage = "Usage:  docker push [OPTIONS] NAME[:TAG]";
        assert_eq!(usage_arguments("push", usage), vec!["REPOSITORY|IMAGE"]);
        assert_eq!(usage_arguments("pull", usage), vec!["REPOSITORY|IMAGE"]);
        assert_eq!(
            usage_arguments("images", "Usage:  docker images [OPTIONS] [REPOSITORY[:TAG]]"),
            vec!["REPOSITORY"]
        );
    }

    #[test]
    fn test_missing_usage_is_fatal() {
        let entry = CommandEntry::new("bogus", "Not a real command");
        let err = parse_subcommand_help(&entry, "unknown help topic: bogus\n").unwrap_err();

        assert!(matches!(
            err,
            DiscoveryError::MissingUsage { ref command } if command == "bogus"
        ));
        assert!(err.to_string().contains("bogus"));
    }

    #[test]
    fn test_subcommand_switches_only_after_usage() {
        let entry = CommandEntry::new("kill", "Kill one or more running containers");
        let help = "\
  -z, --before   Appears before the usage line
Usage:  docker kill [OPTIONS] CONTAINER [CONTAINER...]

Kill one or more running containers

Options:
  -s, --signal string   Signal to send to the container
";
        let sub = parse_subcommand_help(&entry, help).unwrap();

        assert_eq!(sub.switches.len(), 1);
        assert_eq!(sub.switches[0].longs, vec!["signal".to_string()]);
        assert_eq!(sub.args, vec!["CONTAINER", "[CONTAINER...]"]);
    }
}
