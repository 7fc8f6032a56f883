//! Running the tool to obtain help text.
//!
//! [`ProcessRunner`] spawns `<tool_dir>/<binary> <args...>` and returns stdout
//! and stderr merged into one string. The exit status is ignored: docker exits
//! non-zero for some help requests while still printing the page.
//!
//! [`CannedRunner`] replays previously captured output keyed by argv, for
//! rendering without the tool installed.

use std::collections::HashMap;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tracing::debug;

use crate::error::{DiscoveryError, Result};

/// Source of help output for a tool invocation.
pub trait HelpRunner {
    /// Runs `binary` with `args` and returns everything it printed.
    fn run(&self, binary: &str, args: &[&str]) -> Result<String>;
}

impl<T: HelpRunner + ?Sized> HelpRunner for &T {
    fn run(&self, binary: &str, args: &[&str]) -> Result<String> {
        (**self).run(binary, args)
    }
}

/// Spawns binaries from a fixed directory.
///
/// # Examples
///
/// ```no_run
/// use docker_fish_discovery::runner::{HelpRunner, ProcessRunner};
///
/// let runner = ProcessRunner::new("/usr/bin");
/// let help = runner.run("docker", &["--help"]).unwrap();
/// assert!(help.contains("Usage:"));
/// ```
#[derive(Debug, Clone)]
pub struct ProcessRunner {
    tool_dir: PathBuf,
}

impl ProcessRunner {
    pub fn new(tool_dir: impl Into<PathBuf>) -> Self {
        Self {
            tool_dir: tool_dir.into(),
        }
    }

    /// Directory the binaries are resolved against.
    pub fn tool_dir(&self) -> &Path {
        &self.tool_dir
    }
}

impl HelpRunner for ProcessRunner {
    fn run(&self, binary: &str, args: &[&str]) -> Result<String> {
        let program = self.tool_dir.join(binary);
        debug!(program = %program.display(), ?args, "Running help command");
        capture_merged_output(&program, args)
            .map_err(|source| DiscoveryError::Spawn { program, source })
    }
}

fn capture_merged_output(program: &Path, args: &[&str]) -> io::Result<String> {
    let (mut reader, writer) = io::pipe()?;
    let mut command = Command::new(program);
    command
        .args(args)
        .stdin(Stdio::null())
        .stdout(writer.try_clone()?)
        .stderr(writer);
    let mut child = command.spawn()?;
    // `command` still owns write ends of the pipe; EOF only arrives once
    // every copy is closed.
    drop(command);

    let mut buf = Vec::new();
    let read_result = reader.read_to_end(&mut buf);
    let status = child.wait()?;
    read_result?;

    debug!(
        program = %program.display(),
        exit_code = ?status.code(),
        bytes = buf.len(),
        "Help command finished"
    );
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Replays captured help output.
///
/// Outputs are keyed by argv only; the binary name is not consulted. An argv
/// with no recorded output yields an empty string, like a tool that prints
/// nothing.
///
/// # Examples
///
/// ```
/// use docker_fish_discovery::runner::{CannedRunner, HelpRunner};
///
/// let runner = CannedRunner::new().with_output(&["help", "ps"], "Usage:  docker ps [OPTIONS]\n");
/// assert!(runner.run("docker", &["help", "ps"]).unwrap().starts_with("Usage:"));
/// assert!(runner.run("docker", &["help", "rm"]).unwrap().is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct CannedRunner {
    outputs: HashMap<Vec<String>, String>,
}

impl CannedRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the output printed for `args`.
    pub fn with_output(mut self, args: &[&str], output: &str) -> Self {
        self.insert(args, output);
        self
    }

    /// Records the output printed for `args`, replacing any previous entry.
    pub fn insert(&mut self, args: &[&str], output: &str) {
        let key = args.iter().map(|arg| arg.to_string()).collect();
        self.outputs.insert(key, output.to_string());
    }
}

impl HelpRunner for CannedRunner {
    fn run(&self, binary: &str, args: &[&str]) -> Result<String> {
        let key: Vec<String> = args.iter().map(|arg| arg.to_string()).collect();
        let output = self.outputs.get(&key).cloned().unwrap_or_default();
        debug!(binary, ?args, bytes = output.len(), "Replaying canned help output");
        Ok(output)
    }
}
