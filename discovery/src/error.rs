//! Error types for help-output discovery.
//!
//! Only two things stop a run: the tool binary cannot be executed, or a
//! subcommand's help page has no `Usage:` line. Everything else the scraper
//! cannot make sense of is skipped.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while running or scraping the tool.
#[derive(Debug, Error)]
pub enum DiscoveryError {
    /// The tool could not be spawned or its output could not be read.
    #[error("failed to run {}: {source}", .program.display())]
    Spawn {
        program: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A subcommand's help output has no `Usage:` line.
    #[error("can't find Usage in help for command '{command}'")]
    MissingUsage { command: String },
}

/// Convenience alias for results with [`DiscoveryError`].
pub type Result<T> = std::result::Result<T, DiscoveryError>;
