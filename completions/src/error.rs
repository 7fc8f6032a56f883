//! Error types for completion rendering.

use std::io;

use docker_fish_discovery::DiscoveryError;
use thiserror::Error;

/// Errors that can occur while rendering a completion script.
#[derive(Debug, Error)]
pub enum EmitError {
    /// Scraping the tool's help output failed.
    #[error(transparent)]
    Discovery(#[from] DiscoveryError),

    /// Writing to the output sink failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Convenience alias for results with [`EmitError`].
pub type Result<T> = std::result::Result<T, EmitError>;
