//! Fish shell completion scripts for docker and docker-compose.
//!
//! A [`FishEmitter`] queries a tool through
//! [`docker_fish_discovery::CommandLine`] and writes a script with:
//!
//! - a header of install notes and helper functions (the no-subcommand guard
//!   and the live listing functions),
//! - one statement per global switch,
//! - per subcommand: the verb itself, its switches, and dynamic completions
//!   for recognized argument placeholders,
//! - an optional hand-written block (the nested `docker compose` verbs).
//!
//! What differs between tools lives in [`ToolPolicy`].
//!
//! # Example
//!
//! ```
//! use docker_fish_completions::{FishEmitter, ToolPolicy};
//! use docker_fish_discovery::CannedRunner;
//!
//! let runner = CannedRunner::new()
//!     .with_output(&["help"], "Commands:\n  up                 Create and start containers\n")
//!     .with_output(&["help", "up"], "Usage: up [options] [SERVICE...]\n");
//!
//! let mut script = Vec::new();
//! FishEmitter::new(ToolPolicy::docker_compose(), runner)
//!     .generate(&mut script)
//!     .unwrap();
//!
//! let script = String::from_utf8(script).unwrap();
//! assert!(script.contains("-a '(__fish_print_docker_compose_services)' -d \"Service\""));
//! ```

pub mod emitter;
pub mod error;
pub mod policy;
pub mod quote;

pub use emitter::FishEmitter;
pub use error::{EmitError, Result};
pub use policy::ToolPolicy;
