//! Help-output scraping for docker-style command-line tools.
//!
//! The tool is run with `--help`, `help` and `help <subcommand>`, and the
//! plain-text output is turned into [`Switch`] and [`Subcommand`] records
//! with line-oriented regex heuristics.
//!
//! # Main entry points
//!
//! - [`CommandLine`] — query a tool for its global switches, subcommand
//!   listing and per-subcommand detail.
//! - [`switch::parse_switch`] — parse one option line.
//! - [`introspect::parse_global_switches`], [`introspect::parse_command_list`],
//!   [`introspect::parse_subcommand_help`] — parse pre-captured help text
//!   without running anything.
//!
//! # Example
//!
//! ```
//! use docker_fish_discovery::introspect::parse_global_switches;
//!
//! let help = "\
//! Usage:  docker [OPTIONS] COMMAND
//!
//! Global Options:
//!   -D, --debug              Enable debug mode
//!   -H, --host list          Daemon socket to connect to
//! ";
//!
//! let switches = parse_global_switches(help);
//! assert_eq!(switches.len(), 2);
//! assert_eq!(switches[1].metavar.as_deref(), Some("list"));
//! ```
//!
//! [`Switch`]: docker_fish_core::Switch
//! [`Subcommand`]: docker_fish_core::Subcommand

pub mod error;
pub mod introspect;
pub mod runner;
pub mod switch;

pub use error::{DiscoveryError, Result};
pub use introspect::CommandLine;
pub use runner::{CannedRunner, HelpRunner, ProcessRunner};
