//! Core record types for docker fish completion generation.
//!
//! - [`Switch`] — a flag with short/long aliases, description and optional
//!   value placeholder.
//! - [`CommandEntry`] — a subcommand name and description from the tool's
//!   command listing.
//! - [`Subcommand`] — a verb with its usage-line placeholders and switches.
//!
//! # Example
//!
//! ```
//! use docker_fish_core::*;
//!
//! let sub = Subcommand::new("logs", "Fetch the logs of a container")
//!     .with_args(["CONTAINER"])
//!     .with_switch(
//!         Switch::new(vec!["f".into()], vec!["follow".into()], "Follow log output"),
//!     );
//!
//! assert_eq!(sub.argument_names(), vec!["CONTAINER"]);
//! assert!(sub.switches[0].matches("--follow"));
//! ```

mod types;

pub use types::*;
