//! Record types scraped from a tool's help output.
//!
//! These types carry no behavior beyond small derived views. They are built
//! once by the discovery crate and read by the completion emitter.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

/// Matches an optional/variadic placeholder such as `[CONTAINER...]`.
static VARIADIC_PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\[(.+)\.\.\.\]").expect("static regex must compile"));

/// A command-line switch parsed from one line of an options block.
///
/// Aliases are stored without their leading dashes, in the order they were
/// written on the help line.
///
/// # Examples
///
/// ```
/// use docker_fish_core::Switch;
///
/// let switch = Switch::new(vec!["f".into()], vec!["file".into()], "Use FILE")
///     .with_metavar("FILE");
/// assert!(switch.is_file_target());
/// assert!(switch.matches("--file"));
/// assert!(switch.matches("-f"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Switch {
    /// Short aliases without the leading `-` (e.g. `f`).
    pub shorts: Vec<String>,
    /// Long aliases without the leading `--` (e.g. `file`).
    pub longs: Vec<String>,
    /// Description text from the help line.
    pub description: String,
    /// Value placeholder (e.g. `FILE`, `string`), if the switch takes one.
    pub metavar: Option<String>,
}

impl Switch {
    /// Creates a switch without a value placeholder.
    pub fn new(shorts: Vec<String>, longs: Vec<String>, description: &str) -> Self {
        Self {
            shorts,
            longs,
            description: description.to_string(),
            metavar: None,
        }
    }

    /// Sets the value placeholder.
    pub fn with_metavar(mut self, metavar: &str) -> Self {
        self.metavar = Some(metavar.to_string());
        self
    }

    /// Returns `true` when the switch's value is a filesystem path, so the
    /// shell should keep offering file names for it.
    ///
    /// ```
    /// use docker_fish_core::Switch;
    ///
    /// let plain = Switch::new(vec![], vec!["debug".into()], "Enable debug mode");
    /// assert!(!plain.is_file_target());
    ///
    /// let config = Switch::new(vec![], vec!["config".into()], "Location of client config files")
    ///     .with_metavar("PATH");
    /// assert!(config.is_file_target());
    /// ```
    pub fn is_file_target(&self) -> bool {
        match self.metavar.as_deref() {
            Some(metavar) => metavar == "FILE" || metavar.contains("PATH"),
            None => false,
        }
    }

    /// Checks whether `flag` (written with its dashes) names this switch.
    ///
    /// A lookup convenience for callers searching parsed switches; rendering
    /// does not use it.
    pub fn matches(&self, flag: &str) -> bool {
        if let Some(long) = flag.strip_prefix("--") {
            return self.longs.iter().any(|l| l == long);
        }
        flag.strip_prefix('-')
            .is_some_and(|short| self.shorts.iter().any(|s| s == short))
    }
}

/// A subcommand name and description as listed by `<tool> help`, before its
/// own help page has been fetched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandEntry {
    pub name: String,
    pub description: String,
}

impl CommandEntry {
    pub fn new(name: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
        }
    }
}

/// One verb of the tool with its usage-line placeholders and switches.
///
/// # Examples
///
/// ```
/// use docker_fish_core::Subcommand;
///
/// let sub = Subcommand::new("rm", "Remove one or more containers")
///     .with_args(["CONTAINER", "[CONTAINER...]"]);
/// assert_eq!(sub.argument_names(), vec!["CONTAINER"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subcommand {
    /// Verb name (e.g. `start`).
    pub name: String,
    /// Description from the tool's command listing.
    pub description: String,
    /// Positional placeholders exactly as they appear on the usage line.
    pub args: Vec<String>,
    /// Switches accepted by this verb.
    pub switches: Vec<Switch>,
}

impl Subcommand {
    /// Creates a subcommand with no arguments or switches.
    pub fn new(name: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            args: Vec::new(),
            switches: Vec::new(),
        }
    }

    /// Replaces the positional placeholders.
    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    /// Adds a switch.
    pub fn with_switch(mut self, switch: Switch) -> Self {
        self.switches.push(switch);
        self
    }

    /// Bare placeholder names used to pick dynamic completions.
    ///
    /// A leading `[X...]` wrapper is unwrapped to `X` and alternatives joined
    /// by `|` are split apart. The result is sorted and de-duplicated.
    ///
    /// ```
    /// use docker_fish_core::Subcommand;
    ///
    /// let sub = Subcommand::new("push", "Upload an image to a registry")
    ///     .with_args(["REPOSITORY|IMAGE"]);
    /// assert_eq!(sub.argument_names(), vec!["IMAGE", "REPOSITORY"]);
    /// ```
    pub fn argument_names(&self) -> Vec<String> {
        let mut unique = BTreeSet::new();
        for arg in &self.args {
            let bare = VARIADIC_PLACEHOLDER
                .captures(arg)
                .and_then(|caps| caps.get(1))
                .map_or(arg.as_str(), |m| m.as_str());
            unique.extend(bare.split('|').map(str::to_string));
        }
        unique.into_iter().collect()
    }
}
