//! Per-tool rendering policy.
//!
//! Both generated scripts share one emitter; what differs between them is
//! captured here: the binary name, the header template, which usage-line
//! placeholders map to live listings, and an optional hand-written block
//! appended after the scraped completions.

/// Header template for `docker.fish`.
const DOCKER_HEADER: &str = include_str!("assets/docker-header.fish");

/// Header template for `docker-compose.fish`.
const DOCKER_COMPOSE_HEADER: &str = include_str!("assets/docker-compose-header.fish");

/// Hand-written `docker compose` completions appended to `docker.fish`.
const COMPOSE_BLOCK: &str = include_str!("assets/compose.fish");

/// Replaced in header templates by the verbs the no-subcommand guard checks.
const GUARD_VERBS_MARKER: &str = "@GUARD_VERBS@";

/// Which containers a container placeholder offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerState {
    Running,
    Stopped,
    All,
}

impl ContainerState {
    /// Argument understood by `__fish_print_docker_containers`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Running => "running",
            Self::Stopped => "stopped",
            Self::All => "all",
        }
    }
}

/// Container state offered per subcommand; anything not listed gets
/// [`ContainerState::Running`].
const CONTAINER_STATE_BY_SUBCOMMAND: &[(&str, ContainerState)] = &[
    ("start", ContainerState::Stopped),
    ("rm", ContainerState::Stopped),
    ("commit", ContainerState::All),
    ("diff", ContainerState::All),
    ("export", ContainerState::All),
    ("inspect", ContainerState::All),
];

/// Container state to list for `subcommand`'s container arguments.
///
/// ```
/// use docker_fish_completions::policy::{ContainerState, container_state_for};
///
/// assert_eq!(container_state_for("start"), ContainerState::Stopped);
/// assert_eq!(container_state_for("inspect"), ContainerState::All);
/// assert_eq!(container_state_for("logs"), ContainerState::Running);
/// ```
pub fn container_state_for(subcommand: &str) -> ContainerState {
    CONTAINER_STATE_BY_SUBCOMMAND
        .iter()
        .find(|(name, _)| *name == subcommand)
        .map_or(ContainerState::Running, |(_, state)| *state)
}

/// Kind of live listing a placeholder is completed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingKind {
    Containers,
    Images,
    Repositories,
    Services,
}

impl ListingKind {
    /// Resolves the listing for use under `subcommand`.
    pub fn resolve(self, subcommand: &str) -> Listing {
        match self {
            Self::Containers => Listing::Containers(container_state_for(subcommand)),
            Self::Images => Listing::Images,
            Self::Repositories => Listing::Repositories,
            Self::Services => Listing::Services,
        }
    }
}

/// A concrete listing hook emitted into the script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Listing {
    Containers(ContainerState),
    Images,
    Repositories,
    Services,
}

impl Listing {
    /// Fish command substitution producing the candidates.
    ///
    /// ```
    /// use docker_fish_completions::policy::{ContainerState, Listing};
    ///
    /// assert_eq!(
    ///     Listing::Containers(ContainerState::All).command_substitution(),
    ///     "(__fish_print_docker_containers all)"
    /// );
    /// assert_eq!(Listing::Images.command_substitution(), "(__fish_print_docker_images)");
    /// ```
    pub fn command_substitution(self) -> String {
        match self {
            Self::Containers(state) => {
                format!("(__fish_print_docker_containers {})", state.as_str())
            }
            Self::Images => "(__fish_print_docker_images)".to_string(),
            Self::Repositories => "(__fish_print_docker_repositories)".to_string(),
            Self::Services => "(__fish_print_docker_compose_services)".to_string(),
        }
    }

    /// Description shown next to each candidate.
    pub fn label(self) -> &'static str {
        match self {
            Self::Containers(_) => "Container",
            Self::Images => "Image",
            Self::Repositories => "Repository",
            Self::Services => "Service",
        }
    }
}

/// Rendering policy for one tool binary.
#[derive(Debug, Clone)]
pub struct ToolPolicy {
    /// Binary name, used both to run the tool and as `complete -c` target.
    pub binary: &'static str,
    /// Header with install notes and helper functions. Must contain
    /// `@GUARD_VERBS@`.
    pub header_template: &'static str,
    /// Verbs that are not scraped but still end the no-subcommand state,
    /// such as nested sub-tools.
    pub extra_guard_verbs: &'static [&'static str],
    /// Usage-line placeholder to listing table.
    pub placeholders: &'static [(&'static str, ListingKind)],
    /// Static block appended after the scraped completions.
    pub extra_block: Option<&'static str>,
}

impl ToolPolicy {
    /// Policy for `docker`, including the nested `docker compose` block.
    pub fn docker() -> Self {
        Self {
            binary: "docker",
            header_template: DOCKER_HEADER,
            extra_guard_verbs: &["compose"],
            placeholders: &[
                ("CONTAINER", ListingKind::Containers),
                ("IMAGE", ListingKind::Images),
                ("REPOSITORY", ListingKind::Repositories),
            ],
            extra_block: Some(COMPOSE_BLOCK),
        }
    }

    /// Policy for the standalone `docker-compose` binary.
    pub fn docker_compose() -> Self {
        Self {
            binary: "docker-compose",
            header_template: DOCKER_COMPOSE_HEADER,
            extra_guard_verbs: &[],
            placeholders: &[("SERVICE", ListingKind::Services)],
            extra_block: None,
        }
    }

    /// File name of the generated script, e.g. `docker.fish`.
    pub fn file_name(&self) -> String {
        format!("{}.fish", self.binary)
    }

    /// Listing to offer for `placeholder` under `subcommand`, if any.
    ///
    /// ```
    /// use docker_fish_completions::policy::{ContainerState, Listing, ToolPolicy};
    ///
    /// let docker = ToolPolicy::docker();
    /// assert_eq!(
    ///     docker.listing_for("CONTAINER", "rm"),
    ///     Some(Listing::Containers(ContainerState::Stopped))
    /// );
    /// assert_eq!(docker.listing_for("SERVICE", "up"), None);
    /// ```
    pub fn listing_for(&self, placeholder: &str, subcommand: &str) -> Option<Listing> {
        self.placeholders
            .iter()
            .find(|(name, _)| *name == placeholder)
            .map(|(_, kind)| kind.resolve(subcommand))
    }

    /// Renders the header. `sorted_verbs` are the scraped subcommand names in
    /// alphabetical order.
    pub fn render_header(&self, sorted_verbs: &[String]) -> String {
        let verbs: Vec<&str> = self
            .extra_guard_verbs
            .iter()
            .copied()
            .chain(sorted_verbs.iter().map(String::as_str))
            .collect();
        self.header_template
            .replace(GUARD_VERBS_MARKER, &verbs.join(" "))
    }
}
