//! Parsing of single option lines into [`Switch`] records.
//!
//! An option line looks like
//!
//! ```text
//!   -f, --file FILE     Name of the file
//! ```
//!
//! The alias list and the description are separated by the first run of two
//! or more spaces. Lines without such a run are wrapped description text
//! belonging to the previous option and are rejected.

use std::sync::LazyLock;

use docker_fish_core::Switch;
use regex::Regex;
use tracing::trace;

/// Separator between the alias column and the description column.
static COLUMN_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" {2,}").expect("static regex must compile"));

/// Parses one help line into a switch.
///
/// Returns `None` for continuation lines and for lines where no dash-prefixed
/// alias can be found.
///
/// A description that is itself padded with double spaces after a short alias
/// list may be split at the wrong place; the heuristic does not try to detect
/// that.
///
/// # Examples
///
/// ```
/// use docker_fish_discovery::switch::parse_switch;
///
/// let switch = parse_switch("  -f, --file FILE  Use FILE").unwrap();
/// assert_eq!(switch.shorts, vec!["f"]);
/// assert_eq!(switch.longs, vec!["file"]);
/// assert_eq!(switch.metavar.as_deref(), Some("FILE"));
/// assert_eq!(switch.description, "Use FILE");
///
/// assert!(parse_switch("                    container").is_none());
/// ```
pub fn parse_switch(line: &str) -> Option<Switch> {
    let line = line.trim();
    if !line.contains("  ") {
        return None;
    }

    let mut columns = COLUMN_BREAK.splitn(line, 2);
    let aliases = columns.next()?;
    let description = columns.next().unwrap_or_default();

    let mut shorts = Vec::new();
    let mut longs = Vec::new();
    let mut metavar = None;

    for token in aliases.split(", ") {
        let name = match token.split_once(' ') {
            Some((name, value)) => {
                metavar = Some(value.trim());
                name
            }
            None => token,
        };

        if let Some(long) = name.strip_prefix("--") {
            if !long.is_empty() {
                longs.push(long.to_string());
            }
        } else if let Some(short) = name.strip_prefix('-') {
            if !short.is_empty() {
                shorts.push(short.to_string());
            }
        } else {
            trace!(token, "Ignoring alias token without a dash prefix");
        }
    }

    if shorts.is_empty() && longs.is_empty() {
        trace!(line, "No recognizable alias on option line");
        return None;
    }

    let switch = Switch::new(shorts, longs, description);
    Some(match metavar {
        Some(value) if !value.is_empty() => switch.with_metavar(value),
        _ => switch,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_without_double_space_is_continuation() {
        assert!(parse_switch("--detach-keys string Override the key sequence").is_none());
        assert!(parse_switch("                             container").is_none());
        assert!(parse_switch("").is_none());
        assert!(parse_switch("-a").is_none());
    }

    #[test]
    fn test_short_and_long_with_metavar() {
        let switch = parse_switch("-f, --file FILE  Use FILE").expect("should parse");

        assert_eq!(switch.shorts, vec!["f".to_string()]);
        assert_eq!(switch.longs, vec!["file".to_string()]);
        assert_eq!(switch.metavar.as_deref(), Some("FILE"));
        assert_eq!(switch.description, "Use FILE");
        assert!(switch.is_file_target());
    }

    #[test]
    fn test_two_long_aliases_without_metavar() {
        let switch = parse_switch("--foo, --bar  Do a thing").expect("should parse");

        assert!(switch.shorts.is_empty());
        assert_eq!(switch.longs, vec!["foo".to_string(), "bar".to_string()]);
        assert_eq!(switch.metavar, None);
        assert_eq!(switch.description, "Do a thing");
    }

    #[test]
    fn test_indented_docker_option_line() {
        let switch =
            parse_switch("      --detach-keys string   Override the key sequence for detaching a")
                .expect("should parse");

        assert_eq!(switch.longs, vec!["detach-keys".to_string()]);
        assert_eq!(switch.metavar.as_deref(), Some("string"));
        assert_eq!(switch.description, "Override the key sequence for detaching a");
        assert!(!switch.is_file_target());
    }

    #[test]
    fn test_description_keeps_inner_double_spaces() {
        let switch = parse_switch("-q, --quiet    Only display IDs  (short)").expect("should parse");

        assert_eq!(switch.description, "Only display IDs  (short)");
    }

    #[test]
    fn test_last_metavar_wins() {
        let switch = parse_switch("-o VALUE, --output OUT  Write output").expect("should parse");

        assert_eq!(switch.shorts, vec!["o".to_string()]);
        assert_eq!(switch.longs, vec!["output".to_string()]);
        assert_eq!(switch.metavar.as_deref(), Some("OUT"));
    }

    #[test]
    fn test_line_without_dash_alias_is_rejected() {
        assert!(parse_switch("run         Create and run a new container").is_none());
        assert!(parse_switch("'os[/arch]':  Explicit platform").is_none());
    }
}
