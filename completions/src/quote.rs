//! Quoting of free-form descriptions for fish.

/// Quotes `text` as a fish string literal.
///
/// Single quotes are used unless the text contains a single quote and no
/// double quote, in which case double quotes avoid escaping. Inside double
/// quotes `$` is escaped so fish does not expand it. Other control
/// characters are written as `\xNN`.
///
/// # Examples
///
/// ```
/// use docker_fish_completions::quote::fish_quote;
///
/// assert_eq!(fish_quote("List containers"), "'List containers'");
/// assert_eq!(
///     fish_quote("Create a new image from a container's changes"),
///     "\"Create a new image from a container's changes\""
/// );
/// ```
pub fn fish_quote(text: &str) -> String {
    let quote = if text.contains('\'') && !text.contains('"') {
        '"'
    } else {
        '\''
    };

    let mut out = String::with_capacity(text.len() + 2);
    out.push(quote);
    for ch in text.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '$' if quote == '"' => out.push_str("\\$"),
            c if c.is_control() => out.push_str(&format!("\\x{:02x}", u32::from(c))),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c => out.push(c),
        }
    }
    out.push(quote);
    out
}
