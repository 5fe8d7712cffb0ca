//! Character-level validation shared by all parsers.

use super::error::Problem;

/// Identifier of the unknown sentinel of every kind.
pub const UNKNOWN_IDENTIFIER: &str = "???";

/// Characters that may never appear in an unbracketed component.
pub const RESERVED_CHARACTERS: [char; 9] = ['(', ')', '[', ']', '{', '}', ',', ';', ':'];

/// True for reserved characters and any whitespace.
#[inline]
pub fn is_reserved(c: char) -> bool {
    RESERVED_CHARACTERS.contains(&c) || c.is_whitespace()
}

/// Validate a bare (unbracketed) component.
///
/// `what` names the component for the "missing" error when `text` is empty.
pub fn bare_name<'a>(text: &'a str, what: &'static str) -> Result<&'a str, Problem> {
    if text.is_empty() {
        return Err(Problem::Missing(what));
    }
    if let Some(ch) = text.chars().find(|&c| is_reserved(c)) {
        return Err(Problem::ReservedCharacter {
            name: text.to_string(),
            ch,
        });
    }
    // `???` is only a sentinel for a whole name, never a path segment
    if text.split(['.', '+']).any(|segment| segment == UNKNOWN_IDENTIFIER) {
        return Err(Problem::UnknownComponent {
            name: text.to_string(),
        });
    }
    Ok(text)
}

/// Parse a non-negative decimal integer in canonical form. Signs,
/// whitespace and leading zeros are rejected, so the value prints back as
/// the text it was read from.
pub fn non_negative(text: &str) -> Result<u32, Problem> {
    let not_an_integer = || Problem::NotAnInteger {
        text: text.to_string(),
    };
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(not_an_integer());
    }
    if text.len() > 1 && text.starts_with('0') {
        return Err(not_an_integer());
    }
    text.parse::<u32>().map_err(|_| not_an_integer())
}

/// Collapse runs of whitespace into single spaces and trim the ends.
///
/// Used by tests and callers that want to compare identifiers the way the
/// printers normalize them.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
