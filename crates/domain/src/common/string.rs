//! String helpers for model-authored text.

/// Returns true when the string is empty or whitespace only.
///
/// # Examples
///
/// ```
/// use timetraveler_domain::common::is_blank;
///
/// assert!(is_blank(""));
/// assert!(is_blank("  \n"));
/// assert!(!is_blank("Shah Jahan"));
/// ```
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Truncates to at most `max_chars` characters, respecting char boundaries.
pub fn truncate_chars(value: &str, max_chars: usize) -> &str {
    match value.char_indices().nth(max_chars) {
        Some((idx, _)) => &value[..idx],
        None => value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_keeps_short_strings() {
        assert_eq!(truncate_chars("abc", 10), "abc");
    }

    #[test]
    fn truncate_respects_multibyte_chars() {
        assert_eq!(truncate_chars("தமிழ்நாடு", 2), "தம");
        assert_eq!(truncate_chars("👑👑👑", 1), "👑");
    }
}
