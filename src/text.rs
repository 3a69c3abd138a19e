//! Text Helpers
//!
//! Small string utilities shared by forms and list rendering.

use chrono::{DateTime, NaiveDate};

/// Trim and collapse internal whitespace runs into single spaces
pub fn normalize_spaces(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Split `text` around the first case-insensitive occurrence of `needle`.
/// Returns `None` when the needle is blank or absent.
pub fn highlight_segments<'a>(text: &'a str, needle: &str) -> Option<(&'a str, &'a str, &'a str)> {
    let needle = needle.trim();
    if needle.is_empty() {
        return None;
    }
    let needle_len = needle.chars().count();

    for (start, _) in text.char_indices() {
        let mut candidate = text[start..].char_indices();
        let mut end = start;
        let mut matched = 0;
        for n in needle.chars() {
            match candidate.next() {
                Some((offset, c)) if c.to_lowercase().eq(n.to_lowercase()) => {
                    end = start + offset + c.len_utf8();
                    matched += 1;
                }
                _ => break,
            }
        }
        if matched == needle_len {
            return Some((&text[..start], &text[start..end], &text[end..]));
        }
    }
    None
}

/// Backend timestamp as "15 Mar 2024"; unparseable input is shown as-is
pub fn format_created_date(raw: &str) -> String {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return parsed.format("%-d %b %Y").to_string();
    }
    raw.get(..10)
        .and_then(|day| NaiveDate::parse_from_str(day, "%Y-%m-%d").ok())
        .map(|date| date.format("%-d %b %Y").to_string())
        .unwrap_or_else(|| raw.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_spaces() {
        assert_eq!(normalize_spaces("  What   is\ta  closure? "), "What is a closure?");
        assert_eq!(normalize_spaces("   "), "");
    }

    #[test]
    fn test_highlight_first_match_only() {
        let segments = highlight_segments("Rust traits and rust generics", "RUST");
        assert_eq!(segments, Some(("", "Rust", " traits and rust generics")));

        let segments = highlight_segments("What is a Closure?", "closure");
        assert_eq!(segments, Some(("What is a ", "Closure", "?")));
    }

    #[test]
    fn test_highlight_blank_or_missing() {
        assert_eq!(highlight_segments("Anything", "   "), None);
        assert_eq!(highlight_segments("Anything", "zzz"), None);
        assert_eq!(highlight_segments("ab", "abc"), None);
    }

    #[test]
    fn test_highlight_multibyte() {
        let segments = highlight_segments("Über große Dinge", "GROSSE");
        assert_eq!(segments, None);
        let segments = highlight_segments("Über große Dinge", "ÜBER");
        assert_eq!(segments, Some(("", "Über", " große Dinge")));
    }

    #[test]
    fn test_format_created_date() {
        assert_eq!(format_created_date("2024-03-15T10:20:30.000Z"), "15 Mar 2024");
        assert_eq!(format_created_date("2024-03-05"), "5 Mar 2024");
        assert_eq!(format_created_date("not a date"), "not a date");
    }
}
