use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Line-break marker understood inside Mermaid node labels.
pub const LINE_BREAK: &str = "<br/>";

pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

fn char_width(ch: char) -> usize {
    UnicodeWidthChar::width(ch).unwrap_or(0)
}

/// Split `s` into consecutive pieces no wider than `max` columns.
///
/// A single character wider than `max` still gets a piece of its own so the
/// loop always makes progress.
pub fn chunk_by_width(s: &str, max: usize) -> Vec<&str> {
    let mut chunks = Vec::new();
    let mut start = 0;
    let mut width = 0;

    for (idx, ch) in s.char_indices() {
        let w = char_width(ch);
        if width + w > max && idx > start {
            chunks.push(&s[start..idx]);
            start = idx;
            width = 0;
        }
        width += w;
    }
    if start < s.len() {
        chunks.push(&s[start..]);
    }
    chunks
}

/// Split text on `<br/>`, `<br>`, `<br />` (case-insensitive).
pub fn split_br(s: &str) -> Vec<&str> {
    const TAGS: [&str; 3] = ["<br/>", "<br />", "<br>"];

    let lower = s.to_ascii_lowercase();
    let mut result = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < lower.len() {
        let rest = &lower[i..];
        if let Some(tag) = TAGS.iter().find(|tag| rest.starts_with(*tag)) {
            result.push(&s[start..i]);
            i += tag.len();
            start = i;
            continue;
        }
        i += rest.chars().next().map_or(1, char::len_utf8);
    }
    result.push(&s[start..]);
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_br_no_break() {
        assert_eq!(split_br("hello"), vec!["hello"]);
    }

    #[test]
    fn split_br_variants() {
        assert_eq!(split_br("A<br/>B"), vec!["A", "B"]);
        assert_eq!(split_br("A<br>B"), vec!["A", "B"]);
        assert_eq!(split_br("A<br />B"), vec!["A", "B"]);
        assert_eq!(split_br("A<BR/>B"), vec!["A", "B"]);
    }

    #[test]
    fn split_br_keeps_multibyte_text() {
        assert_eq!(split_br("日本<br/>語"), vec!["日本", "語"]);
    }

    #[test]
    fn chunk_ascii() {
        assert_eq!(chunk_by_width("abcdefg", 3), vec!["abc", "def", "g"]);
    }

    #[test]
    fn chunk_wide_chars_by_columns() {
        // each CJK character occupies two columns
        assert_eq!(chunk_by_width("日本語です", 4), vec!["日本", "語で", "す"]);
    }

    #[test]
    fn chunk_empty() {
        assert!(chunk_by_width("", 5).is_empty());
    }
}
