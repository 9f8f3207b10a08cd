use crate::display_width::{LINE_BREAK, chunk_by_width, display_width};

pub const DEFAULT_WRAP_WIDTH: usize = 20;

/// Wrap `text` so no rendered line is wider than `max_chars` columns.
///
/// Text that already fits is returned untouched, even if it contains
/// newlines. Longer text is re-flowed paragraph by paragraph: words are
/// packed greedily, lines are joined with `<br/>` and paragraphs keep their
/// original `\n` separators. Words wider than the budget are cut into
/// fixed-width chunks without hyphenation.
pub fn wrap(text: &str, max_chars: usize) -> String {
    if display_width(text) <= max_chars {
        return text.to_string();
    }

    text.split('\n')
        .map(|paragraph| wrap_paragraph(paragraph, max_chars).join(LINE_BREAK))
        .collect::<Vec<_>>()
        .join("\n")
}

fn wrap_paragraph(paragraph: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in paragraph.split_whitespace() {
        let word_width = display_width(word);

        if word_width > max_chars {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            let mut chunks = chunk_by_width(word, max_chars);
            let remainder = chunks.pop().unwrap_or_default();
            lines.extend(chunks.into_iter().map(str::to_string));
            current.push_str(remainder);
            continue;
        }

        if current.is_empty() {
            current.push_str(word);
        } else if display_width(&current) + word_width + 1 <= max_chars {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::replace(&mut current, word.to_string()));
        }
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}
