//! Greedy word wrapping for SVG labels, which have no native line breaking.

/// Characters per line of node labels.
pub const LABEL_CHARS: usize = 25;
/// Characters per line of the details title.
pub const TITLE_CHARS: usize = 30;
/// Characters per line of the details description.
pub const DESCRIPTION_CHARS: usize = 45;

/// Wrap `text` into lines of roughly `max_chars` characters.
///
/// A word joins the current line while the line's length plus the word's
/// length stays within `max_chars` (the joining space is not counted). Words
/// longer than `max_chars` get a line of their own.
pub fn wrap_words(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.chars().count() + word.chars().count() <= max_chars {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
        } else {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            current.push_str(word);
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Wrap every `\n`-separated paragraph, with an empty line between paragraphs.
pub fn wrap_paragraphs(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    for (index, paragraph) in text.split('\n').enumerate() {
        if index > 0 {
            lines.push(String::new());
        }
        lines.extend(wrap_words(paragraph, max_chars));
    }
    lines
}

/// Cut `text` to `max_chars` characters, marking the cut with `...`.
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(max_chars).collect();
    cut.push_str("...");
    cut
}
