//! Composable text components.
//!
//! Every component appends complete lines to a caller-owned buffer.

pub mod carousel;
pub mod chat;
pub mod gallery;
pub mod records;

/// Appends a horizontal rule `cols` wide.
pub fn border(out: &mut String, cols: usize) {
    out.push_str(&"─".repeat(cols));
    out.push('\n');
}

/// Shortens `text` to at most `max` characters, marking the cut with `…`.
#[must_use]
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(1)).collect();
    format!("{kept}…")
}

/// Greedy word wrap at `cols` characters. Words longer than a line are kept
/// whole.
#[must_use]
pub fn wrap(text: &str, cols: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        let needed = line.chars().count() + word.chars().count() + usize::from(!line.is_empty());
        if !line.is_empty() && needed > cols {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

/// Centers `text` within `cols` using leading spaces.
#[must_use]
pub fn centered(text: &str, cols: usize) -> String {
    let padding = cols.saturating_sub(text.chars().count()) / 2;
    format!("{}{text}", " ".repeat(padding))
}
