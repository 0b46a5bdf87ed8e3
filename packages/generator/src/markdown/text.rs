//! Text wrapping utilities for Markdown output.

use textwrap::{fill, Options};

/// Wrap text at the specified width, preserving paragraph breaks.
///
/// Paragraphs are separated by blank lines; each is re-flowed
/// independently so an existing hard break between paragraphs survives.
#[must_use]
pub fn wrap_text(text: &str, width: usize) -> String {
    let options = Options::new(width);

    text.split("\n\n")
        .map(|paragraph| fill(paragraph, &options))
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_text_simple() {
        let text = "This is a simple text that should be wrapped when it exceeds the specified width limit.";
        let wrapped = wrap_text(text, 40);
        assert!(wrapped.contains('\n'));
        assert!(wrapped.lines().all(|line| line.len() <= 40));
    }

    #[test]
    fn test_wrap_text_preserves_paragraphs() {
        let text = "First paragraph.\n\nSecond paragraph.";
        let wrapped = wrap_text(text, 100);
        assert_eq!(wrapped, text);
    }

    #[test]
    fn test_wrap_text_short_text_unchanged() {
        assert_eq!(wrap_text("Short text", 40), "Short text");
    }
}
