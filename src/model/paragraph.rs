//! Paragraph types.

use serde::{Deserialize, Serialize};

/// Style name a paragraph resolves to when it carries no explicit style.
pub const DEFAULT_STYLE: &str = "Normal";

/// A paragraph of body text.
///
/// `text` is the raw paragraph text exactly as extracted: run text
/// concatenated in order, with tabs as `\t` and explicit breaks as `\n`,
/// never trimmed. `style` holds the resolved style *name* (for example
/// "Heading 1"), not the internal style id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Paragraph {
    /// Raw paragraph text
    pub text: String,

    /// Resolved style name, or None when the paragraph has no explicit style
    pub style: Option<String>,
}

impl Paragraph {
    /// Create a paragraph with plain text and no explicit style.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: None,
        }
    }

    /// Create a paragraph with a style name.
    pub fn with_style(text: impl Into<String>, style: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: Some(style.into()),
        }
    }

    /// The style name used for display, defaulting to [`DEFAULT_STYLE`].
    pub fn style_name(&self) -> &str {
        self.style.as_deref().unwrap_or(DEFAULT_STYLE)
    }

    /// Check if the paragraph text trims to nothing.
    ///
    /// Blank paragraphs stay in the body (order is preserved end to end);
    /// renderers decide whether to show them.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Get the paragraph text.
    pub fn plain_text(&self) -> &str {
        &self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_name_default() {
        let p = Paragraph::new("body text");
        assert_eq!(p.style_name(), "Normal");

        let h = Paragraph::with_style("Title", "Heading 1");
        assert_eq!(h.style_name(), "Heading 1");
    }

    #[test]
    fn test_is_blank() {
        assert!(Paragraph::new("").is_blank());
        assert!(Paragraph::new("  \t \n").is_blank());
        assert!(!Paragraph::new("  x ").is_blank());
    }

    #[test]
    fn test_text_is_raw() {
        let p = Paragraph::new("  padded  ");
        assert_eq!(p.plain_text(), "  padded  ");
    }
}
