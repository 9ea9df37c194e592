//! JSON rendering of the document model.

use crate::error::{Error, Result};
use crate::model::Document;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed with indentation.
    #[default]
    Pretty,
    /// Compact single-line output.
    Compact,
}

/// Serialize a document to JSON.
///
/// The output contains the document metadata and the full body sequence,
/// with each block tagged as `paragraph` or `table`.
///
/// # Example
///
/// ```
/// use undocx::model::{Document, Paragraph};
/// use undocx::render::{to_json, JsonFormat};
///
/// let mut doc = Document::new();
/// doc.add_paragraph(Paragraph::new("Hello"));
///
/// let json = to_json(&doc, JsonFormat::Compact).unwrap();
/// assert!(json.contains("\"type\":\"paragraph\""));
/// ```
pub fn to_json(document: &Document, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(document),
        JsonFormat::Compact => serde_json::to_string(document),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization failed: {e}")))
}
