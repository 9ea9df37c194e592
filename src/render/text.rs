//! Plain text rendering without report framing.

use crate::model::{Block, Document};

/// Convert a document to plain text.
///
/// Paragraphs keep their text without style tags, tables are rendered as
/// tab-separated rows, and blocks are separated by blank lines. Blocks
/// that contain no visible text are skipped.
///
/// # Example
///
/// ```
/// use undocx::model::{Document, Paragraph};
/// use undocx::render::to_text;
///
/// let mut doc = Document::new();
/// doc.add_paragraph(Paragraph::new("Hello"));
/// doc.add_paragraph(Paragraph::new("World"));
///
/// assert_eq!(to_text(&doc), "Hello\n\nWorld");
/// ```
pub fn to_text(document: &Document) -> String {
    let sections: Vec<String> = document
        .body
        .iter()
        .map(|block| match block {
            Block::Paragraph(para) => para.text.clone(),
            Block::Table(table) => table.plain_text(),
        })
        .filter(|section| !section.trim().is_empty())
        .collect();

    sections.join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Paragraph, Table, TableRow};

    #[test]
    fn test_paragraphs_separated_by_blank_lines() {
        let mut doc = Document::new();
        doc.add_paragraph(Paragraph::new("First"));
        doc.add_paragraph(Paragraph::new("Second"));

        assert_eq!(to_text(&doc), "First\n\nSecond");
    }

    #[test]
    fn test_blank_blocks_skipped() {
        let mut doc = Document::new();
        doc.add_paragraph(Paragraph::new("First"));
        doc.add_paragraph(Paragraph::new("  "));
        doc.add_paragraph(Paragraph::new("Second"));

        assert_eq!(to_text(&doc), "First\n\nSecond");
    }

    #[test]
    fn test_table_tab_separated() {
        let mut doc = Document::new();
        let mut table = Table::new();
        table.add_row(TableRow::from_strings(vec!["A", "B"]));
        table.add_row(TableRow::from_strings(vec!["C", "D"]));
        doc.add_table(table);

        assert_eq!(to_text(&doc), "A\tB\nC\tD");
    }

    #[test]
    fn test_empty_document() {
        assert_eq!(to_text(&Document::new()), "");
    }
}
