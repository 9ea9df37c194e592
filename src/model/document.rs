//! Document-level types.

use super::{Block, Paragraph, Table};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A parsed DOCX document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// Document metadata (title, author, etc.)
    pub metadata: Metadata,

    /// Body blocks in original document order
    pub body: Vec<Block>,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self {
            metadata: Metadata::default(),
            body: Vec::new(),
        }
    }

    /// Get the number of body blocks.
    pub fn block_count(&self) -> usize {
        self.body.len()
    }

    /// Get the number of paragraphs in the body.
    pub fn paragraph_count(&self) -> usize {
        self.paragraphs().count()
    }

    /// Get the number of tables in the body.
    pub fn table_count(&self) -> usize {
        self.tables().count()
    }

    /// Iterate over body paragraphs in document order.
    pub fn paragraphs(&self) -> impl Iterator<Item = &Paragraph> {
        self.body.iter().filter_map(Block::as_paragraph)
    }

    /// Iterate over body tables in document order.
    pub fn tables(&self) -> impl Iterator<Item = &Table> {
        self.body.iter().filter_map(Block::as_table)
    }

    /// Add a block to the body.
    pub fn add_block(&mut self, block: Block) {
        self.body.push(block);
    }

    /// Add a paragraph to the body.
    pub fn add_paragraph(&mut self, paragraph: Paragraph) {
        self.body.push(Block::Paragraph(paragraph));
    }

    /// Add a table to the body.
    pub fn add_table(&mut self, table: Table) {
        self.body.push(Block::Table(table));
    }

    /// Check if the document has any body blocks.
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Get plain text content of the entire document.
    pub fn plain_text(&self) -> String {
        self.body
            .iter()
            .map(|block| match block {
                Block::Paragraph(p) => p.plain_text().to_string(),
                Block::Table(t) => t.plain_text(),
            })
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

/// Document metadata from the package core properties
/// (`docProps/core.xml`). Absent part or fields stay `None`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Metadata {
    /// Document title
    pub title: Option<String>,

    /// Document author (dc:creator)
    pub author: Option<String>,

    /// Document subject
    pub subject: Option<String>,

    /// Keywords
    pub keywords: Option<String>,

    /// Last person to modify the document
    pub last_modified_by: Option<String>,

    /// Revision counter
    pub revision: Option<String>,

    /// Creation date
    pub created: Option<DateTime<Utc>>,

    /// Last modification date
    pub modified: Option<DateTime<Utc>>,
}

impl Metadata {
    /// Check if no field is populated.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.author.is_none()
            && self.subject.is_none()
            && self.keywords.is_none()
            && self.last_modified_by.is_none()
            && self.revision.is_none()
            && self.created.is_none()
            && self.modified.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_new() {
        let doc = Document::new();
        assert!(doc.is_empty());
        assert_eq!(doc.block_count(), 0);
        assert!(doc.metadata.is_empty());
    }

    #[test]
    fn test_body_counts() {
        let mut doc = Document::new();
        doc.add_paragraph(Paragraph::new("one"));
        doc.add_table(Table::new());
        doc.add_paragraph(Paragraph::new("two"));

        assert_eq!(doc.block_count(), 3);
        assert_eq!(doc.paragraph_count(), 2);
        assert_eq!(doc.table_count(), 1);
    }

    #[test]
    fn test_plain_text_preserves_order() {
        let mut doc = Document::new();
        doc.add_paragraph(Paragraph::new("before"));
        let mut table = Table::new();
        table.add_row(super::super::TableRow::from_strings(["a", "b"]));
        doc.add_table(table);
        doc.add_paragraph(Paragraph::new("after"));

        assert_eq!(doc.plain_text(), "before\n\na\tb\n\nafter");
    }
}
