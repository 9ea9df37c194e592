//! Flat-text report rendering.
//!
//! The report tags each paragraph with its style name and renders tables
//! row by row, preserving original body order:
//!
//! ```text
//! ================================================================================
//! FILE: example.docx
//! ================================================================================
//!
//! [Heading 1] Title
//! [Normal] Body text
//! [TABLE START]
//!   Row 0: A | B
//! [TABLE END]
//! ```

use crate::model::{Block, Document, Paragraph, Table};

/// Width of the `=` separator lines framing each file header.
const SEPARATOR_WIDTH: usize = 80;

/// Convert a document to a flat-text report block.
///
/// `name` is the display name written into the `FILE:` header line,
/// typically the basename of the input file.
///
/// # Example
///
/// ```
/// use undocx::model::{Document, Paragraph};
/// use undocx::render::to_report;
///
/// let mut doc = Document::new();
/// doc.add_paragraph(Paragraph::with_style("Title", "Heading 1"));
///
/// let report = to_report(&doc, "example.docx");
/// assert!(report.contains("FILE: example.docx"));
/// assert!(report.contains("[Heading 1] Title"));
/// ```
pub fn to_report(document: &Document, name: &str) -> String {
    ReportRenderer::new().render(document, name)
}

/// Renderer that builds a flat report line by line.
#[derive(Debug, Default)]
pub struct ReportRenderer {
    lines: Vec<String>,
}

impl ReportRenderer {
    /// Create a new report renderer.
    pub fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Render a document, consuming the renderer.
    ///
    /// Returns the report block as a single string with lines joined by
    /// `\n`. The block carries no trailing newline; callers appending
    /// blocks to a shared sink add their own terminator.
    pub fn render(mut self, document: &Document, name: &str) -> String {
        self.push_header(name);
        for block in &document.body {
            self.push_block(block);
        }
        self.lines.join("\n")
    }

    fn push_header(&mut self, name: &str) {
        let separator = "=".repeat(SEPARATOR_WIDTH);
        self.lines.push(separator.clone());
        self.lines.push(format!("FILE: {name}"));
        self.lines.push(separator);
        self.lines.push(String::new());
    }

    fn push_block(&mut self, block: &Block) {
        match block {
            Block::Paragraph(para) => self.push_paragraph(para),
            Block::Table(table) => self.push_table(table),
        }
    }

    /// Emit one `[<style>] <text>` line for a paragraph.
    ///
    /// Paragraphs that are empty after trimming produce no output at all,
    /// while the emitted text itself keeps its original whitespace.
    fn push_paragraph(&mut self, para: &Paragraph) {
        if para.is_blank() {
            return;
        }
        self.lines
            .push(format!("[{}] {}", para.style_name(), para.text));
    }

    /// Emit a `[TABLE START]` .. `[TABLE END]` section for a table.
    ///
    /// Rows are numbered from 0 in source order. A table with no rows
    /// still emits both marker lines, and a row with no cells emits an
    /// empty cell list after the `Row <index>: ` prefix.
    fn push_table(&mut self, table: &Table) {
        self.lines.push("[TABLE START]".to_string());
        for (index, row) in table.rows.iter().enumerate() {
            let cells: Vec<String> = row.cells.iter().map(|c| cell_text(c)).collect();
            self.lines
                .push(format!("  Row {}: {}", index, cells.join(" | ")));
        }
        self.lines.push("[TABLE END]".to_string());
        self.lines.push(String::new());
    }
}

/// Normalize a cell for row output: trim outer whitespace and replace
/// embedded newlines with the cell separator.
fn cell_text(cell: &str) -> String {
    cell.trim().replace('\n', " | ")
}
