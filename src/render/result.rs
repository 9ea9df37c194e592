//! Report output with collected statistics.

use serde::Serialize;

use crate::model::Document;

/// Statistics collected while building a report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ReportStats {
    /// Documents successfully flattened into the report.
    pub documents: usize,
    /// Inputs that did not exist and were replaced by a placeholder line.
    pub missing: usize,
    /// Inputs skipped after a load failure.
    pub skipped: usize,
    /// Paragraph lines emitted across all documents.
    pub paragraphs: usize,
    /// Tables rendered across all documents.
    pub tables: usize,
}

impl ReportStats {
    /// Create empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one successfully flattened document.
    pub fn add_document(&mut self, document: &Document) {
        self.documents += 1;
        self.paragraphs += document.paragraphs().filter(|p| !p.is_blank()).count();
        self.tables += document.table_count();
    }

    /// Record one input that was not found.
    pub fn add_missing(&mut self) {
        self.missing += 1;
    }

    /// Record one input skipped after a load failure.
    pub fn add_skipped(&mut self) {
        self.skipped += 1;
    }

    /// Merge statistics from another part of the run.
    pub fn merge(&mut self, other: &ReportStats) {
        self.documents += other.documents;
        self.missing += other.missing;
        self.skipped += other.skipped;
        self.paragraphs += other.paragraphs;
        self.tables += other.tables;
    }

    /// Total number of inputs accounted for.
    pub fn total_inputs(&self) -> usize {
        self.documents + self.missing + self.skipped
    }
}

/// A built report together with its statistics.
#[derive(Debug, Clone)]
pub struct ReportResult {
    /// The aggregated report text.
    pub content: String,
    /// Statistics describing what went into the report.
    pub stats: ReportStats,
}

impl ReportResult {
    /// Create a new report result.
    pub fn new(content: String, stats: ReportStats) -> Self {
        Self { content, stats }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Paragraph, Table, TableRow};

    #[test]
    fn test_add_document_counts() {
        let mut doc = Document::new();
        doc.add_paragraph(Paragraph::new("text"));
        doc.add_paragraph(Paragraph::new("   "));
        let mut table = Table::new();
        table.add_row(TableRow::from_strings(vec!["A"]));
        doc.add_table(table);

        let mut stats = ReportStats::new();
        stats.add_document(&doc);

        assert_eq!(stats.documents, 1);
        assert_eq!(stats.paragraphs, 1);
        assert_eq!(stats.tables, 1);
    }

    #[test]
    fn test_merge() {
        let mut a = ReportStats {
            documents: 2,
            missing: 1,
            skipped: 0,
            paragraphs: 10,
            tables: 3,
        };
        let b = ReportStats {
            documents: 1,
            missing: 0,
            skipped: 1,
            paragraphs: 4,
            tables: 1,
        };

        a.merge(&b);

        assert_eq!(a.documents, 3);
        assert_eq!(a.missing, 1);
        assert_eq!(a.skipped, 1);
        assert_eq!(a.paragraphs, 14);
        assert_eq!(a.tables, 4);
        assert_eq!(a.total_inputs(), 5);
    }
}
