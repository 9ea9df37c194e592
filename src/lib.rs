//! # undocx
//!
//! DOCX content extraction library for Rust.
//!
//! This library parses Word documents into a simple body model of
//! paragraphs and tables, and flattens them into a style-tagged text
//! report, plain text, or JSON.
//!
//! ## Quick Start
//!
//! ```no_run
//! use undocx::{parse_file, render};
//!
//! fn main() -> undocx::Result<()> {
//!     // Parse a DOCX file
//!     let doc = parse_file("document.docx")?;
//!
//!     // Flatten to a report block
//!     let report = render::to_report(&doc, "document.docx");
//!     println!("{}", report);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Reading order preserved**: paragraphs and tables in original body order
//! - **Style-tagged paragraphs**: each line carries its resolved style name
//! - **Deterministic table rendering**: row-by-row with 0-based indices
//! - **Multiple output formats**: flat report, plain text, JSON
//! - **Batch aggregation**: many documents into one report, in input order
//! - **Parallel processing**: uses Rayon for multi-document batches

pub mod batch;
pub mod detect;
pub mod error;
pub mod model;
pub mod parser;
pub mod render;

// Re-export commonly used types
pub use batch::{build_report, write_report, BatchConfig, ErrorMode};
pub use detect::{detect_format_from_bytes, detect_format_from_path, is_docx, FormatType};
pub use error::{Error, Result};
pub use model::{Block, Document, Metadata, Paragraph, Table, TableRow};
pub use parser::{DocxParser, StyleMap};
pub use render::{JsonFormat, ReportResult, ReportStats};

use std::io::{Read, Seek};
use std::path::Path;

/// Parse a DOCX file and return a structured document.
///
/// # Arguments
///
/// * `path` - Path to the DOCX file
///
/// # Returns
///
/// A `Result` containing the parsed `Document` or an error.
///
/// # Example
///
/// ```no_run
/// use undocx::parse_file;
///
/// let doc = parse_file("document.docx").unwrap();
/// println!("Blocks: {}", doc.block_count());
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Document> {
    let parser = DocxParser::open(path)?;
    parser.parse()
}

/// Parse a DOCX from bytes.
///
/// # Arguments
///
/// * `data` - DOCX file content as bytes
///
/// # Example
///
/// ```no_run
/// use undocx::parse_bytes;
///
/// let data = std::fs::read("document.docx").unwrap();
/// let doc = parse_bytes(&data).unwrap();
/// ```
pub fn parse_bytes(data: &[u8]) -> Result<Document> {
    let parser = DocxParser::from_bytes(data)?;
    parser.parse()
}

/// Parse a DOCX from a reader.
///
/// The reader must support seeking because the DOCX container is a ZIP
/// archive with a trailing central directory.
///
/// # Example
///
/// ```no_run
/// use undocx::parse_reader;
/// use std::fs::File;
///
/// let file = File::open("document.docx").unwrap();
/// let doc = parse_reader(file).unwrap();
/// ```
pub fn parse_reader<R: Read + Seek>(reader: R) -> Result<Document> {
    let parser = DocxParser::from_reader(reader)?;
    parser.parse()
}

/// Extract plain text from a DOCX file.
///
/// # Example
///
/// ```no_run
/// use undocx::extract_text;
///
/// let text = extract_text("document.docx").unwrap();
/// println!("{}", text);
/// ```
pub fn extract_text<P: AsRef<Path>>(path: P) -> Result<String> {
    let doc = parse_file(path)?;
    Ok(render::to_text(&doc))
}

/// Flatten a single DOCX file into a report block.
///
/// The `FILE:` header carries the path's final component.
///
/// # Example
///
/// ```no_run
/// use undocx::flatten_file;
///
/// let report = flatten_file("docs/document.docx").unwrap();
/// assert!(report.contains("FILE: document.docx"));
/// ```
pub fn flatten_file<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    let doc = parse_file(path)?;
    Ok(render::to_report(&doc, &batch::display_name(path)))
}

/// Convert a DOCX to JSON.
///
/// # Example
///
/// ```no_run
/// use undocx::{to_json, JsonFormat};
///
/// let json = to_json("document.docx", JsonFormat::Pretty).unwrap();
/// std::fs::write("output.json", json).unwrap();
/// ```
pub fn to_json<P: AsRef<Path>>(path: P, format: JsonFormat) -> Result<String> {
    let doc = parse_file(path)?;
    render::to_json(&doc, format)
}

/// Builder for parsing and flattening DOCX documents.
///
/// # Example
///
/// ```no_run
/// use undocx::Undocx;
/// use std::path::PathBuf;
///
/// let stats = Undocx::new()
///     .skip_errors()
///     .write_report(vec![PathBuf::from("a.docx")], "report.txt")?;
/// println!("{} documents flattened", stats.documents);
/// # Ok::<(), undocx::Error>(())
/// ```
pub struct Undocx {
    error_mode: ErrorMode,
}

impl Undocx {
    /// Create a new builder with the default abort-on-error behavior.
    pub fn new() -> Self {
        Self {
            error_mode: ErrorMode::default(),
        }
    }

    /// Skip unreadable documents instead of aborting the run.
    pub fn skip_errors(mut self) -> Self {
        self.error_mode = ErrorMode::Skip;
        self
    }

    /// Set the error handling mode explicitly.
    pub fn with_error_mode(mut self, mode: ErrorMode) -> Self {
        self.error_mode = mode;
        self
    }

    /// Parse a DOCX file and return a result wrapper.
    pub fn parse<P: AsRef<Path>>(&self, path: P) -> Result<UndocxResult> {
        let document = parse_file(path)?;
        Ok(UndocxResult { document })
    }

    /// Parse a DOCX from bytes.
    pub fn parse_bytes(&self, data: &[u8]) -> Result<UndocxResult> {
        let document = parse_bytes(data)?;
        Ok(UndocxResult { document })
    }

    /// Flatten all inputs into a single report string.
    pub fn flatten(&self, inputs: &[std::path::PathBuf]) -> Result<ReportResult> {
        batch::build_report(inputs, self.error_mode)
    }

    /// Flatten all inputs and write the report to `output`.
    pub fn write_report(
        &self,
        inputs: Vec<std::path::PathBuf>,
        output: impl Into<std::path::PathBuf>,
    ) -> Result<ReportStats> {
        let config = BatchConfig::new(inputs, output).error_mode(self.error_mode);
        batch::write_report(&config)
    }
}

impl Default for Undocx {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of parsing a DOCX document.
pub struct UndocxResult {
    /// The parsed document
    pub document: Document,
}

impl UndocxResult {
    /// Flatten to a report block under the given display name.
    pub fn to_report(&self, name: &str) -> String {
        render::to_report(&self.document, name)
    }

    /// Convert to plain text.
    pub fn to_text(&self) -> String {
        render::to_text(&self.document)
    }

    /// Convert to JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.document, format)
    }

    /// Get the document.
    pub fn document(&self) -> &Document {
        &self.document
    }
}
