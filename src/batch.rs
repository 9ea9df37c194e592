//! Batch flattening of multiple documents into one report file.
//!
//! Inputs are processed in parallel, but report blocks always appear in
//! the caller-specified input order. A missing input is replaced by a
//! `File not found: <path>` placeholder line; an unreadable document
//! aborts the run unless [`ErrorMode::Skip`] is selected.

use std::fs;
use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::error::{Error, Result};
use crate::parser::DocxParser;
use crate::render::{to_report, ReportResult, ReportStats};

/// How unreadable documents are handled during a batch run.
///
/// Missing files are never affected by this mode; they always turn into
/// a placeholder line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorMode {
    /// Abort the whole run on the first unreadable document.
    #[default]
    Abort,
    /// Log a warning, leave the document out, and continue.
    Skip,
}

/// Configuration for a batch run.
#[derive(Debug, Clone)]
pub struct BatchConfig {
    /// Input paths, in the order their blocks appear in the report.
    pub inputs: Vec<PathBuf>,
    /// Destination file for the aggregated report.
    pub output: PathBuf,
    /// Handling of unreadable documents.
    pub error_mode: ErrorMode,
}

impl BatchConfig {
    /// Create a configuration with the default [`ErrorMode::Abort`].
    pub fn new(inputs: Vec<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            inputs,
            output: output.into(),
            error_mode: ErrorMode::default(),
        }
    }

    /// Set the error handling mode.
    pub fn error_mode(mut self, mode: ErrorMode) -> Self {
        self.error_mode = mode;
        self
    }
}

/// Flatten all inputs into a single report string.
///
/// Each document's block (and each placeholder line) is terminated with
/// exactly one newline, so blocks never run together and the finished
/// report ends with a newline.
///
/// # Example
///
/// ```no_run
/// use undocx::batch::{build_report, ErrorMode};
/// use std::path::PathBuf;
///
/// let inputs = vec![PathBuf::from("a.docx"), PathBuf::from("b.docx")];
/// let result = build_report(&inputs, ErrorMode::Abort)?;
/// println!("{} documents flattened", result.stats.documents);
/// # Ok::<(), undocx::Error>(())
/// ```
pub fn build_report(inputs: &[PathBuf], error_mode: ErrorMode) -> Result<ReportResult> {
    let parts: Vec<(String, ReportStats)> = inputs
        .par_iter()
        .map(|path| flatten_input(path, error_mode))
        .collect::<Result<Vec<_>>>()?;

    let mut content = String::new();
    let mut stats = ReportStats::new();
    for (block, part) in parts {
        content.push_str(&block);
        stats.merge(&part);
    }

    Ok(ReportResult::new(content, stats))
}

/// Flatten all inputs and write the report to the configured output file.
///
/// Returns the run statistics. A failure to write the output is fatal
/// and surfaces as [`Error::Io`].
pub fn write_report(config: &BatchConfig) -> Result<ReportStats> {
    let result = build_report(&config.inputs, config.error_mode)?;
    fs::write(&config.output, result.content.as_bytes())?;
    log::debug!(
        "Wrote report for {} inputs to {}",
        config.inputs.len(),
        config.output.display()
    );
    Ok(result.stats)
}

/// Produce the report block for one input, newline-terminated.
fn flatten_input(path: &Path, error_mode: ErrorMode) -> Result<(String, ReportStats)> {
    let mut stats = ReportStats::new();

    match DocxParser::open(path).and_then(|parser| parser.parse()) {
        Ok(document) => {
            stats.add_document(&document);
            let name = display_name(path);
            Ok((format!("{}\n", to_report(&document, &name)), stats))
        }
        Err(Error::FileNotFound(_)) => {
            log::warn!("Input not found: {}", path.display());
            stats.add_missing();
            Ok((format!("File not found: {}\n", path.display()), stats))
        }
        Err(e) if error_mode == ErrorMode::Skip && e.is_load_error() => {
            log::warn!("Skipping unreadable document {}: {}", path.display(), e);
            stats.add_skipped();
            Ok((String::new(), stats))
        }
        Err(e) => Err(e),
    }
}

/// Display name for the `FILE:` header, the path's final component.
pub(crate) fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
