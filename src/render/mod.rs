//! Rendering module for converting documents to various output formats.

mod json;
mod report;
mod result;
mod text;

pub use json::{to_json, JsonFormat};
pub use report::{to_report, ReportRenderer};
pub use result::{ReportResult, ReportStats};
pub use text::to_text;
