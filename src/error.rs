//! Error types for undocx library.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for undocx operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during DOCX processing.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// An input path does not exist. Recoverable at the batch level:
    /// the aggregated report gets a placeholder line instead of a block.
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// The file format is not recognized as DOCX.
    #[error("Unknown file format: not a valid DOCX")]
    UnknownFormat,

    /// The ZIP container is corrupted or unreadable.
    #[error("Invalid DOCX container: {0}")]
    InvalidContainer(String),

    /// A required package part is missing from the container.
    #[error("Missing document part: {0}")]
    MissingPart(String),

    /// A document part is not well-formed XML.
    #[error("XML parsing error: {0}")]
    Xml(String),

    /// Error during rendering (report, text, JSON).
    #[error("Rendering error: {0}")]
    Render(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Whether this error means the document exists but could not be loaded.
    ///
    /// Load failures are whole-document failures: no partial report block is
    /// ever produced for the document. `ErrorMode::Skip` only skips these.
    pub fn is_load_error(&self) -> bool {
        matches!(
            self,
            Error::UnknownFormat | Error::InvalidContainer(_) | Error::MissingPart(_) | Error::Xml(_)
        )
    }
}

impl From<zip::result::ZipError> for Error {
    fn from(err: zip::result::ZipError) -> Self {
        match err {
            zip::result::ZipError::Io(e) => Error::Io(e),
            zip::result::ZipError::FileNotFound => {
                Error::MissingPart("entry not found in archive".to_string())
            }
            other => Error::InvalidContainer(other.to_string()),
        }
    }
}

impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        Error::Xml(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Render(err.to_string())
    }
}
