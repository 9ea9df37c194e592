//! DOCX format detection and validation.

use crate::error::{Error, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Supported container formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatType {
    /// OOXML WordprocessingML package (.docx)
    Docx,
}

impl std::fmt::Display for FormatType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FormatType::Docx => write!(f, "DOCX"),
        }
    }
}

/// ZIP local file header magic: PK\x03\x04
const ZIP_MAGIC: &[u8] = b"PK\x03\x04";
const SNIFF_LEN: usize = 8;

/// Detect the container format from a file path.
///
/// A positive match means the bytes form a ZIP container; whether the
/// archive actually holds WordprocessingML content is established when the
/// package is opened (`word/document.xml` must be present).
///
/// # Arguments
/// * `path` - Path to the file
///
/// # Returns
/// * `Ok(FormatType::Docx)` if the file starts with a ZIP local file header
/// * `Err(Error::UnknownFormat)` otherwise
///
/// # Example
/// ```no_run
/// use undocx::detect::detect_format_from_path;
///
/// let format = detect_format_from_path("document.docx").unwrap();
/// println!("Format: {}", format);
/// ```
pub fn detect_format_from_path<P: AsRef<Path>>(path: P) -> Result<FormatType> {
    let file = File::open(path)?;
    let mut header = Vec::with_capacity(SNIFF_LEN);
    BufReader::new(file)
        .take(SNIFF_LEN as u64)
        .read_to_end(&mut header)?;
    detect_format_from_bytes(&header)
}

/// Detect the container format from bytes.
///
/// # Arguments
/// * `data` - Byte slice containing at least the first 4 bytes of the file
///
/// # Returns
/// * `Ok(FormatType::Docx)` if the data starts with a ZIP local file header
/// * `Err(Error::UnknownFormat)` otherwise
pub fn detect_format_from_bytes(data: &[u8]) -> Result<FormatType> {
    // An empty archive starts with the end-of-central-directory magic
    // (PK\x05\x06) instead; it cannot be a DOCX, so only the local file
    // header counts.
    if data.len() < ZIP_MAGIC.len() || !data.starts_with(ZIP_MAGIC) {
        return Err(Error::UnknownFormat);
    }

    Ok(FormatType::Docx)
}

/// Check if a file looks like a DOCX container.
pub fn is_docx<P: AsRef<Path>>(path: P) -> bool {
    detect_format_from_path(path).is_ok()
}

/// Check if bytes look like a DOCX container.
pub fn is_docx_bytes(data: &[u8]) -> bool {
    detect_format_from_bytes(data).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_valid_container() {
        let data = b"PK\x03\x04\x14\x00\x00\x00";
        let format = detect_format_from_bytes(data).unwrap();
        assert_eq!(format, FormatType::Docx);
        assert_eq!(format.to_string(), "DOCX");
    }

    #[test]
    fn test_detect_invalid_format() {
        let data = b"<!DOCTYPE html>";
        let result = detect_format_from_bytes(data);
        assert!(matches!(result, Err(Error::UnknownFormat)));
    }

    #[test]
    fn test_detect_empty_archive() {
        // End-of-central-directory only: a zero-entry ZIP, never a DOCX.
        let data = b"PK\x05\x06\x00\x00\x00\x00";
        let result = detect_format_from_bytes(data);
        assert!(matches!(result, Err(Error::UnknownFormat)));
    }

    #[test]
    fn test_detect_too_short() {
        let result = detect_format_from_bytes(b"PK");
        assert!(matches!(result, Err(Error::UnknownFormat)));
    }

    #[test]
    fn test_is_docx_bytes() {
        assert!(is_docx_bytes(b"PK\x03\x04\x14\x00"));
        assert!(!is_docx_bytes(b"%PDF-1.7"));
        assert!(!is_docx_bytes(b""));
    }
}
