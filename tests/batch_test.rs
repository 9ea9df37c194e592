//! Integration tests for batch report aggregation.

use std::fs;
use std::io::{Cursor, Write};
use std::path::Path;

use tempfile::tempdir;
use undocx::{build_report, write_report, BatchConfig, Error, ErrorMode};
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

fn docx_bytes(body: &str) -> Vec<u8> {
    let document_xml = format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
<w:body>{body}</w:body>
</w:document>"#
    );

    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    writer
        .start_file("word/document.xml", SimpleFileOptions::default())
        .unwrap();
    writer.write_all(document_xml.as_bytes()).unwrap();
    writer.finish().unwrap().into_inner()
}

fn write_docx(dir: &Path, name: &str, body: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, docx_bytes(body)).unwrap();
    path
}

fn paragraph(text: &str) -> String {
    format!("<w:p><w:r><w:t>{text}</w:t></w:r></w:p>")
}

#[test]
fn test_blocks_in_input_order() {
    let dir = tempdir().unwrap();
    let a = write_docx(dir.path(), "a.docx", &paragraph("from a"));
    let b = write_docx(dir.path(), "b.docx", &paragraph("from b"));

    let result = build_report(&[b, a], ErrorMode::Abort).unwrap();

    let pos_b = result.content.find("FILE: b.docx").unwrap();
    let pos_a = result.content.find("FILE: a.docx").unwrap();
    assert!(pos_b < pos_a, "blocks must follow input order, not name order");
    assert_eq!(result.stats.documents, 2);
}

#[test]
fn test_missing_file_placeholder_in_position() {
    let dir = tempdir().unwrap();
    let a = write_docx(dir.path(), "a.docx", &paragraph("first"));
    let missing = dir.path().join("gone.docx");
    let c = write_docx(dir.path(), "c.docx", &paragraph("third"));

    let result = build_report(&[a, missing.clone(), c], ErrorMode::Abort).unwrap();

    let placeholder = format!("File not found: {}", missing.display());
    let lines: Vec<&str> = result.content.lines().collect();
    let pos = lines.iter().position(|l| *l == placeholder).unwrap();

    // placeholder sits between the two report blocks
    let pos_a = lines.iter().position(|l| *l == "FILE: a.docx").unwrap();
    let pos_c = lines.iter().position(|l| *l == "FILE: c.docx").unwrap();
    assert!(pos_a < pos && pos < pos_c);
    assert_eq!(result.stats.documents, 2);
    assert_eq!(result.stats.missing, 1);
}

#[test]
fn test_unreadable_document_aborts_by_default() {
    let dir = tempdir().unwrap();
    let good = write_docx(dir.path(), "good.docx", &paragraph("fine"));
    let bad = dir.path().join("bad.docx");
    fs::write(&bad, b"PK\x03\x04 garbage that is not a zip").unwrap();

    let result = build_report(&[good, bad], ErrorMode::Abort);
    assert!(result.is_err());
    assert!(result.unwrap_err().is_load_error());
}

#[test]
fn test_unreadable_document_skipped_in_skip_mode() {
    let dir = tempdir().unwrap();
    let good = write_docx(dir.path(), "good.docx", &paragraph("fine"));
    let bad = dir.path().join("bad.docx");
    fs::write(&bad, b"PK\x03\x04 garbage that is not a zip").unwrap();
    let tail = write_docx(dir.path(), "tail.docx", &paragraph("still here"));

    let result = build_report(&[good, bad, tail], ErrorMode::Skip).unwrap();

    assert!(result.content.contains("FILE: good.docx"));
    assert!(result.content.contains("FILE: tail.docx"));
    assert!(!result.content.contains("bad.docx"));
    assert_eq!(result.stats.documents, 2);
    assert_eq!(result.stats.skipped, 1);
}

#[test]
fn test_not_a_docx_is_a_load_error_not_missing() {
    let dir = tempdir().unwrap();
    let text_file = dir.path().join("notes.docx");
    fs::write(&text_file, "just plain text").unwrap();

    let result = build_report(&[text_file], ErrorMode::Abort);
    assert!(matches!(result, Err(Error::UnknownFormat)));
}

#[test]
fn test_write_report_to_file() {
    let dir = tempdir().unwrap();
    let input = write_docx(dir.path(), "doc.docx", &paragraph("content"));
    let output = dir.path().join("report.txt");

    let config = BatchConfig::new(vec![input], &output);
    let stats = write_report(&config).unwrap();

    assert_eq!(stats.documents, 1);
    let written = fs::read_to_string(&output).unwrap();
    assert!(written.contains("FILE: doc.docx"));
    assert!(written.contains("[Normal] content"));
    assert!(written.ends_with('\n'));
}

#[test]
fn test_write_report_output_failure_is_fatal() {
    let dir = tempdir().unwrap();
    let input = write_docx(dir.path(), "doc.docx", &paragraph("content"));
    let output = dir.path().join("no_such_dir").join("report.txt");

    let config = BatchConfig::new(vec![input], output);
    let result = write_report(&config);

    assert!(matches!(result, Err(Error::Io(_))));
}

#[test]
fn test_each_block_newline_terminated() {
    let dir = tempdir().unwrap();
    let a = write_docx(dir.path(), "a.docx", &paragraph("one"));
    let b = write_docx(dir.path(), "b.docx", &paragraph("two"));

    let result = build_report(&[a, b], ErrorMode::Abort).unwrap();

    // the second header's separator starts on its own line
    assert!(result.content.contains("[Normal] one\n================"));
    assert!(result.content.ends_with("[Normal] two\n"));
}
