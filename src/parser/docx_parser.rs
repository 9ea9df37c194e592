//! DOCX document parser over the OOXML package.

use std::fs::File;
use std::io::{BufReader, Cursor, Read, Seek};
use std::path::Path;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use zip::ZipArchive;

use crate::detect::detect_format_from_bytes;
use crate::error::{Error, Result};
use crate::model::{Block, Document, Metadata, Paragraph, Table, TableRow};

use super::core_props;
use super::styles::StyleMap;

/// Package part holding the document body. Required.
const DOCUMENT_PART: &str = "word/document.xml";
/// Package part holding style definitions. Optional.
const STYLES_PART: &str = "word/styles.xml";
/// Package part holding core properties. Optional.
const CORE_PROPS_PART: &str = "docProps/core.xml";

/// DOCX document parser.
///
/// Opening pulls the relevant package parts out of the ZIP container;
/// [`parse`](DocxParser::parse) then streams `word/document.xml` into a
/// [`Document`], yielding body blocks in original document order.
pub struct DocxParser {
    document_xml: Vec<u8>,
    styles: StyleMap,
    metadata: Metadata,
}

impl DocxParser {
    /// Open a DOCX file.
    ///
    /// A nonexistent path fails with [`Error::FileNotFound`] so batch
    /// callers can substitute a placeholder; every other failure is a
    /// whole-document load error.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::FileNotFound(path.to_path_buf()));
        }
        crate::detect::detect_format_from_path(path)?;

        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Parse a DOCX from bytes.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        detect_format_from_bytes(data)?;
        Self::from_reader(Cursor::new(data))
    }

    /// Parse a DOCX from a seekable reader.
    pub fn from_reader<R: Read + Seek>(reader: R) -> Result<Self> {
        let mut archive = ZipArchive::new(reader)?;

        let document_xml = read_part(&mut archive, DOCUMENT_PART)?
            .ok_or_else(|| Error::MissingPart(DOCUMENT_PART.to_string()))?;

        let styles = match read_part(&mut archive, STYLES_PART)? {
            Some(bytes) => StyleMap::parse(&bytes)?,
            None => {
                log::debug!("package has no {STYLES_PART}; style ids resolve to themselves");
                StyleMap::empty()
            }
        };

        // Metadata never feeds the report, so a malformed properties part
        // must not fail text extraction.
        let metadata = match read_part(&mut archive, CORE_PROPS_PART)? {
            Some(bytes) => core_props::parse(&bytes).unwrap_or_else(|e| {
                log::warn!("ignoring malformed {CORE_PROPS_PART}: {e}");
                Metadata::default()
            }),
            None => Metadata::default(),
        };

        Ok(Self {
            document_xml,
            styles,
            metadata,
        })
    }

    /// Parse the package and return a structured Document.
    pub fn parse(&self) -> Result<Document> {
        let mut document = Document::new();
        document.metadata = self.metadata.clone();
        document.body = self.parse_body()?;
        Ok(document)
    }

    /// Core properties read from the package.
    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// Number of paragraph styles defined by the package.
    pub fn style_count(&self) -> usize {
        self.styles.len()
    }

    /// Stream the body of `word/document.xml` into blocks.
    ///
    /// One forward pass. Paragraph text accumulates from `<w:t>` runs, with
    /// `<w:tab/>` as `\t` and `<w:br/>`/`<w:cr/>` as `\n`. Tables assemble at
    /// nesting depth 1; paragraphs of deeper (nested) tables fold into the
    /// containing cell. Content of embedded drawings, VML and OLE objects is
    /// skipped wholesale, which also keeps `mc:AlternateContent` from
    /// contributing its fallback copy twice.
    fn parse_body(&self) -> Result<Vec<Block>> {
        let mut reader = Reader::from_reader(self.document_xml.as_slice());
        let mut buf = Vec::new();

        let mut body: Vec<Block> = Vec::new();

        // paragraph state
        let mut para_text = String::new();
        let mut para_style: Option<String> = None;
        let mut in_run = false;
        let mut in_text = false;

        // table state; rows and cells assemble at depth 1 only
        let mut tbl_depth = 0usize;
        let mut rows: Vec<TableRow> = Vec::new();
        let mut cells: Vec<String> = Vec::new();
        let mut cell_text = String::new();
        let mut cell_paras = 0usize;

        // > 0 while inside drawing/pict/object subtrees
        let mut skip_depth = 0usize;

        loop {
            match reader.read_event_into(&mut buf)? {
                Event::Start(e) => match e.local_name().as_ref() {
                    name if skip_depth > 0 => {
                        if is_embedded_object(name) {
                            skip_depth += 1;
                        }
                    }
                    b"drawing" | b"pict" | b"object" => skip_depth += 1,
                    b"p" => {
                        para_text.clear();
                        para_style = None;
                    }
                    b"r" => in_run = true,
                    b"t" => in_text = true,
                    b"pStyle" => {
                        if let Some(id) = read_val_attr(&e)? {
                            para_style = Some(id);
                        }
                    }
                    b"tbl" => {
                        tbl_depth += 1;
                        if tbl_depth == 1 {
                            rows.clear();
                        }
                    }
                    b"tr" if tbl_depth == 1 => cells.clear(),
                    b"tc" if tbl_depth == 1 => {
                        cell_text.clear();
                        cell_paras = 0;
                    }
                    _ => {}
                },
                Event::Empty(e) => match e.local_name().as_ref() {
                    _ if skip_depth > 0 => {}
                    b"pStyle" => {
                        if let Some(id) = read_val_attr(&e)? {
                            para_style = Some(id);
                        }
                    }
                    b"tab" if in_run => para_text.push('\t'),
                    b"br" | b"cr" if in_run => para_text.push('\n'),
                    // self-closing structural elements model to empty content
                    b"p" => {
                        if tbl_depth > 0 {
                            if cell_paras > 0 {
                                cell_text.push('\n');
                            }
                            cell_paras += 1;
                        } else {
                            body.push(Block::Paragraph(Paragraph::default()));
                        }
                    }
                    b"tc" if tbl_depth == 1 => cells.push(String::new()),
                    b"tr" if tbl_depth == 1 => rows.push(TableRow::default()),
                    b"tbl" if tbl_depth == 0 => body.push(Block::Table(Table::new())),
                    _ => {}
                },
                Event::Text(e) => {
                    if in_text {
                        para_text.push_str(&e.unescape()?);
                    }
                }
                Event::End(e) => match e.local_name().as_ref() {
                    name if skip_depth > 0 => {
                        if is_embedded_object(name) {
                            skip_depth -= 1;
                        }
                    }
                    b"t" => in_text = false,
                    b"r" => in_run = false,
                    b"p" => {
                        let text = std::mem::take(&mut para_text);
                        let style = para_style.take();
                        if tbl_depth > 0 {
                            // cell text joins its paragraphs with \n, empty
                            // ones included; styles are not tracked in cells
                            if cell_paras > 0 {
                                cell_text.push('\n');
                            }
                            cell_text.push_str(&text);
                            cell_paras += 1;
                        } else {
                            body.push(Block::Paragraph(Paragraph {
                                text,
                                style: style.map(|id| self.styles.resolve(&id).to_string()),
                            }));
                        }
                    }
                    b"tc" if tbl_depth == 1 => {
                        cells.push(std::mem::take(&mut cell_text));
                        cell_paras = 0;
                    }
                    b"tr" if tbl_depth == 1 => {
                        rows.push(TableRow::new(std::mem::take(&mut cells)));
                    }
                    b"tbl" => {
                        tbl_depth = tbl_depth.saturating_sub(1);
                        if tbl_depth == 0 {
                            body.push(Block::Table(Table::from_rows(std::mem::take(&mut rows))));
                        }
                    }
                    _ => {}
                },
                Event::Eof => break,
                _ => {}
            }
            buf.clear();
        }

        Ok(body)
    }
}

/// Elements whose entire subtree carries no body text.
fn is_embedded_object(name: &[u8]) -> bool {
    matches!(name, b"drawing" | b"pict" | b"object")
}

/// Read a `w:val` attribute from an element.
fn read_val_attr(e: &BytesStart) -> Result<Option<String>> {
    for attr in e.attributes().flatten() {
        if attr.key.local_name().as_ref() == b"val" {
            return Ok(Some(attr.unescape_value()?.into_owned()));
        }
    }
    Ok(None)
}

/// Read one package part, distinguishing "absent" from "unreadable".
fn read_part<R: Read + Seek>(archive: &mut ZipArchive<R>, name: &str) -> Result<Option<Vec<u8>>> {
    match archive.by_name(name) {
        Ok(mut part) => {
            let mut bytes = Vec::with_capacity(part.size() as usize);
            part.read_to_end(&mut bytes)?;
            Ok(Some(bytes))
        }
        Err(zip::result::ZipError::FileNotFound) => Ok(None),
        Err(e) => Err(e.into()),
    }
}
