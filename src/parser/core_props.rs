//! Core document properties from `docProps/core.xml`.

use chrono::{DateTime, NaiveDate, Utc};
use quick_xml::events::Event;
use quick_xml::Reader;

use crate::error::Result;
use crate::model::Metadata;

/// Fields of the core properties part this crate keeps.
enum CoreField {
    Title,
    Author,
    Subject,
    Keywords,
    LastModifiedBy,
    Revision,
    Created,
    Modified,
}

/// Parse the Dublin Core properties part into [`Metadata`].
///
/// Unknown elements are ignored; an unparsable timestamp is dropped rather
/// than failing the document.
pub fn parse(xml: &[u8]) -> Result<Metadata> {
    let mut reader = Reader::from_reader(xml);
    let mut buf = Vec::new();

    let mut metadata = Metadata::default();
    let mut field: Option<CoreField> = None;
    let mut value = String::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) => {
                field = match e.local_name().as_ref() {
                    b"title" => Some(CoreField::Title),
                    b"creator" => Some(CoreField::Author),
                    b"subject" => Some(CoreField::Subject),
                    b"keywords" => Some(CoreField::Keywords),
                    b"lastModifiedBy" => Some(CoreField::LastModifiedBy),
                    b"revision" => Some(CoreField::Revision),
                    b"created" => Some(CoreField::Created),
                    b"modified" => Some(CoreField::Modified),
                    _ => None,
                };
                value.clear();
            }
            Event::Text(e) => {
                if field.is_some() {
                    value.push_str(&e.unescape()?);
                }
            }
            Event::End(_) => {
                if let Some(f) = field.take() {
                    let text = std::mem::take(&mut value);
                    if !text.is_empty() {
                        match f {
                            CoreField::Title => metadata.title = Some(text),
                            CoreField::Author => metadata.author = Some(text),
                            CoreField::Subject => metadata.subject = Some(text),
                            CoreField::Keywords => metadata.keywords = Some(text),
                            CoreField::LastModifiedBy => metadata.last_modified_by = Some(text),
                            CoreField::Revision => metadata.revision = Some(text),
                            CoreField::Created => metadata.created = parse_w3cdtf(&text),
                            CoreField::Modified => metadata.modified = parse_w3cdtf(&text),
                        }
                    }
                }
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(metadata)
}

/// Parse a W3CDTF timestamp (`2024-01-15T10:30:00Z` or a bare date).
fn parse_w3cdtf(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;

    const CORE_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<cp:coreProperties
    xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties"
    xmlns:dc="http://purl.org/dc/elements/1.1/"
    xmlns:dcterms="http://purl.org/dc/terms/"
    xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">
  <dc:title>QA Checklist</dc:title>
  <dc:creator>Inspector</dc:creator>
  <cp:keywords>qa, compliance</cp:keywords>
  <cp:lastModifiedBy>Reviewer</cp:lastModifiedBy>
  <cp:revision>4</cp:revision>
  <dcterms:created xsi:type="dcterms:W3CDTF">2025-09-01T08:15:00Z</dcterms:created>
  <dcterms:modified xsi:type="dcterms:W3CDTF">2026-01-12T17:40:30Z</dcterms:modified>
</cp:coreProperties>"#;

    #[test]
    fn test_parse_core_props() {
        let meta = parse(CORE_XML.as_bytes()).unwrap();
        assert_eq!(meta.title.as_deref(), Some("QA Checklist"));
        assert_eq!(meta.author.as_deref(), Some("Inspector"));
        assert_eq!(meta.keywords.as_deref(), Some("qa, compliance"));
        assert_eq!(meta.last_modified_by.as_deref(), Some("Reviewer"));
        assert_eq!(meta.revision.as_deref(), Some("4"));
        assert_eq!(
            meta.created.map(|d| d.to_rfc3339()),
            Some("2025-09-01T08:15:00+00:00".to_string())
        );
    }

    #[test]
    fn test_empty_elements_stay_none() {
        let xml = r#"<cp:coreProperties
            xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties"
            xmlns:dc="http://purl.org/dc/elements/1.1/">
          <dc:title></dc:title>
        </cp:coreProperties>"#;
        let meta = parse(xml.as_bytes()).unwrap();
        assert!(meta.title.is_none());
        assert!(meta.is_empty());
    }

    #[test]
    fn test_parse_w3cdtf() {
        let dt = parse_w3cdtf("2026-03-04T12:00:00Z").unwrap();
        assert_eq!(dt.to_rfc3339(), "2026-03-04T12:00:00+00:00");

        // offset form normalizes to UTC
        let dt = parse_w3cdtf("2026-03-04T12:00:00+09:00").unwrap();
        assert_eq!(dt.to_rfc3339(), "2026-03-04T03:00:00+00:00");
    }

    #[test]
    fn test_parse_w3cdtf_date_only() {
        let dt = parse_w3cdtf("2026-03-04").unwrap();
        assert_eq!(dt.to_rfc3339(), "2026-03-04T00:00:00+00:00");
    }

    #[test]
    fn test_parse_w3cdtf_invalid() {
        assert!(parse_w3cdtf("not a date").is_none());
        assert!(parse_w3cdtf("").is_none());
    }
}
