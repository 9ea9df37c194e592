//! Paragraph style resolution from `word/styles.xml`.

use std::collections::HashMap;

use quick_xml::events::Event;
use quick_xml::Reader;

use crate::error::Result;

/// Maps paragraph style ids to their display names.
///
/// `word/document.xml` references styles by id (`<w:pStyle w:val="Heading1"/>`)
/// while `word/styles.xml` carries the display name
/// (`<w:style w:styleId="Heading1"><w:name w:val="heading 1"/>...`).
/// Built-in heading names are stored lowercase in the package; they surface
/// here with the UI spelling (`Heading 1`), matching what word processors
/// show for them.
#[derive(Debug, Clone, Default)]
pub struct StyleMap {
    names: HashMap<String, String>,
}

impl StyleMap {
    /// A map with no entries; every id resolves to itself.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse `word/styles.xml`, keeping paragraph styles only.
    pub fn parse(xml: &[u8]) -> Result<Self> {
        let mut reader = Reader::from_reader(xml);
        let mut buf = Vec::new();

        let mut names = HashMap::new();
        // id of the <w:style> currently open, when it is a paragraph style
        let mut current_id: Option<String> = None;

        loop {
            match reader.read_event_into(&mut buf)? {
                Event::Start(e) if e.local_name().as_ref() == b"style" => {
                    let mut style_id = None;
                    let mut is_paragraph = true;
                    for attr in e.attributes().flatten() {
                        match attr.key.local_name().as_ref() {
                            b"styleId" => {
                                style_id = Some(attr.unescape_value()?.into_owned());
                            }
                            b"type" => {
                                is_paragraph = attr.unescape_value()? == "paragraph";
                            }
                            _ => {}
                        }
                    }
                    current_id = if is_paragraph { style_id } else { None };
                }
                Event::Start(e) | Event::Empty(e) if e.local_name().as_ref() == b"name" => {
                    if let Some(id) = current_id.take() {
                        for attr in e.attributes().flatten() {
                            if attr.key.local_name().as_ref() == b"val" {
                                let raw = attr.unescape_value()?;
                                names.insert(id, display_name(&raw));
                                break;
                            }
                        }
                    }
                }
                Event::End(e) if e.local_name().as_ref() == b"style" => {
                    current_id = None;
                }
                Event::Eof => break,
                _ => {}
            }
            buf.clear();
        }

        Ok(Self { names })
    }

    /// Resolve a style id to its display name.
    ///
    /// An id without an entry resolves to itself, so documents referencing
    /// styles their package never defines still render something readable.
    pub fn resolve<'a>(&'a self, style_id: &'a str) -> &'a str {
        self.names.get(style_id).map(String::as_str).unwrap_or(style_id)
    }

    /// Number of known styles.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Check if no styles are known.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Translate a built-in internal style name to its UI spelling.
///
/// Packages store the nine built-in heading styles as `heading 1` ..
/// `heading 9`; everything else already matches its UI name.
fn display_name(raw: &str) -> String {
    if let Some(level) = raw.strip_prefix("heading ") {
        if level.len() == 1 && matches!(level.as_bytes()[0], b'1'..=b'9') {
            return format!("Heading {level}");
        }
    }
    raw.to_string()
}
