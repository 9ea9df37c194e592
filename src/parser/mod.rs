//! DOCX parsing module.

mod core_props;
mod docx_parser;
mod styles;

pub use docx_parser::DocxParser;
pub use styles::StyleMap;
