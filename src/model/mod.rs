//! Document model types for DOCX content representation.
//!
//! This module defines the intermediate representation (IR) that bridges
//! DOCX parsing and report rendering: a flat body sequence of blocks, each
//! a paragraph or a table, in original document order.

mod block;
mod document;
mod paragraph;
mod table;

pub use block::Block;
pub use document::{Document, Metadata};
pub use paragraph::{Paragraph, DEFAULT_STYLE};
pub use table::{Table, TableRow};
