//! Markdown AST → ADF conversion
//!
//! A single downward walk with no state kept between calls:
//!
//!     block ──► list ──► block (recursive)
//!       │
//!       ├──► table ──► inline
//!       └──► inline ──► merge
//!
//! The walk never fails. Constructs ADF cannot express degrade instead:
//! unknown blocks keep their first converted child, unknown inlines pass their
//! children through, empty paragraphs and empty text runs are left out.
//!
//! Formatting is carried as an immutable [`crate::adf::Marks`] value; every
//! construct that adds a mark hands its children a new list, so sibling
//! branches never share formatting.

pub mod block;
pub mod inline;
pub mod list;
pub mod merge;
pub mod table;

use crate::adf;
use crate::markdown::ast;

pub use block::{convert_block, convert_blocks};
pub use inline::convert_inlines;
pub use list::convert_list;
pub use merge::merge_text_runs;
pub use table::convert_table;

/// Convert a parsed Markdown document into an ADF `doc` (version 1).
pub fn convert_document(doc: &ast::Document) -> adf::Document {
    let content = convert_blocks(&doc.children);
    tracing::debug!(
        source_blocks = doc.children.len(),
        blocks = content.len(),
        "converted document"
    );
    adf::Document::new(content)
}
