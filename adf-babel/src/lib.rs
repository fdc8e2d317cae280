//! Markdown to Atlassian Document Format (ADF) conversion
//!
//!     This crate turns CommonMark/GFM Markdown into the ADF JSON tree that Jira and Confluence
//!     accept for issue descriptions, comments and page bodies.
//!
//!     TLDR:
//!         - Babel never writes a Markdown parser, it relies on comrak and adapts its AST.
//!         - The conversion is a pure function: same input, same output, never an error.
//!         - Whatever ADF cannot express degrades (unknown blocks keep their first child,
//!           unknown inlines pass their children through) rather than failing.
//!
//!     This is a pure lib, that is, it powers the md2adf cli but is shell agnostic: no code
//!     should be written that supposes a shell environment, be it std print, env vars etc.
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── format.rs               # Format trait definition
//!     ├── registry.rs             # FormatRegistry for discovery and selection
//!     ├── markdown
//!     │   ├── ast.rs              # Owned Markdown tree the converter walks
//!     │   └── parser.rs           # comrak adapter
//!     ├── adf
//!     │   ├── nodes.rs            # Document and Node
//!     │   └── marks.rs            # Mark and the immutable Marks list
//!     ├── convert                 # block, inline, list, table, merge
//!     ├── formats
//!     │   ├── json.rs             # ADF JSON
//!     │   └── treeviz             # Visual tree for debugging
//!     └── lib.rs
//!
//! Testing
//!     tests
//!     └── convert
//!         ├── <area>.rs
//!         └── mod.rs
//!
//!     Note that rust does not by default discover tests in subdirectories, so we need to include these
//!     in the mod.
//!
//! Core Algorithm
//!
//!     Markdown blocks map to ADF blocks almost one to one. Inline formatting is where the two
//!     models differ: Markdown nests (`**a *b***`), ADF is flat text leaves each carrying a list
//!     of marks. The inline converter flattens by carrying the active marks down the walk and
//!     stamping them on every leaf, then joins neighbouring leaves whose marks are equal.
//!     See ./convert/mod.rs.
//!
//! Formats
//!
//!     Output is produced through the Format trait, so the cli can pick one by name:
//!     - json: the ADF wire form (pretty or compact)
//!     - treeviz: a tree view of the converted document
//!
pub mod adf;
pub mod convert;
pub mod error;
pub mod format;
pub mod formats;
pub mod markdown;
pub mod registry;

pub use adf::{Document, Mark, Marks, Node};
pub use error::FormatError;
pub use format::Format;
pub use markdown::ParserOptions;
pub use registry::FormatRegistry;

/// Converts Markdown source into an ADF document with the default parser options.
///
/// # Examples
///
/// ```ignore
/// let doc = adf_babel::convert("Hello **world**");
/// assert_eq!(doc.content.len(), 1);
/// ```
pub fn convert(markdown: &str) -> Document {
    convert_with_options(markdown, &ParserOptions::default())
}

/// Converts Markdown source into an ADF document, choosing which GFM extensions are parsed.
pub fn convert_with_options(markdown: &str, options: &ParserOptions) -> Document {
    let tree = markdown::parse_markdown_with_options(markdown, options);
    convert::convert_document(&tree)
}

/// Converts Markdown source straight to ADF JSON.
pub fn convert_to_json(markdown: &str, pretty: bool) -> Result<String, FormatError> {
    formats::json::to_json(&convert(markdown), pretty)
}
