//! Markdown input
//!
//! Parsing is delegated to `comrak` (CommonMark + GFM). The [`parser`] module
//! adapts comrak's arena AST into the owned tree in [`ast`], which is what the
//! converter walks.
//!
//! # Extensions
//!
//! Tables, strikethrough and autolinks (bare URLs / e-mail addresses) are on
//! by default and can be switched off through [`ParserOptions`].

pub mod ast;
pub mod parser;

pub use parser::{parse_markdown, parse_markdown_with_options, ParserOptions};
