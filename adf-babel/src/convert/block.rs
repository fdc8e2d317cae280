//! Block conversion
//!
//! Entry point and recursion root of the converter. Each block maps to at
//! most one ADF node; `None` means the block contributed nothing and the
//! caller simply leaves it out.
//!
//! | Markdown             | ADF                                                  |
//! |----------------------|------------------------------------------------------|
//! | paragraph            | `paragraph` (dropped when it has no inline content)  |
//! | heading (1-6)        | `heading` with `level`, emitted even when empty      |
//! | list                 | `bulletList` / `orderedList` (see [`super::list`])   |
//! | fenced code          | `codeBlock`, `language` from the info string         |
//! | indented code        | `codeBlock` without attrs                            |
//! | blockquote           | `blockquote` with converted children                 |
//! | thematic break       | `rule`                                               |
//! | table                | `table` (see [`super::table`])                       |
//! | anything else        | first converted child, or nothing                    |

use super::inline::convert_inlines;
use super::list::convert_list;
use super::table::convert_table;
use crate::adf::{CodeBlockAttrs, HeadingAttrs, Marks, Node};
use crate::markdown::ast::{Block, CodeBlock};

/// Convert a sequence of blocks, leaving out the ones that produce nothing.
pub fn convert_blocks(blocks: &[Block]) -> Vec<Node> {
    blocks.iter().filter_map(convert_block).collect()
}

/// Convert one block.
pub fn convert_block(block: &Block) -> Option<Node> {
    match block {
        Block::Paragraph(inlines) => {
            let content = convert_inlines(inlines, &Marks::new());
            if content.is_empty() {
                tracing::trace!("dropping empty paragraph");
                return None;
            }
            Some(Node::Paragraph { content })
        }

        Block::Heading { level, content } => Some(Node::Heading {
            attrs: HeadingAttrs { level: *level },
            content: convert_inlines(content, &Marks::new()),
        }),

        Block::List(list) => Some(convert_list(list)),

        Block::CodeBlock(code) => Some(convert_code_block(code)),

        Block::BlockQuote(children) => Some(Node::Blockquote {
            content: convert_blocks(children),
        }),

        Block::ThematicBreak => Some(Node::Rule),

        Block::Table(table) => Some(convert_table(table)),

        Block::ListItem(children) => first_converted_child("item", children),

        Block::Other { kind, children } => first_converted_child(kind, children),
    }
}

fn convert_code_block(code: &CodeBlock) -> Node {
    let attrs = code.language().map(|language| CodeBlockAttrs {
        language: language.to_string(),
    });

    let body = strip_line_terminator(&code.literal);
    let content = if body.is_empty() {
        Vec::new()
    } else {
        vec![Node::plain_text(body)]
    };

    Node::CodeBlock { attrs, content }
}

/// Remove exactly one trailing line terminator.
fn strip_line_terminator(literal: &str) -> &str {
    match literal.strip_suffix('\n') {
        Some(rest) => rest.strip_suffix('\r').unwrap_or(rest),
        None => literal,
    }
}

/// Blocks without a mapping keep only their first converted child; later
/// siblings are discarded.
fn first_converted_child(kind: &str, children: &[Block]) -> Option<Node> {
    let mut converted = convert_blocks(children).into_iter();
    let first = converted.next();
    match &first {
        Some(node) => tracing::debug!(
            kind,
            kept = node.kind(),
            discarded = converted.len(),
            "unrecognized block replaced by its first child"
        ),
        None => tracing::debug!(kind, "dropping unrecognized block"),
    }
    first
}
