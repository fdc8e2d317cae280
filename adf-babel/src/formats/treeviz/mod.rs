//! Treeviz formatter for ADF documents
//!
//! A visual tree of the converted document, one node per line, meant for
//! eyeballing what a piece of Markdown turned into.
//!
//! So the format is :
//! <prefix><connector> <icon><space><label>
//!
//! Example:
//!
//! ```text
//! ⧉ doc (v1, 2 blocks)
//! ├─ § heading h1
//! │ └─ ◦ "Title"
//! └─ ¶ paragraph
//!   ├─ ◦ "Some "
//!   ├─ ◦ "bold" [strong]
//!   └─ ⊕ inlineCard https://example.com
//! ```
//!
//! Text labels are truncated to 30 characters.
//!
//! # Parameters
//!
//! - `"show-marks"`: `true` (default) lists the marks of each text node,
//!   `false` hides them.

use super::icons::get_icon;
use crate::adf::{Document, Node};
use crate::error::FormatError;
use crate::format::{parse_bool_option, Format};
use std::collections::HashMap;

const MAX_LABEL_CHARS: usize = 30;

fn format_node(node: &Node, prefix: &str, is_last: bool, show_marks: bool, output: &mut String) {
    let connector = if is_last { "└─" } else { "├─" };
    let icon = get_icon(node.kind());
    output.push_str(&format!(
        "{prefix}{connector} {icon} {}\n",
        display_label(node, show_marks)
    ));

    let child_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
    format_children(node.content(), &child_prefix, show_marks, output);
}

fn format_children(children: &[Node], prefix: &str, show_marks: bool, output: &mut String) {
    let child_count = children.len();
    for (i, child) in children.iter().enumerate() {
        format_node(child, prefix, i == child_count - 1, show_marks, output);
    }
}

fn display_label(node: &Node, show_marks: bool) -> String {
    match node {
        Node::Heading { attrs, .. } => format!("heading h{}", attrs.level),
        Node::CodeBlock {
            attrs: Some(attrs), ..
        } => format!("codeBlock ({})", attrs.language),
        Node::InlineCard { attrs } => format!("inlineCard {}", attrs.url),
        Node::Text { text, marks } => {
            let mut label = format!("{:?}", truncate(text));
            if show_marks && !marks.is_empty() {
                let kinds: Vec<_> = marks.iter().map(|mark| mark.kind()).collect();
                label.push_str(&format!(" [{}]", kinds.join(", ")));
            }
            label
        }
        other => other.kind().to_string(),
    }
}

fn truncate(text: &str) -> String {
    if text.chars().count() <= MAX_LABEL_CHARS {
        return text.to_string();
    }
    let mut short: String = text.chars().take(MAX_LABEL_CHARS - 1).collect();
    short.push('…');
    short
}

pub fn to_treeviz_str(doc: &Document) -> String {
    render(doc, true)
}

/// Convert a document to treeviz string with optional parameters
pub fn to_treeviz_str_with_params(
    doc: &Document,
    params: &HashMap<String, String>,
) -> Result<String, FormatError> {
    let mut show_marks = true;
    for (key, value) in params {
        match key.as_str() {
            "show-marks" => show_marks = parse_bool_option(key, value)?,
            other => {
                return Err(FormatError::NotSupported(format!(
                    "Format 'treeviz' does not support parameter '{other}'"
                )))
            }
        }
    }
    Ok(render(doc, show_marks))
}

fn render(doc: &Document, show_marks: bool) -> String {
    let mut output = format!(
        "{} doc (v{}, {} blocks)\n",
        get_icon("doc"),
        doc.version,
        doc.content.len()
    );
    format_children(&doc.content, "", show_marks, &mut output);
    output
}

/// Format implementation for treeviz format
pub struct TreevizFormat;

impl Format for TreevizFormat {
    fn name(&self) -> &str {
        "treeviz"
    }

    fn description(&self) -> &str {
        "Visual tree of the ADF document with Unicode icons"
    }

    fn file_extensions(&self) -> &[&str] {
        &["tree", "treeviz"]
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        Ok(to_treeviz_str(doc))
    }

    fn serialize_with_options(
        &self,
        doc: &Document,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        to_treeviz_str_with_params(doc, options)
    }
}
