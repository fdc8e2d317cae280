//! Core data structures for ADF documents.

use super::marks::{Mark, Marks};
use serde::Serialize;

/// Format version written on every `doc` root.
pub const ADF_VERSION: u32 = 1;

/// Root `doc` node.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "doc")]
pub struct Document {
    pub version: u32,
    pub content: Vec<Node>,
}

impl Document {
    pub fn new(content: Vec<Node>) -> Self {
        Document {
            version: ADF_VERSION,
            content,
        }
    }
}

impl Default for Document {
    fn default() -> Self {
        Document::new(Vec::new())
    }
}

/// Any node below the `doc` root.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Node {
    Paragraph {
        content: Vec<Node>,
    },
    Heading {
        attrs: HeadingAttrs,
        content: Vec<Node>,
    },
    BulletList {
        content: Vec<Node>,
    },
    OrderedList {
        content: Vec<Node>,
    },
    ListItem {
        content: Vec<Node>,
    },
    CodeBlock {
        #[serde(skip_serializing_if = "Option::is_none")]
        attrs: Option<CodeBlockAttrs>,
        content: Vec<Node>,
    },
    Blockquote {
        content: Vec<Node>,
    },
    Rule,
    Table {
        attrs: TableAttrs,
        content: Vec<Node>,
    },
    TableRow {
        content: Vec<Node>,
    },
    TableHeader {
        content: Vec<Node>,
    },
    TableCell {
        content: Vec<Node>,
    },
    Text {
        text: String,
        #[serde(skip_serializing_if = "Marks::is_empty")]
        marks: Marks,
    },
    HardBreak,
    InlineCard {
        attrs: InlineCardAttrs,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HeadingAttrs {
    pub level: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodeBlockAttrs {
    pub language: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableAttrs {
    pub is_number_column_enabled: bool,
    pub layout: TableLayout,
}

/// Tables are always emitted with the `default` layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TableLayout {
    #[default]
    Default,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InlineCardAttrs {
    pub url: String,
}

impl Node {
    pub fn text(text: impl Into<String>, marks: Marks) -> Self {
        Node::Text {
            text: text.into(),
            marks,
        }
    }

    pub fn plain_text(text: impl Into<String>) -> Self {
        Node::text(text, Marks::new())
    }

    pub fn paragraph(content: Vec<Node>) -> Self {
        Node::Paragraph { content }
    }

    pub fn inline_card(url: impl Into<String>) -> Self {
        Node::InlineCard {
            attrs: InlineCardAttrs { url: url.into() },
        }
    }

    /// The ADF `type` name of this node.
    pub fn kind(&self) -> &'static str {
        match self {
            Node::Paragraph { .. } => "paragraph",
            Node::Heading { .. } => "heading",
            Node::BulletList { .. } => "bulletList",
            Node::OrderedList { .. } => "orderedList",
            Node::ListItem { .. } => "listItem",
            Node::CodeBlock { .. } => "codeBlock",
            Node::Blockquote { .. } => "blockquote",
            Node::Rule => "rule",
            Node::Table { .. } => "table",
            Node::TableRow { .. } => "tableRow",
            Node::TableHeader { .. } => "tableHeader",
            Node::TableCell { .. } => "tableCell",
            Node::Text { .. } => "text",
            Node::HardBreak => "hardBreak",
            Node::InlineCard { .. } => "inlineCard",
        }
    }

    /// Child nodes; empty for leaves.
    pub fn content(&self) -> &[Node] {
        match self {
            Node::Paragraph { content }
            | Node::Heading { content, .. }
            | Node::BulletList { content }
            | Node::OrderedList { content }
            | Node::ListItem { content }
            | Node::CodeBlock { content, .. }
            | Node::Blockquote { content }
            | Node::Table { content, .. }
            | Node::TableRow { content }
            | Node::TableHeader { content }
            | Node::TableCell { content } => content,
            Node::Rule | Node::Text { .. } | Node::HardBreak | Node::InlineCard { .. } => &[],
        }
    }

    /// Literal of a `text` node.
    pub fn text_value(&self) -> Option<&str> {
        match self {
            Node::Text { text, .. } => Some(text),
            _ => None,
        }
    }

    /// Marks of a `text` node; empty for every other kind.
    pub fn marks(&self) -> &[Mark] {
        match self {
            Node::Text { marks, .. } => marks.as_slice(),
            _ => &[],
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(
            self,
            Node::Text { .. } | Node::HardBreak | Node::InlineCard { .. }
        )
    }
}
