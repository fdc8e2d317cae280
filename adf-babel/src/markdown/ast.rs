//! Owned Markdown syntax tree handed to the converter.
//!
//! The parser adapter builds this tree from comrak's arena AST in a single pass.
//! Link-like constructs are already classified here (explicit link, autolink,
//! image), so the converter never inspects URL shapes itself.

/// Root of a parsed Markdown document.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    pub children: Vec<Block>,
}

/// Block-level node.
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Paragraph(Vec<Inline>),
    Heading { level: u8, content: Vec<Inline> },
    List(List),
    ListItem(Vec<Block>),
    CodeBlock(CodeBlock),
    BlockQuote(Vec<Block>),
    ThematicBreak,
    Table(Table),
    /// A block the converter has no mapping for (HTML blocks, front matter,
    /// footnote definitions, ...). `kind` is only used for diagnostics.
    Other {
        kind: &'static str,
        children: Vec<Block>,
    },
}

/// A bullet or ordered list. Children are normally all [`Block::ListItem`].
#[derive(Debug, Clone, PartialEq)]
pub struct List {
    pub ordered: bool,
    pub children: Vec<Block>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CodeBlock {
    /// `false` for indented code blocks.
    pub fenced: bool,
    /// Full info string of a fenced block, empty otherwise.
    pub info: String,
    /// Literal body, each line keeping its terminator.
    pub literal: String,
}

impl CodeBlock {
    /// Language tag of a fenced block: the first word of its info string.
    pub fn language(&self) -> Option<&str> {
        if !self.fenced {
            return None;
        }
        self.info.split_whitespace().next()
    }
}

/// A GFM table. The first row is the header row.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    pub rows: Vec<TableRow>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TableRow {
    pub cells: Vec<TableCell>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TableCell {
    pub content: Vec<Inline>,
}

/// How a text run ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineBreak {
    Soft,
    Hard,
}

/// Distinguishes URL autolinks from e-mail autolinks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutolinkKind {
    Url,
    Email,
}

/// Inline node.
#[derive(Debug, Clone, PartialEq)]
pub enum Inline {
    Text {
        literal: String,
        line_break: Option<LineBreak>,
    },
    /// Level 1 is `*em*`, level 2 is `**strong**`.
    Emphasis { level: u8, children: Vec<Inline> },
    CodeSpan(String),
    Link {
        destination: String,
        children: Vec<Inline>,
    },
    Autolink {
        url: String,
        /// Text as written in the source (the bare address for e-mails).
        label: String,
        kind: AutolinkKind,
    },
    Image {
        destination: String,
        alt: String,
    },
    Strikethrough(Vec<Inline>),
    RawHtml(String),
    Other {
        kind: &'static str,
        children: Vec<Inline>,
    },
}

impl Inline {
    /// Plain text run without a trailing break.
    pub fn text(literal: impl Into<String>) -> Self {
        Inline::Text {
            literal: literal.into(),
            line_break: None,
        }
    }
}
