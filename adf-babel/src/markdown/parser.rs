//! Markdown parsing (Markdown → source AST)
//!
//! Pipeline: Markdown string → Comrak AST → [`Document`]
//!
//! Comrak reports every link form as a single `Link` node. The distinction the
//! converter relies on (explicit link vs. autolink) is recovered here, once, by
//! looking at how the link was written in the source buffer.

use super::ast::{
    AutolinkKind, Block, CodeBlock, Document, Inline, LineBreak, List, Table, TableCell, TableRow,
};
use comrak::nodes::{AstNode, LineColumn, ListType, NodeLink, NodeValue};
use comrak::{parse_document, Arena, Options};

/// Which Markdown extensions the parser recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserOptions {
    /// GFM tables.
    pub table: bool,
    /// `~~strikethrough~~`.
    pub strikethrough: bool,
    /// Bare URLs and e-mail addresses become autolinks.
    pub autolink: bool,
}

impl Default for ParserOptions {
    fn default() -> Self {
        ParserOptions {
            table: true,
            strikethrough: true,
            autolink: true,
        }
    }
}

/// Parse Markdown with the default extensions enabled.
pub fn parse_markdown(source: &str) -> Document {
    parse_markdown_with_options(source, &ParserOptions::default())
}

/// Parse Markdown into the owned source AST.
pub fn parse_markdown_with_options(source: &str, options: &ParserOptions) -> Document {
    let arena = Arena::new();
    let root = parse_document(&arena, source, &comrak_options(options));

    let builder = TreeBuilder::new(source);
    let doc = Document {
        children: builder.blocks(root),
    };
    tracing::trace!(blocks = doc.children.len(), "parsed markdown");
    doc
}

fn comrak_options(options: &ParserOptions) -> Options<'static> {
    let mut comrak = Options::default();
    comrak.extension.table = options.table;
    comrak.extension.strikethrough = options.strikethrough;
    comrak.extension.autolink = options.autolink;
    comrak
}

/// Walks a comrak tree, keeping the source around to classify links.
struct TreeBuilder<'s> {
    source: &'s str,
    line_starts: Vec<usize>,
}

impl<'s> TreeBuilder<'s> {
    fn new(source: &'s str) -> Self {
        let line_starts = std::iter::once(0)
            .chain(source.match_indices('\n').map(|(i, _)| i + 1))
            .collect();
        TreeBuilder {
            source,
            line_starts,
        }
    }

    fn blocks<'a>(&self, node: &'a AstNode<'a>) -> Vec<Block> {
        node.children().map(|child| self.block(child)).collect()
    }

    fn block<'a>(&self, node: &'a AstNode<'a>) -> Block {
        let node_data = node.data.borrow();

        match &node_data.value {
            NodeValue::Paragraph => Block::Paragraph(self.inlines(node)),

            NodeValue::Heading(heading) => Block::Heading {
                level: heading.level,
                content: self.inlines(node),
            },

            NodeValue::List(list) => Block::List(List {
                ordered: matches!(list.list_type, ListType::Ordered),
                children: self.blocks(node),
            }),

            NodeValue::Item(_) => Block::ListItem(self.blocks(node)),

            NodeValue::CodeBlock(code_block) => Block::CodeBlock(CodeBlock {
                fenced: code_block.fenced,
                info: code_block.info.clone(),
                literal: code_block.literal.clone(),
            }),

            NodeValue::BlockQuote => Block::BlockQuote(self.blocks(node)),

            NodeValue::ThematicBreak => Block::ThematicBreak,

            NodeValue::Table(_) => Block::Table(self.table(node)),

            other => Block::Other {
                kind: node_kind(other),
                children: self.blocks(node),
            },
        }
    }

    fn table<'a>(&self, node: &'a AstNode<'a>) -> Table {
        let rows = node
            .children()
            .filter(|row| matches!(row.data.borrow().value, NodeValue::TableRow(_)))
            .map(|row| TableRow {
                cells: row
                    .children()
                    .filter(|cell| matches!(cell.data.borrow().value, NodeValue::TableCell))
                    .map(|cell| TableCell {
                        content: self.inlines(cell),
                    })
                    .collect(),
            })
            .collect();
        Table { rows }
    }

    fn inlines<'a>(&self, node: &'a AstNode<'a>) -> Vec<Inline> {
        let mut inlines = Vec::new();

        for child in node.children() {
            let child_data = child.data.borrow();
            let inline = match &child_data.value {
                NodeValue::SoftBreak => {
                    attach_break(&mut inlines, LineBreak::Soft);
                    continue;
                }
                NodeValue::LineBreak => {
                    attach_break(&mut inlines, LineBreak::Hard);
                    continue;
                }
                NodeValue::Text(text) => Inline::text(text.clone()),
                NodeValue::Emph => Inline::Emphasis {
                    level: 1,
                    children: self.inlines(child),
                },
                NodeValue::Strong => Inline::Emphasis {
                    level: 2,
                    children: self.inlines(child),
                },
                NodeValue::Code(code) => Inline::CodeSpan(code.literal.clone()),
                NodeValue::Strikethrough => Inline::Strikethrough(self.inlines(child)),
                NodeValue::HtmlInline(html) => Inline::RawHtml(html.clone()),
                NodeValue::Link(link) => self.link(child, child_data.sourcepos.start, link),
                NodeValue::Image(link) => Inline::Image {
                    destination: link.url.clone(),
                    alt: plain_text(child),
                },
                other => Inline::Other {
                    kind: node_kind(other),
                    children: self.inlines(child),
                },
            };
            inlines.push(inline);
        }

        inlines
    }

    fn link<'a>(&self, node: &'a AstNode<'a>, start: LineColumn, link: &NodeLink) -> Inline {
        let label = plain_text(node);
        if !self.is_autolink(start, &link.url, &label) {
            return Inline::Link {
                destination: link.url.clone(),
                children: self.inlines(node),
            };
        }

        let kind = if link.url.starts_with("mailto:") {
            AutolinkKind::Email
        } else {
            AutolinkKind::Url
        };
        Inline::Autolink {
            url: link.url.clone(),
            label,
            kind,
        }
    }

    /// An autolink always displays its own URL; an explicit link is written
    /// starting with `[`. Angle-bracket autolinks start with `<`, extension
    /// autolinks with the URL itself.
    fn is_autolink(&self, start: LineColumn, url: &str, label: &str) -> bool {
        let shows_url = label == url
            || url.strip_prefix("mailto:") == Some(label)
            || url.strip_prefix("http://") == Some(label);
        if !shows_url {
            return false;
        }
        self.byte_at(start) != Some(b'[')
    }

    /// Byte at a 1-based comrak line/column position.
    fn byte_at(&self, position: LineColumn) -> Option<u8> {
        let line_start = *self.line_starts.get(position.line.checked_sub(1)?)?;
        let offset = line_start + position.column.checked_sub(1)?;
        self.source.as_bytes().get(offset).copied()
    }
}

/// Fold a soft/hard break into the preceding text run.
fn attach_break(inlines: &mut Vec<Inline>, kind: LineBreak) {
    if let Some(Inline::Text { line_break, .. }) = inlines.last_mut() {
        if line_break.is_none() {
            *line_break = Some(kind);
            return;
        }
    }
    inlines.push(Inline::Text {
        literal: String::new(),
        line_break: Some(kind),
    });
}

/// Name recorded on `Other` for comrak nodes without a dedicated variant.
fn node_kind(value: &NodeValue) -> &'static str {
    match value {
        NodeValue::HtmlBlock(..) => "html_block",
        NodeValue::FrontMatter(..) => "frontmatter",
        NodeValue::FootnoteDefinition(..) => "footnote_definition",
        NodeValue::FootnoteReference(..) => "footnote_reference",
        NodeValue::DescriptionList => "description_list",
        NodeValue::DescriptionItem(..) => "description_item",
        NodeValue::DescriptionTerm => "description_term",
        NodeValue::DescriptionDetails => "description_details",
        NodeValue::MultilineBlockQuote(..) => "multiline_block_quote",
        NodeValue::TaskItem(..) => "taskitem",
        NodeValue::Superscript => "superscript",
        NodeValue::Underline => "underline",
        NodeValue::SpoileredText => "spoiler",
        NodeValue::Math(..) => "math",
        NodeValue::WikiLink(..) => "wikilink",
        NodeValue::Escaped => "escaped",
        NodeValue::EscapedTag(..) => "escaped_tag",
        _ => "unknown",
    }
}

/// Concatenated text of a node's descendants, breaks rendered as spaces.
fn plain_text<'a>(node: &'a AstNode<'a>) -> String {
    let mut text = String::new();
    for child in node.children() {
        collect_text_content(child, &mut text);
    }
    text
}

fn collect_text_content<'a>(node: &'a AstNode<'a>, output: &mut String) {
    match &node.data.borrow().value {
        NodeValue::Text(text) => output.push_str(text),
        NodeValue::Code(code) => output.push_str(&code.literal),
        NodeValue::SoftBreak | NodeValue::LineBreak => output.push(' '),
        _ => {
            for child in node.children() {
                collect_text_content(child, output);
            }
        }
    }
}
