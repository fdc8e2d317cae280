//! Inline conversion
//!
//! Walks the inline children of a block and produces a flat sequence of ADF
//! leaves (`text`, `hardBreak`, `inlineCard`). Formatting constructs leave no
//! wrapper node behind; they only extend the [`Marks`] carried down the walk.
//!
//! | Markdown                 | ADF                                              |
//! |--------------------------|--------------------------------------------------|
//! | text                     | `text` with the active marks                     |
//! | soft break               | `text` `" "` without marks                       |
//! | hard break               | `hardBreak`                                      |
//! | `*em*` / `**strong**`    | adds `em` / `strong`                             |
//! | `` `code` ``             | `text` with `code` added                         |
//! | `[text](url)`            | adds `link` (`href` = url)                       |
//! | `<url>`, bare URL        | `inlineCard` (`url`)                             |
//! | `<a@b.c>`, bare e-mail   | `text` with `link` (`href` = `mailto:` url)      |
//! | `![alt](src)`            | `text` (alt, or src if no alt) with `link` (src) |
//! | `~~strike~~`             | adds `strike`                                    |
//! | raw inline HTML          | dropped                                          |
//! | anything else            | children converted with unchanged marks          |

use super::merge::merge_text_runs;
use crate::adf::{Mark, Marks, Node};
use crate::markdown::ast::{AutolinkKind, Inline, LineBreak};

/// Convert inline nodes under the given active marks, then merge text runs.
pub fn convert_inlines(inlines: &[Inline], marks: &Marks) -> Vec<Node> {
    let mut nodes = Vec::new();

    for inline in inlines {
        match inline {
            Inline::Text {
                literal,
                line_break,
            } => {
                push_text(&mut nodes, literal, marks.clone());
                match line_break {
                    Some(LineBreak::Hard) => nodes.push(Node::HardBreak),
                    Some(LineBreak::Soft) => nodes.push(Node::plain_text(" ")),
                    None => {}
                }
            }

            Inline::Emphasis { level, children } => {
                let mark = if *level == 2 { Mark::Strong } else { Mark::Em };
                nodes.extend(convert_inlines(children, &marks.with(mark)));
            }

            Inline::CodeSpan(code) => push_text(&mut nodes, code, marks.with(Mark::Code)),

            Inline::Link { destination, children } => {
                let link = Mark::link(destination.as_str());
                nodes.extend(convert_inlines(children, &marks.with(link)));
            }

            Inline::Autolink { url, label, kind } => match kind {
                AutolinkKind::Url => nodes.push(Node::inline_card(url.as_str())),
                AutolinkKind::Email => {
                    let text = if label.is_empty() { url } else { label };
                    push_text(&mut nodes, text, marks.with(Mark::link(url.as_str())));
                }
            },

            // ADF has no inline image; keep it reachable as a link.
            Inline::Image { destination, alt } => {
                let text = if alt.is_empty() { destination } else { alt };
                push_text(
                    &mut nodes,
                    text,
                    marks.with(Mark::link(destination.as_str())),
                );
            }

            Inline::Strikethrough(children) => {
                nodes.extend(convert_inlines(children, &marks.with(Mark::Strike)));
            }

            Inline::RawHtml(html) => {
                tracing::trace!(html = %html, "dropping raw inline HTML");
            }

            Inline::Other { kind, children } => {
                tracing::trace!(kind, "passing through unrecognized inline");
                nodes.extend(convert_inlines(children, marks));
            }
        }
    }

    merge_text_runs(nodes)
}

/// Text nodes never carry an empty literal.
fn push_text(nodes: &mut Vec<Node>, text: &str, marks: Marks) {
    if !text.is_empty() {
        nodes.push(Node::text(text, marks));
    }
}
