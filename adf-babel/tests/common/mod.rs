//! Helpers shared by the integration tests.

use adf_babel::adf::{Mark, Node};
use adf_babel::Document;

/// Content of the only paragraph in a converted document.
pub fn single_paragraph(doc: &Document) -> &[Node] {
    assert_eq!(doc.content.len(), 1, "expected one block, got {doc:?}");
    let block = &doc.content[0];
    assert_eq!(block.kind(), "paragraph");
    block.content()
}

/// First leaf carrying a `link` mark, with its href.
pub fn find_link(nodes: &[Node]) -> Option<(&Node, &str)> {
    nodes.iter().find_map(|node| {
        node.marks().iter().find_map(|mark| match mark {
            Mark::Link { attrs } => Some((node, attrs.href.as_str())),
            _ => None,
        })
    })
}

/// Every node in the tree, depth first.
pub fn walk(nodes: &[Node]) -> Vec<&Node> {
    let mut all = Vec::new();
    for node in nodes {
        all.push(node);
        all.extend(walk(node.content()));
    }
    all
}
