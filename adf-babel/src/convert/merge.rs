//! Consolidation of adjacent text leaves.
//!
//! Upstream inline processing can split one logical run of text at internal
//! boundaries (comrak's autolink scanner does this around candidate URLs).
//! Neighbouring `text` nodes that carry exactly the same marks are joined so
//! the output has one node per formatting run.

use crate::adf::Node;

/// Join every maximal run of `text` leaves with identical marks.
///
/// Marks are compared by value and order. Other leaf kinds pass through
/// untouched and end the current run.
pub fn merge_text_runs(nodes: Vec<Node>) -> Vec<Node> {
    if nodes.len() <= 1 {
        return nodes;
    }

    let mut merged: Vec<Node> = Vec::with_capacity(nodes.len());
    for node in nodes {
        if let (
            Some(Node::Text {
                text: run,
                marks: run_marks,
            }),
            Node::Text { text, marks },
        ) = (merged.last_mut(), &node)
        {
            if run_marks == marks {
                run.push_str(text);
                continue;
            }
        }
        merged.push(node);
    }
    merged
}
