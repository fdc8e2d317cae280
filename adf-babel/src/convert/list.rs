//! List conversion
//!
//! Lists are the one Markdown construct that is truly nested, and ADF nests
//! them the same way: each `listItem` holds full block content, so a nested
//! list is just another block inside the item, converted through
//! [`convert_blocks`] again.

use super::block::convert_blocks;
use crate::adf::Node;
use crate::markdown::ast::{Block, List};

/// Convert a list into `bulletList` or `orderedList`.
pub fn convert_list(list: &List) -> Node {
    let content = list
        .children
        .iter()
        .filter_map(|child| match child {
            Block::ListItem(blocks) => Some(Node::ListItem {
                content: convert_blocks(blocks),
            }),
            _ => {
                tracing::trace!("skipping non-item child of list");
                None
            }
        })
        .collect();

    if list.ordered {
        Node::OrderedList { content }
    } else {
        Node::BulletList { content }
    }
}
