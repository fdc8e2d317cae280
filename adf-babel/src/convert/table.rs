//! Table conversion
//!
//! The first row becomes `tableHeader` cells, every later row `tableCell`s.
//! ADF requires each cell to hold exactly one block, so the cell's inline
//! content is always wrapped in a single `paragraph`, even when it is empty.

use super::inline::convert_inlines;
use crate::adf::{Marks, Node, TableAttrs};
use crate::markdown::ast::{Table, TableRow};

/// Convert a table with default attrs (no number column, default layout).
pub fn convert_table(table: &Table) -> Node {
    let content = table
        .rows
        .iter()
        .enumerate()
        .map(|(index, row)| convert_row(row, index == 0))
        .collect();

    Node::Table {
        attrs: TableAttrs::default(),
        content,
    }
}

fn convert_row(row: &TableRow, header: bool) -> Node {
    let content = row
        .cells
        .iter()
        .map(|cell| {
            let paragraph = Node::paragraph(convert_inlines(&cell.content, &Marks::new()));
            if header {
                Node::TableHeader {
                    content: vec![paragraph],
                }
            } else {
                Node::TableCell {
                    content: vec![paragraph],
                }
            }
        })
        .collect();

    Node::TableRow { content }
}
