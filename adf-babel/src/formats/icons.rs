//! Icon mapping for tree visualization
//!
//! Keys are the ADF `type` names returned by [`crate::adf::Node::kind`], plus
//! `"doc"` for the document root.

/// Get the Unicode icon for a given ADF node type
///
/// Returns a single Unicode character that visually represents the node type.
pub fn get_icon(node_type: &str) -> &'static str {
    match node_type {
        "doc" => "⧉",
        "paragraph" => "¶",
        "heading" => "§",
        "bulletList" => "☰",
        "orderedList" => "⒈",
        "listItem" => "•",
        "codeBlock" => "𝒱",
        "blockquote" => "❝",
        "rule" => "⎯",
        "table" => "▦",
        "tableRow" => "═",
        "tableHeader" => "◘",
        "tableCell" => "▢",
        "text" => "◦",
        "hardBreak" => "↵",
        "inlineCard" => "⊕",
        _ => "○",
    }
}
