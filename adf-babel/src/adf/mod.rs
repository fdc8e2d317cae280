//! Atlassian Document Format (ADF) node model.
//!
//! ADF is the JSON document format Jira and Confluence use for rich text
//! (issue descriptions, comments, page bodies). See
//! <https://developer.atlassian.com/cloud/jira/platform/apis/document/structure/>.
//!
//! Nodes are a closed enum rather than a free-form JSON map, so every node
//! kind the converter can emit is spelled out in [`nodes::Node`] and serde
//! produces the wire shape (`"type"` tag, camelCase names, optional keys
//! omitted).

pub mod marks;
pub mod nodes;

pub use marks::{LinkAttrs, Mark, Marks};
pub use nodes::{
    CodeBlockAttrs, Document, HeadingAttrs, InlineCardAttrs, Node, TableAttrs, TableLayout,
    ADF_VERSION,
};
