//! Inline formatting marks.

use serde::Serialize;

/// A piece of inline formatting attached to a text node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Mark {
    Strong,
    Em,
    Code,
    Strike,
    Link { attrs: LinkAttrs },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkAttrs {
    pub href: String,
}

impl Mark {
    pub fn link(href: impl Into<String>) -> Self {
        Mark::Link {
            attrs: LinkAttrs { href: href.into() },
        }
    }

    /// ADF name of the mark (`"strong"`, `"link"`, ...).
    pub fn kind(&self) -> &'static str {
        match self {
            Mark::Strong => "strong",
            Mark::Em => "em",
            Mark::Code => "code",
            Mark::Strike => "strike",
            Mark::Link { .. } => "link",
        }
    }
}

/// Ordered list of active marks, outermost first.
///
/// `Marks` is a value: there is no way to push onto an existing list. Adding a
/// mark with [`Marks::with`] returns a fresh list, so sibling branches of the
/// inline walk can never see each other's formatting.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct Marks(Vec<Mark>);

impl Marks {
    pub fn new() -> Self {
        Marks(Vec::new())
    }

    /// A copy of this list with `mark` appended innermost.
    #[must_use]
    pub fn with(&self, mark: Mark) -> Marks {
        let mut marks = Vec::with_capacity(self.0.len() + 1);
        marks.extend_from_slice(&self.0);
        marks.push(mark);
        Marks(marks)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[Mark] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Mark> {
        self.0.iter()
    }
}

impl From<Vec<Mark>> for Marks {
    fn from(marks: Vec<Mark>) -> Self {
        Marks(marks)
    }
}

impl FromIterator<Mark> for Marks {
    fn from_iter<I: IntoIterator<Item = Mark>>(iter: I) -> Self {
        Marks(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Marks {
    type Item = &'a Mark;
    type IntoIter = std::slice::Iter<'a, Mark>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
