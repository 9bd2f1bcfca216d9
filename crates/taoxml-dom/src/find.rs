//! Chained tag lookups that stop at the first miss.

use crate::{DomTree, ElementData, NodeId};

/// A chainable lookup over a tree, starting from a possibly missing node.
///
/// Each [`Find::child`] step moves to the first child element with the given
/// tag. Once a step misses, or the current node is text, the chain is inert
/// and every later step is a no-op.
///
/// ```
/// use taoxml_dom::{DomTree, ElementData, NodeId, NodeType};
///
/// let mut tree = DomTree::new();
/// let html = tree.alloc(NodeType::Element(ElementData::new("html")));
/// tree.append_child(NodeId::ROOT, html);
///
/// assert!(tree.find(NodeId::ROOT).child("html").found());
/// assert!(!tree.find(NodeId::ROOT).child("body").child("html").found());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Find<'a> {
    tree: &'a DomTree,
    node: Option<NodeId>,
}

impl<'a> Find<'a> {
    /// Start a chain at `node`. `None` starts an already-missed chain.
    #[must_use]
    pub const fn new(tree: &'a DomTree, node: Option<NodeId>) -> Self {
        Self { tree, node }
    }

    /// Move to the first child element of the current node tagged `tag`.
    ///
    /// An empty `tag` moves to the first child of any kind.
    #[must_use]
    pub fn child(self, tag: &str) -> Self {
        let node = self
            .node
            .filter(|&id| self.tree.is_element(id))
            .and_then(|id| self.tree.select(id, tag).next());
        Self { node, ..self }
    }

    /// Apply [`Self::child`] for each tag in `tags`, in order.
    #[must_use]
    pub fn path<'t>(self, tags: impl IntoIterator<Item = &'t str>) -> Self {
        tags.into_iter().fold(self, Self::child)
    }

    /// Whether every step so far resolved to a node.
    #[must_use]
    pub const fn found(&self) -> bool {
        self.node.is_some()
    }

    /// The resolved node, if any.
    #[must_use]
    pub const fn node(&self) -> Option<NodeId> {
        self.node
    }

    /// The resolved node as an element.
    #[must_use]
    pub fn element(&self) -> Option<&'a ElementData> {
        self.node.and_then(|id| self.tree.as_element(id))
    }

    /// The first child of the resolved element, read as text.
    ///
    /// Tag paths always end on elements; this reaches the leaf text inside
    /// one. Returns `None` when the first child is itself an element.
    #[must_use]
    pub fn text(&self) -> Option<&'a str> {
        let element = self.node.filter(|&id| self.tree.is_element(id))?;
        let first = self.tree.select(element, "").next()?;
        self.tree.as_text(first)
    }
}

impl From<Find<'_>> for bool {
    fn from(find: Find<'_>) -> Self {
        find.found()
    }
}

impl From<Find<'_>> for Option<NodeId> {
    fn from(find: Find<'_>) -> Self {
        find.node()
    }
}
