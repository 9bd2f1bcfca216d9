//! Element/text tree for parsed taoxml documents.
//!
//! # Design
//!
//! The tree uses arena allocation with [`NodeId`] indices for all relationships.
//! Every node is owned by the arena; parent and sibling links are plain indices
//! used for navigation only. Dropping the [`DomTree`] releases the whole
//! document at once, and there is no API for removing individual nodes.
//!
//! The root at [`NodeId::ROOT`] is a synthetic element with an empty tag name.
//! It holds the top-level elements of the document and never holds text.
//!
//! Traversal state lives outside the tree: [`DomTree::select`] hands out an
//! independent [`Selection`] cursor, so any number of traversals can run over
//! the same element while the tree stays immutably borrowed.

use std::collections::BTreeMap;

mod cursor;
mod find;

pub use cursor::Selection;
pub use find::Find;

/// Map of attribute names to values for an element.
///
/// Keys are kept in lexicographic order, so positional access through
/// [`ElementData::attribute_at`] follows key order, not source order.
pub type AttributesMap = BTreeMap<String, String>;

/// A type-safe index into the tree arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub usize);

impl NodeId {
    /// The synthetic document root is always at index 0.
    pub const ROOT: Self = Self(0);
}

/// A node slot in the arena: its payload plus navigation links.
///
/// Links are filled in by [`DomTree::append_child`]. A node that was
/// allocated but never appended (for example an element whose markup failed
/// to parse) has no parent and no siblings.
#[derive(Debug, Clone)]
pub struct Node {
    /// Element or text payload.
    pub node_type: NodeType,

    /// The element this node was appended to.
    pub parent: Option<NodeId>,

    /// Children in document order. Always empty for text nodes.
    pub children: Vec<NodeId>,

    /// The node immediately following this one in its parent's children.
    pub next_sibling: Option<NodeId>,

    /// The node immediately preceding this one in its parent's children.
    pub prev_sibling: Option<NodeId>,
}

/// The two kinds of node a document is made of.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeType {
    /// A tagged node carrying attributes and children.
    Element(ElementData),
    /// A leaf carrying character data with entities already expanded.
    Text(String),
}

/// Element-specific data: the tag name and the attribute set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElementData {
    /// The element's tag name. Empty only for the synthetic root.
    pub tag_name: String,
    /// Attribute names mapped to decoded values.
    pub attrs: AttributesMap,
}

impl ElementData {
    /// Create element data with the given tag name and no attributes.
    #[must_use]
    pub fn new(tag_name: impl Into<String>) -> Self {
        Self {
            tag_name: tag_name.into(),
            attrs: AttributesMap::new(),
        }
    }

    /// The element's tag name.
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag_name
    }

    /// Set an attribute. A later write for the same name replaces the earlier value.
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let _ = self.attrs.insert(name.into(), value.into());
    }

    /// Look up an attribute value by name.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    /// Number of distinct attributes.
    #[must_use]
    pub fn attribute_count(&self) -> usize {
        self.attrs.len()
    }

    /// The `index`-th attribute in key order, as a `(name, value)` pair.
    #[must_use]
    pub fn attribute_at(&self, index: usize) -> Option<(&str, &str)> {
        self.attributes().nth(index)
    }

    /// All attributes in key order.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attrs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Arena-based tree with O(1) node access and parent/sibling navigation.
///
/// All nodes live in one contiguous vector and refer to each other by
/// [`NodeId`]. Index 0 is the synthetic root element.
#[derive(Debug, Clone)]
pub struct DomTree {
    nodes: Vec<Node>,
}

impl DomTree {
    /// Create a tree containing only the synthetic root element.
    #[must_use]
    pub fn new() -> Self {
        let root = Node {
            node_type: NodeType::Element(ElementData::default()),
            parent: None,
            children: Vec::new(),
            next_sibling: None,
            prev_sibling: None,
        };
        Self { nodes: vec![root] }
    }

    /// Get the root node ID.
    #[must_use]
    pub const fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Get a node by its ID.
    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// Get a mutable reference to a node by its ID.
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.0)
    }

    /// Number of nodes in the arena, including the root and any unattached nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: the root is allocated on construction.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Allocate a new node and return its ID.
    /// The node is not yet attached to the tree.
    pub fn alloc(&mut self, node_type: NodeType) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            node_type,
            parent: None,
            children: Vec::new(),
            next_sibling: None,
            prev_sibling: None,
        });
        id
    }

    /// Appends `child` as the last child of `parent`, linking parent and siblings.
    ///
    /// Children are only ever appended, so document order is insertion order.
    ///
    /// The append is ignored when it would break the tree shape:
    /// - `parent` is a text node, as text nodes never have children
    /// - `child` is the root or already has a parent
    /// - `child` is `parent` itself or one of its ancestors
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        if !self.is_element(parent)
            || self.get(child).is_none()
            || child == NodeId::ROOT
            || self.parent(child).is_some()
            || self.is_ancestor_or_self(child, parent)
        {
            return;
        }

        let prev_last_child = self.nodes[parent.0].children.last().copied();
        self.nodes[parent.0].children.push(child);
        self.nodes[child.0].parent = Some(parent);

        if let Some(prev_id) = prev_last_child {
            self.nodes[prev_id.0].next_sibling = Some(child);
            self.nodes[child.0].prev_sibling = Some(prev_id);
        }
    }

    /// Whether `ancestor` is `node` or lies on its parent chain.
    #[must_use]
    pub fn is_ancestor_or_self(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.parent(id);
        }
        false
    }

    /// Get the parent of a node.
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.parent)
    }

    /// Get all children of a node.
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.get(id).map(|n| n.children.as_slice()).unwrap_or(&[])
    }

    /// Number of children of a node.
    #[must_use]
    pub fn child_count(&self, id: NodeId) -> usize {
        self.children(id).len()
    }

    /// The `index`-th child of a node, in document order.
    #[must_use]
    pub fn child(&self, id: NodeId, index: usize) -> Option<NodeId> {
        self.children(id).get(index).copied()
    }

    /// Get the next sibling of a node, element or text.
    #[must_use]
    pub fn next_sibling(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.next_sibling)
    }

    /// Get the previous sibling of a node, element or text.
    #[must_use]
    pub fn prev_sibling(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.prev_sibling)
    }

    /// The closest following sibling that is an element.
    #[must_use]
    pub fn next_element_sibling(&self, id: NodeId) -> Option<NodeId> {
        let mut current = self.next_sibling(id);
        while let Some(sibling) = current {
            if self.is_element(sibling) {
                return Some(sibling);
            }
            current = self.next_sibling(sibling);
        }
        None
    }

    /// The closest preceding sibling that is an element.
    #[must_use]
    pub fn prev_element_sibling(&self, id: NodeId) -> Option<NodeId> {
        let mut current = self.prev_sibling(id);
        while let Some(sibling) = current {
            if self.is_element(sibling) {
                return Some(sibling);
            }
            current = self.prev_sibling(sibling);
        }
        None
    }

    /// Get element data if this node is an element.
    #[must_use]
    pub fn as_element(&self, id: NodeId) -> Option<&ElementData> {
        self.get(id).and_then(|n| match &n.node_type {
            NodeType::Element(data) => Some(data),
            NodeType::Text(_) => None,
        })
    }

    /// Get mutable element data if this node is an element.
    pub fn as_element_mut(&mut self, id: NodeId) -> Option<&mut ElementData> {
        self.get_mut(id).and_then(|n| match &mut n.node_type {
            NodeType::Element(data) => Some(data),
            NodeType::Text(_) => None,
        })
    }

    /// Get text content if this node is a text node.
    #[must_use]
    pub fn as_text(&self, id: NodeId) -> Option<&str> {
        self.get(id).and_then(|n| match &n.node_type {
            NodeType::Text(s) => Some(s.as_str()),
            NodeType::Element(_) => None,
        })
    }

    /// Whether `id` names an element (the root included).
    #[must_use]
    pub fn is_element(&self, id: NodeId) -> bool {
        self.as_element(id).is_some()
    }

    /// The first element directly under the root, if any.
    #[must_use]
    pub fn document_element(&self) -> Option<NodeId> {
        self.children(NodeId::ROOT)
            .iter()
            .copied()
            .find(|&id| self.is_element(id))
    }

    /// Start a traversal over the children of `element`.
    ///
    /// An empty `filter` visits every child, element or text, in document
    /// order. A non-empty `filter` visits only element children whose tag
    /// equals it. The returned cursor starts before the first child.
    #[must_use]
    pub fn select<'a>(&'a self, element: NodeId, filter: &'a str) -> Selection<'a> {
        Selection::new(self, element, filter)
    }

    /// Start a find-chain at `start`.
    #[must_use]
    pub const fn find(&self, start: NodeId) -> Find<'_> {
        Find::new(self, Some(start))
    }
}

impl Default for DomTree {
    fn default() -> Self {
        Self::new()
    }
}
