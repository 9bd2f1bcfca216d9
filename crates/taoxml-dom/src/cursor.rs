//! Tag-filtered, bidirectional traversal over an element's children.

use crate::{DomTree, NodeId};

/// An independent cursor over the children of one element.
///
/// Created by [`DomTree::select`]. The cursor owns its position and filter,
/// so nested or interleaved traversals of the same element never disturb one
/// another. Forward traversal goes through [`Iterator::next`]; [`Self::prev`]
/// walks back from the current position.
///
/// At either boundary the cursor returns `None` and keeps its position, so a
/// `prev` after running off the end returns the match before the last one.
#[derive(Debug, Clone)]
pub struct Selection<'a> {
    tree: &'a DomTree,
    children: &'a [NodeId],
    filter: &'a str,
    /// Index of the last returned child; `None` means before the first child.
    position: Option<usize>,
}

impl<'a> Selection<'a> {
    pub(crate) fn new(tree: &'a DomTree, element: NodeId, filter: &'a str) -> Self {
        Self {
            tree,
            children: tree.children(element),
            filter,
            position: None,
        }
    }

    /// The tag filter this cursor was started with. Empty matches every child.
    #[must_use]
    pub const fn filter(&self) -> &'a str {
        self.filter
    }

    /// Index of the child last returned, or `None` before the first step.
    #[must_use]
    pub const fn position(&self) -> Option<usize> {
        self.position
    }

    /// Step back to the previous matching child.
    pub fn prev(&mut self) -> Option<NodeId> {
        let current = self.position?;
        let index = (0..current).rev().find(|&i| self.matches(self.children[i]))?;
        self.position = Some(index);
        Some(self.children[index])
    }

    fn matches(&self, id: NodeId) -> bool {
        self.filter.is_empty()
            || self
                .tree
                .as_element(id)
                .is_some_and(|e| e.tag_name == self.filter)
    }
}

impl Iterator for Selection<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let start = self.position.map_or(0, |p| p + 1);
        let index = (start..self.children.len()).find(|&i| self.matches(self.children[i]))?;
        self.position = Some(index);
        Some(self.children[index])
    }
}
