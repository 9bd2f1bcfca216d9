//! Tests for tree construction, attribute storage and navigation links.

use taoxml_dom::{DomTree, ElementData, NodeId, NodeType};

/// Helper to create an element node and return its NodeId.
fn alloc_element(tree: &mut DomTree, tag: &str) -> NodeId {
    tree.alloc(NodeType::Element(ElementData::new(tag)))
}

fn alloc_text(tree: &mut DomTree, data: &str) -> NodeId {
    tree.alloc(NodeType::Text(data.to_string()))
}

#[test]
fn test_new_tree_has_untagged_root() {
    let tree = DomTree::new();
    assert_eq!(tree.len(), 1);
    assert_eq!(tree.root(), NodeId::ROOT);
    assert_eq!(tree.as_element(NodeId::ROOT).map(ElementData::tag), Some(""));
    assert_eq!(tree.parent(NodeId::ROOT), None);
    assert_eq!(tree.child_count(NodeId::ROOT), 0);
}

#[test]
fn test_append_keeps_document_order() {
    let mut tree = DomTree::new();
    let a = alloc_element(&mut tree, "a");
    let b = alloc_element(&mut tree, "b");
    let c = alloc_element(&mut tree, "c");
    tree.append_child(NodeId::ROOT, a);
    tree.append_child(NodeId::ROOT, b);
    tree.append_child(NodeId::ROOT, c);

    assert_eq!(tree.children(NodeId::ROOT), &[a, b, c]);
    assert_eq!(tree.child(NodeId::ROOT, 1), Some(b));
    assert_eq!(tree.child(NodeId::ROOT, 3), None);
}

#[test]
fn test_append_links_parent_and_siblings() {
    let mut tree = DomTree::new();
    let parent = alloc_element(&mut tree, "div");
    tree.append_child(NodeId::ROOT, parent);

    let a = alloc_element(&mut tree, "a");
    let b = alloc_element(&mut tree, "b");
    tree.append_child(parent, a);
    tree.append_child(parent, b);

    assert_eq!(tree.parent(parent), Some(NodeId::ROOT));
    assert_eq!(tree.parent(a), Some(parent));
    assert_eq!(tree.prev_sibling(a), None);
    assert_eq!(tree.next_sibling(a), Some(b));
    assert_eq!(tree.prev_sibling(b), Some(a));
    assert_eq!(tree.next_sibling(b), None);
}

#[test]
fn test_element_siblings_skip_text() {
    let mut tree = DomTree::new();
    let parent = alloc_element(&mut tree, "p");
    let a = alloc_element(&mut tree, "a");
    let text = alloc_text(&mut tree, "between");
    let b = alloc_element(&mut tree, "b");
    tree.append_child(parent, a);
    tree.append_child(parent, text);
    tree.append_child(parent, b);

    assert_eq!(tree.next_sibling(a), Some(text));
    assert_eq!(tree.next_element_sibling(a), Some(b));
    assert_eq!(tree.prev_element_sibling(b), Some(a));
    assert_eq!(tree.prev_element_sibling(a), None);
    assert_eq!(tree.next_element_sibling(b), None);
}

#[test]
fn test_text_nodes_never_get_children() {
    let mut tree = DomTree::new();
    let text = alloc_text(&mut tree, "leaf");
    let a = alloc_element(&mut tree, "a");
    tree.append_child(text, a);

    assert_eq!(tree.child_count(text), 0);
    assert_eq!(tree.parent(a), None);
}

#[test]
fn test_append_refuses_node_with_a_parent() {
    let mut tree = DomTree::new();
    let first = alloc_element(&mut tree, "first");
    let second = alloc_element(&mut tree, "second");
    let child = alloc_element(&mut tree, "child");
    tree.append_child(NodeId::ROOT, first);
    tree.append_child(NodeId::ROOT, second);
    tree.append_child(first, child);
    tree.append_child(second, child);
    tree.append_child(first, child);

    assert_eq!(tree.children(first), &[child]);
    assert_eq!(tree.child_count(second), 0);
    assert_eq!(tree.parent(child), Some(first));
    assert_eq!(tree.next_sibling(child), None);
    assert_eq!(tree.prev_sibling(child), None);
}

#[test]
fn test_append_refuses_cycles() {
    let mut tree = DomTree::new();
    let outer = alloc_element(&mut tree, "outer");
    let inner = alloc_element(&mut tree, "inner");
    tree.append_child(outer, inner);

    tree.append_child(outer, outer);
    tree.append_child(inner, outer);
    tree.append_child(inner, NodeId::ROOT);

    assert_eq!(tree.children(outer), &[inner]);
    assert_eq!(tree.child_count(inner), 0);
    assert_eq!(tree.parent(outer), None);
    assert_eq!(tree.parent(NodeId::ROOT), None);

    // A detached subtree can still be attached once.
    tree.append_child(NodeId::ROOT, outer);
    assert_eq!(tree.parent(outer), Some(NodeId::ROOT));
}

#[test]
fn test_is_ancestor_or_self() {
    let mut tree = DomTree::new();
    let a = alloc_element(&mut tree, "a");
    let b = alloc_element(&mut tree, "b");
    let c = alloc_text(&mut tree, "c");
    tree.append_child(NodeId::ROOT, a);
    tree.append_child(a, b);
    tree.append_child(b, c);

    assert!(tree.is_ancestor_or_self(NodeId::ROOT, c));
    assert!(tree.is_ancestor_or_self(a, c));
    assert!(tree.is_ancestor_or_self(b, b));
    assert!(!tree.is_ancestor_or_self(c, a));
    assert!(!tree.is_ancestor_or_self(b, a));
}

#[test]
fn test_attributes_last_write_wins() {
    let mut data = ElementData::new("a");
    data.set_attribute("x", "1");
    data.set_attribute("x", "2");

    assert_eq!(data.attribute_count(), 1);
    assert_eq!(data.attribute("x"), Some("2"));
    assert_eq!(data.attribute("y"), None);
}

#[test]
fn test_attribute_positions_follow_key_order() {
    let mut data = ElementData::new("a");
    data.set_attribute("zeta", "last");
    data.set_attribute("alpha", "first");
    data.set_attribute("mid", "middle");

    assert_eq!(data.attribute_at(0), Some(("alpha", "first")));
    assert_eq!(data.attribute_at(1), Some(("mid", "middle")));
    assert_eq!(data.attribute_at(2), Some(("zeta", "last")));
    assert_eq!(data.attribute_at(3), None);
}

#[test]
fn test_document_element_is_first_element_under_root() {
    let mut tree = DomTree::new();
    assert_eq!(tree.document_element(), None);

    let html = alloc_element(&mut tree, "html");
    let other = alloc_element(&mut tree, "other");
    tree.append_child(NodeId::ROOT, html);
    tree.append_child(NodeId::ROOT, other);

    assert_eq!(tree.document_element(), Some(html));
}

#[test]
fn test_as_element_and_as_text_are_exclusive() {
    let mut tree = DomTree::new();
    let a = alloc_element(&mut tree, "a");
    let t = alloc_text(&mut tree, "hi");

    assert!(tree.as_element(a).is_some());
    assert!(tree.as_text(a).is_none());
    assert_eq!(tree.as_text(t), Some("hi"));
    assert!(tree.as_element(t).is_none());
    assert!(tree.get(NodeId(99)).is_none());
}
