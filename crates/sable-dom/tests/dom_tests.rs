//! Integration tests for the DOM arena.

use sable_dom::{DomArena, NodeId, NodeKind};

#[test]
fn ids_are_assigned_in_creation_order() {
    let mut dom = DomArena::new();
    let a = dom.create_element("div");
    let b = dom.create_element("p");
    let c = dom.create_text("hello");
    assert_eq!(a, NodeId(0));
    assert_eq!(b, NodeId(1));
    assert_eq!(c, NodeId(2));
    assert_eq!(dom.len(), 3);
}

#[test]
fn append_child_links_both_directions() {
    let mut dom = DomArena::new();
    let parent = dom.create_element("div");
    let child = dom.create_text("hello");
    dom.append_child(parent, child);

    assert_eq!(dom.children(parent), &[child]);
    assert_eq!(dom.parent(child), Some(parent));
}

#[test]
fn every_child_appears_exactly_once_in_its_parent() {
    let mut dom = DomArena::new();
    let root = dom.create_element("div");
    dom.set_root(root);
    let mut children = Vec::new();
    for _ in 0..5 {
        let child = dom.create_element("p");
        dom.append_child(root, child);
        children.push(child);
    }

    for &child in &children {
        let parent = dom.parent(child).expect("child has a parent");
        let count = dom.children(parent).iter().filter(|&&c| c == child).count();
        assert_eq!(count, 1);
    }
}

#[test]
fn out_of_range_lookups_return_none() {
    let dom = DomArena::new();
    assert!(dom.get(NodeId(0)).is_none());
    assert!(dom.as_element(NodeId(42)).is_none());
    assert!(dom.as_text(NodeId(42)).is_none());
    assert!(dom.parent(NodeId(42)).is_none());
    assert!(dom.children(NodeId(42)).is_empty());
}

#[test]
fn duplicate_attribute_keys_keep_the_last_value() {
    let mut dom = DomArena::new();
    let el = dom.create_element("div");
    dom.set_attribute(el, "class", "first");
    dom.set_attribute(el, "class", "second");

    let data = dom.as_element(el).expect("element data");
    assert_eq!(data.class_attr(), Some("second"));
}

#[test]
fn text_nodes_are_leaves() {
    let mut dom = DomArena::new();
    let text = dom.create_text("hello");
    let node = dom.get(text).expect("text node");
    assert!(matches!(node.kind, NodeKind::Text(_)));
    assert!(node.children.is_empty());
}

#[test]
fn dump_lists_the_tree() {
    let mut dom = DomArena::new();
    let root = dom.create_element("div");
    dom.set_attribute(root, "id", "main");
    dom.set_root(root);
    let text = dom.create_text("hi");
    dom.append_child(root, text);

    let dump = dom.dump();
    assert!(dump.contains("<div id=\"main\">"));
    assert!(dump.contains("\"hi\""));
}

#[test]
fn empty_arena_has_no_root() {
    let dom = DomArena::new();
    assert!(dom.root().is_none());
    assert!(dom.is_empty());
    assert_eq!(dom.dump(), "");
}
