//! Layout-tree construction from the DOM.
//!
//! The visible tree is rooted at the first `<body>` element found by
//! depth-first search. Styles are computed top-down during the walk;
//! `display: none` prunes the whole subtree.

use sable_dom::{DomArena, NodeId};

use crate::parser::Stylesheet;
use crate::style::{ComputedStyle, DisplayValue, compute_style};

use super::tree::{LayoutNodeId, LayoutTree};

/// Build a layout tree for the DOM's `<body>` subtree.
///
/// Returns an empty tree when the document has no `<body>`.
#[must_use]
pub fn build_layout_tree(dom: &DomArena, stylesheet: Option<&Stylesheet>) -> LayoutTree {
    let mut tree = LayoutTree::new();

    let Some(root) = dom.root() else {
        return tree;
    };
    let Some(body) = find_body(dom, root) else {
        return tree;
    };

    if let Some(root_id) = build_node(dom, body, &ComputedStyle::default(), stylesheet, &mut tree)
    {
        tree.set_root(root_id);
    }
    tree
}

/// Depth-first search for the first `<body>` element.
fn find_body(dom: &DomArena, id: NodeId) -> Option<NodeId> {
    if dom.as_element(id).is_some_and(|e| e.tag_name == "body") {
        return Some(id);
    }
    for &child in dom.children(id) {
        if let Some(found) = find_body(dom, child) {
            return Some(found);
        }
    }
    None
}

fn build_node(
    dom: &DomArena,
    id: NodeId,
    parent_style: &ComputedStyle,
    stylesheet: Option<&Stylesheet>,
    tree: &mut LayoutTree,
) -> Option<LayoutNodeId> {
    let node = dom.get(id)?;

    let style = compute_style(node, parent_style, stylesheet);

    if style.display == DisplayValue::None {
        return None;
    }

    let layout_id = tree.create_node(id, style);

    if let Some(text) = node.as_text()
        && let Some(layout_node) = tree.get_mut(layout_id)
    {
        layout_node.text = Some(text.to_string());
    }

    for &child in &node.children {
        if let Some(child_layout) = build_node(dom, child, &style, stylesheet, tree) {
            tree.append_child(layout_id, child_layout);
        }
    }

    Some(layout_id)
}
