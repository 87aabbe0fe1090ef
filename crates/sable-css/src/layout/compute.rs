//! Block-flow geometry computation.
//!
//! The root box occupies the full viewport. Children stack vertically:
//! each child takes the parent's content width (or its explicit width),
//! its estimated intrinsic height (or its explicit height), and the flow
//! cursor advances by the child's height plus its bottom margin.
//! Auto-height parents grow to contain their last child but never shrink
//! below their initial height.
//!
//! Layout never fails. Overflow is permitted: children may extend past the
//! viewport, and nothing is clipped here.

use super::tree::{LayoutNodeId, LayoutTree, Rect};

/// Assign geometry to every node in the tree for the given viewport.
pub fn compute_layout(tree: &mut LayoutTree, viewport_width: f32, viewport_height: f32) {
    let Some(root) = tree.root() else {
        return;
    };

    if let Some(node) = tree.get_mut(root) {
        node.rect = Rect::new(0.0, 0.0, viewport_width, viewport_height);
    }

    layout_children(tree, root);
}

fn layout_children(tree: &mut LayoutTree, node_id: LayoutNodeId) {
    let Some(node) = tree.get(node_id) else {
        return;
    };
    let rect = node.rect;
    let style = node.style;
    let children = node.children.clone();

    // Content area: inside this box's margin and padding
    let content_x = rect.x + style.margin.left + style.padding.left;
    let content_y = rect.y + style.margin.top + style.padding.top;
    let content_width = rect.width
        - style.margin.left
        - style.margin.right
        - style.padding.left
        - style.padding.right;

    // Flow cursor for vertical stacking
    let mut cursor_y = content_y;

    for &child_id in &children {
        let Some(child) = tree.get(child_id) else {
            continue;
        };
        let child_style = child.style;

        let child_width = child_style.width.unwrap_or(content_width);
        let child_height = child_style
            .height
            .unwrap_or_else(|| estimate_height(tree, child_id));

        let child_rect = Rect {
            x: content_x + child_style.margin.left,
            y: cursor_y + child_style.margin.top,
            width: child_width - child_style.margin.left - child_style.margin.right,
            height: child_height,
        };
        if let Some(child) = tree.get_mut(child_id) {
            child.rect = child_rect;
        }

        cursor_y = child_rect.y + child_rect.height + child_style.margin.bottom;

        layout_children(tree, child_id);
    }

    // Grow an auto-height parent to contain its last child plus trailing
    // margins and padding. Never shrink below the initial height.
    let mut grown_height = None;
    if let Some(node) = tree.get(node_id)
        && node.style.height.is_none()
        && let Some(&last_id) = node.children.last()
        && let Some(last) = tree.get(last_id)
    {
        let new_height = (last.rect.y + last.rect.height + last.style.margin.bottom)
            - node.rect.y
            + node.style.padding.bottom
            + node.style.margin.bottom;
        if new_height > node.rect.height {
            grown_height = Some(new_height);
        }
    }
    if let Some(height) = grown_height
        && let Some(node) = tree.get_mut(node_id)
    {
        node.rect.height = height;
    }
}

/// Estimated intrinsic height for a box without an explicit height.
///
/// Text boxes use a single-line model of `font_size × 1.5` plus vertical
/// padding; elements sum their children's estimates plus the children's
/// vertical margins and their own vertical padding.
fn estimate_height(tree: &LayoutTree, node_id: LayoutNodeId) -> f32 {
    let Some(node) = tree.get(node_id) else {
        return 0.0;
    };

    if node.text.as_deref().is_some_and(|t| !t.is_empty()) {
        let line_height = node.style.font_size * 1.5;
        return line_height + node.style.padding.top + node.style.padding.bottom;
    }

    if let Some(height) = node.style.height {
        return height;
    }

    let mut total = 0.0;
    for &child_id in &node.children {
        if let Some(child) = tree.get(child_id) {
            total += estimate_height(tree, child_id);
            total += child.style.margin.top + child.style.margin.bottom;
        }
    }

    total + node.style.padding.top + node.style.padding.bottom
}
