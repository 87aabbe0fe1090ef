//! The painter: layout tree in, display list out.
//!
//! A depth-first walk emitting, per node: the background fill (when its
//! alpha is non-zero), one fill strip per non-zero border edge, the text
//! run inset by the node's padding, then the children. The caller pushes
//! the page background first via [`paint_background`].

use crate::layout::{LayoutNode, LayoutNodeId, LayoutTree, Rect};
use crate::style::Color;

use super::display_list::PaintList;

/// Generate paint operations for a laid-out tree.
#[must_use]
pub fn paint(tree: &LayoutTree) -> PaintList {
    let mut list = PaintList::new();

    if let Some(root) = tree.root() {
        paint_node(tree, root, &mut list);
    }
    list
}

/// Push the viewport background fill. Emitted before the tree walk so it
/// sits behind everything else.
pub fn paint_background(list: &mut PaintList, width: f32, height: f32, color: Color) {
    list.push_fill_rect(Rect::new(0.0, 0.0, width, height), color);
}

fn paint_node(tree: &LayoutTree, node_id: LayoutNodeId, list: &mut PaintList) {
    let Some(node) = tree.get(node_id) else {
        return;
    };

    // Background, only when visible
    if node.style.background.a > 0 {
        list.push_fill_rect(node.rect, node.style.background);
    }

    let border = node.style.border;
    if border.top > 0.0 || border.right > 0.0 || border.bottom > 0.0 || border.left > 0.0 {
        paint_border(node, list);
    }

    if let Some(text) = &node.text
        && !text.is_empty()
    {
        let padding = node.style.padding;
        let text_rect = Rect {
            x: node.rect.x + padding.left,
            y: node.rect.y + padding.top,
            width: node.rect.width - padding.left - padding.right,
            height: node.rect.height - padding.top - padding.bottom,
        };
        list.push_draw_text(text_rect, text.clone(), node.style.color, node.style.font_size);
    }

    for &child in &node.children {
        paint_node(tree, child, list);
    }
}

/// One fill strip per non-zero border edge, in top/right/bottom/left
/// order, covering the box's outer edge.
fn paint_border(node: &LayoutNode, list: &mut PaintList) {
    let rect = node.rect;
    let color = node.style.border_color;
    let border = node.style.border;

    if border.top > 0.0 {
        list.push_fill_rect(
            Rect::new(rect.x, rect.y, rect.width, border.top),
            color,
        );
    }

    if border.right > 0.0 {
        list.push_fill_rect(
            Rect::new(
                rect.x + rect.width - border.right,
                rect.y,
                border.right,
                rect.height,
            ),
            color,
        );
    }

    if border.bottom > 0.0 {
        list.push_fill_rect(
            Rect::new(
                rect.x,
                rect.y + rect.height - border.bottom,
                rect.width,
                border.bottom,
            ),
            color,
        );
    }

    if border.left > 0.0 {
        list.push_fill_rect(
            Rect::new(rect.x, rect.y, border.left, rect.height),
            color,
        );
    }
}
