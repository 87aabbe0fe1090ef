//! The layout-tree arena.
//!
//! Mirrors the visible DOM subtree rooted at `<body>`. Like the DOM, the
//! tree is an arena addressed by ids; geometry lives in each node's
//! [`Rect`] and is filled in by the compute pass.

use std::fmt::Write;

use sable_dom::NodeId;

use crate::style::ComputedStyle;

/// A stable index into the layout arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LayoutNodeId(pub usize);

/// A rectangle in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// Horizontal position of the top-left corner.
    pub x: f32,
    /// Vertical position of the top-left corner.
    pub y: f32,
    /// Width in pixels.
    pub width: f32,
    /// Height in pixels.
    pub height: f32,
}

impl Rect {
    /// Construct a rectangle.
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// One node in the layout tree.
#[derive(Debug, Clone)]
pub struct LayoutNode {
    /// The source DOM node this box was generated for.
    pub dom_node: NodeId,
    /// The element's computed style (text nodes carry their inherited
    /// style).
    pub style: ComputedStyle,
    /// Ordered child ids.
    pub children: Vec<LayoutNodeId>,
    /// Border-box geometry, filled in by [`compute_layout`].
    ///
    /// [`compute_layout`]: crate::layout::compute_layout
    pub rect: Rect,
    /// The text payload when the source DOM node is a text node.
    pub text: Option<String>,
}

/// Arena of layout nodes.
#[derive(Debug, Clone, Default)]
pub struct LayoutTree {
    nodes: Vec<LayoutNode>,
    root: Option<LayoutNodeId>,
}

impl LayoutTree {
    /// Create an empty tree.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The root layout node (the `<body>` box), or `None` for an empty
    /// tree.
    #[must_use]
    pub fn root(&self) -> Option<LayoutNodeId> {
        self.root
    }

    /// Set the root id.
    pub fn set_root(&mut self, id: LayoutNodeId) {
        self.root = Some(id);
    }

    /// Number of nodes in the tree.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True when the tree holds no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Allocate a node for the given DOM node and style.
    pub fn create_node(&mut self, dom_node: NodeId, style: ComputedStyle) -> LayoutNodeId {
        let id = LayoutNodeId(self.nodes.len());
        self.nodes.push(LayoutNode {
            dom_node,
            style,
            children: Vec::new(),
            rect: Rect::default(),
            text: None,
        });
        id
    }

    /// Append `child` to `parent`'s child list.
    pub fn append_child(&mut self, parent: LayoutNodeId, child: LayoutNodeId) {
        if let Some(node) = self.nodes.get_mut(parent.0) {
            node.children.push(child);
        }
    }

    /// Get a node by id.
    #[must_use]
    pub fn get(&self, id: LayoutNodeId) -> Option<&LayoutNode> {
        self.nodes.get(id.0)
    }

    /// Get a mutable node by id.
    pub fn get_mut(&mut self, id: LayoutNodeId) -> Option<&mut LayoutNode> {
        self.nodes.get_mut(id.0)
    }

    /// Render the tree as an indented debug listing with geometry.
    #[must_use]
    pub fn dump(&self) -> String {
        let mut out = String::new();
        if let Some(root) = self.root {
            self.dump_node(root, 0, &mut out);
        }
        out
    }

    fn dump_node(&self, id: LayoutNodeId, indent: usize, out: &mut String) {
        let Some(node) = self.get(id) else { return };
        for _ in 0..indent {
            out.push_str("  ");
        }
        let rect = format!(
            "({:.1}, {:.1}, {:.1}, {:.1})",
            node.rect.x, node.rect.y, node.rect.width, node.rect.height
        );
        match &node.text {
            Some(text) => {
                let _ = writeln!(out, "[text] {rect} {text:?}");
            }
            None => {
                let _ = writeln!(
                    out,
                    "[{}] {rect} display={}",
                    node.dom_node.0, node.style.display
                );
            }
        }
        for &child in &node.children {
            self.dump_node(child, indent + 1, out);
        }
    }
}
