//! Arena-backed DOM tree for the sable engine.
//!
//! # Design
//!
//! The tree stores every node in a contiguous arena and addresses them with
//! [`NodeId`] indices, giving O(1) random access and traversal without
//! ownership cycles. Parent and child links are ids, never references, so
//! nodes cannot dangle.
//!
//! There is no document node: the root is the first element the parser
//! attached, or `None` when the input produced no element at all.

use std::collections::HashMap;
use std::fmt::Write;

/// Map of attribute names to values for an element.
///
/// Keys are stored lowercase and are unique; when the source repeats an
/// attribute, the last occurrence wins.
pub type AttributesMap = HashMap<String, String>;

/// A stable index into the DOM arena.
///
/// Ids are assigned in creation order and never reused. A dangling or
/// out-of-range id yields `None` from lookups, never a panic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub usize);

/// Element-specific data: a lowercased tag name plus the attribute map.
#[derive(Debug, Clone)]
pub struct ElementData {
    /// The element's local name, lowercased by the tokenizer.
    pub tag_name: String,
    /// The element's attribute list.
    pub attrs: AttributesMap,
}

impl ElementData {
    /// Returns the element's `id` attribute value if present.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.attrs.get("id").map(String::as_str)
    }

    /// Returns the raw `class` attribute value if present.
    ///
    /// Selector matching compares this whole string, not space-separated
    /// tokens.
    #[must_use]
    pub fn class_attr(&self) -> Option<&str> {
        self.attrs.get("class").map(String::as_str)
    }
}

/// The two node variants the tree can hold.
///
/// A tagged union is all the engine needs: elements carry a name and
/// attributes, text nodes carry their trimmed payload and are always
/// leaves.
#[derive(Debug, Clone)]
pub enum NodeKind {
    /// An element node.
    Element(ElementData),
    /// A text node. The payload is the source text with surrounding ASCII
    /// whitespace trimmed.
    Text(String),
}

/// A single node in the arena.
#[derive(Debug, Clone)]
pub struct Node {
    /// Whether this is an element or a text node.
    pub kind: NodeKind,
    /// Parent id, `None` for the root (or an unattached node).
    pub parent: Option<NodeId>,
    /// Ordered child ids. Always empty for text nodes.
    pub children: Vec<NodeId>,
}

impl Node {
    /// Returns element data if this node is an element.
    #[must_use]
    pub fn as_element(&self) -> Option<&ElementData> {
        match &self.kind {
            NodeKind::Element(data) => Some(data),
            NodeKind::Text(_) => None,
        }
    }

    /// Returns the text payload if this node is a text node.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Text(text) => Some(text.as_str()),
            NodeKind::Element(_) => None,
        }
    }
}

/// Arena-based DOM tree with O(1) node access.
#[derive(Debug, Clone, Default)]
pub struct DomArena {
    nodes: Vec<Node>,
    root: Option<NodeId>,
}

impl DomArena {
    /// Create an empty arena with no root.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The root element id, or `None` when the input produced no element.
    #[must_use]
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Set the root id. Used by the parser when it adopts the first element.
    pub fn set_root(&mut self, id: NodeId) {
        self.root = Some(id);
    }

    /// Number of nodes in the arena.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True when the arena holds no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Allocate a new, unattached element node and return its id.
    pub fn create_element(&mut self, tag_name: impl Into<String>) -> NodeId {
        self.push_node(NodeKind::Element(ElementData {
            tag_name: tag_name.into(),
            attrs: AttributesMap::new(),
        }))
    }

    /// Allocate a new, unattached text node and return its id.
    pub fn create_text(&mut self, text: impl Into<String>) -> NodeId {
        self.push_node(NodeKind::Text(text.into()))
    }

    fn push_node(&mut self, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            kind,
            parent: None,
            children: Vec::new(),
        });
        id
    }

    /// Set an attribute on an element node. No-op for text nodes and
    /// out-of-range ids.
    pub fn set_attribute(
        &mut self,
        id: NodeId,
        key: impl Into<String>,
        value: impl Into<String>,
    ) {
        if let Some(node) = self.nodes.get_mut(id.0)
            && let NodeKind::Element(data) = &mut node.kind
        {
            let _ = data.attrs.insert(key.into(), value.into());
        }
    }

    /// Append `child` as the last child of `parent`, updating both links.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        if parent.0 >= self.nodes.len() || child.0 >= self.nodes.len() {
            return;
        }
        self.nodes[parent.0].children.push(child);
        self.nodes[child.0].parent = Some(parent);
    }

    /// Get a node by id.
    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// Get a mutable node by id.
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.0)
    }

    /// The parent of a node, if any.
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.parent)
    }

    /// The children of a node. Empty for text nodes and bad ids.
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.get(id).map(|n| n.children.as_slice()).unwrap_or(&[])
    }

    /// Element data for an id, when the node is an element.
    #[must_use]
    pub fn as_element(&self, id: NodeId) -> Option<&ElementData> {
        self.get(id).and_then(Node::as_element)
    }

    /// Text payload for an id, when the node is a text node.
    #[must_use]
    pub fn as_text(&self, id: NodeId) -> Option<&str> {
        self.get(id).and_then(Node::as_text)
    }

    /// Render the tree as an indented debug listing.
    #[must_use]
    pub fn dump(&self) -> String {
        let mut out = String::new();
        if let Some(root) = self.root {
            self.dump_node(root, 0, &mut out);
        }
        out
    }

    fn dump_node(&self, id: NodeId, indent: usize, out: &mut String) {
        let Some(node) = self.get(id) else { return };
        for _ in 0..indent {
            out.push_str("  ");
        }
        match &node.kind {
            NodeKind::Element(data) => {
                let _ = write!(out, "<{}", data.tag_name);
                let mut attrs: Vec<_> = data.attrs.iter().collect();
                attrs.sort();
                for (key, value) in attrs {
                    let _ = write!(out, " {key}=\"{value}\"");
                }
                out.push_str(">\n");
            }
            NodeKind::Text(text) => {
                let _ = writeln!(out, "{text:?}");
            }
        }
        for &child in &node.children {
            self.dump_node(child, indent + 1, out);
        }
    }
}
