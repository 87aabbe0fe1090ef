//! Layout: tree construction and block-flow geometry.

mod build;
mod compute;
mod tree;

pub use build::build_layout_tree;
pub use compute::compute_layout;
pub use tree::{LayoutNode, LayoutNodeId, LayoutTree, Rect};
