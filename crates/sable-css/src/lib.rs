//! CSS front end, style computation, block layout and painting for the
//! sable engine.
//!
//! # Scope
//!
//! This crate implements:
//! - **CSS Tokenizer** - a small, total scanner producing idents, hashes,
//!   numbers with units, strings, functions and punctuation
//! - **CSS Parser** - rules as selector lists plus declaration lists, with
//!   skip-based error recovery
//! - **Style engine** - per-element computed styles: defaults, `color` and
//!   `font-size` inheritance, and document-order rule application
//! - **Layout** - a layout-tree arena rooted at `<body>` and block-flow
//!   geometry computation
//! - **Paint** - display-list generation from the laid-out tree
//!
//! # Not implemented
//!
//! - Specificity; matching is selector-level only
//! - Non-pixel units (all lengths are treated as px)
//! - Inline, float, grid and flex layout (`display: flex` parses but lays
//!   out as block)

pub mod layout;
pub mod paint;
pub mod parser;
pub mod style;
pub mod tokenizer;

pub use layout::{LayoutNode, LayoutNodeId, LayoutTree, Rect, build_layout_tree, compute_layout};
pub use paint::{PaintList, PaintOp, paint, paint_background};
pub use parser::{CssParser, Declaration, Rule, Selector, Stylesheet, parse_css};
pub use style::{
    AlignItems, Color, ComputedStyle, DisplayValue, Edges, JustifyContent, apply_declaration,
    compute_style,
};
pub use tokenizer::{CssToken, CssTokenizer};
