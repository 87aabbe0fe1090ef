//! CSS rule parsing.

#[allow(clippy::module_inception)]
mod parser;

pub use parser::{CssParser, Declaration, Rule, Selector, Stylesheet, parse_css};
