//! HTML tokenization and tree construction for the sable engine.
//!
//! # Scope
//!
//! This crate implements:
//! - **HTML Tokenizer** - a byte-level scanner emitting tag, text, comment
//!   and doctype tokens. It never fails: malformed input degrades to
//!   best-effort tokens.
//! - **HTML Parser** - a streaming, stack-based tree builder with limited
//!   error recovery: missing `<html>`, `<head>` and `<body>` elements are
//!   synthesized for a closed list of head- and body-content tags.
//!
//! # Not implemented
//!
//! - Entity decoding (`&amp;` stays verbatim)
//! - Script/style raw-text tokenizer states
//! - The full tree-construction insertion modes

pub mod parser;
pub mod tokenizer;

pub use parser::{HtmlParser, parse_html};
pub use tokenizer::{Attribute, HtmlToken, HtmlTokenizer};
