//! HTML tree construction.

mod core;

pub use core::{HtmlParser, parse_html};
