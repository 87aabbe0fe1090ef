//! HTML tokenization: byte stream in, token stream out.

mod token;
#[allow(clippy::module_inception)]
mod tokenizer;

pub use token::{Attribute, HtmlToken};
pub use tokenizer::HtmlTokenizer;
