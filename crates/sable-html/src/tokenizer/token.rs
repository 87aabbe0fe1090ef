//! HTML token types.

use strum_macros::Display;

/// An attribute on a start or self-closing tag token.
///
/// Names are lowercased by the tokenizer; an attribute written without
/// `=value` carries an empty value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    /// The attribute name, lowercased.
    pub name: String,
    /// The attribute value. Empty when the source had no `=`.
    pub value: String,
}

impl Attribute {
    /// Create a new attribute with the given name and value.
    #[must_use]
    pub const fn new(name: String, value: String) -> Self {
        Self { name, value }
    }
}

/// The tokens the tokenizer emits to the tree-construction stage.
///
/// Tag and attribute names are lowercased on emit. Text is passed through
/// verbatim (no entity decoding); trimming happens in the parser.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum HtmlToken {
    /// `<!DOCTYPE …>` with the trimmed interior.
    Doctype(String),

    /// An opening tag with its attribute list.
    StartTag {
        /// The tag name, lowercased.
        name: String,
        /// The attributes in source order.
        attributes: Vec<Attribute>,
    },

    /// A closing tag.
    EndTag {
        /// The tag name, lowercased.
        name: String,
    },

    /// A tag closed with `/>`.
    SelfClosingTag {
        /// The tag name, lowercased.
        name: String,
        /// The attributes in source order.
        attributes: Vec<Attribute>,
    },

    /// A run of non-`<` bytes between tags, verbatim.
    Text(String),

    /// `<!-- … -->` with the interior. Unterminated comments swallow to
    /// end of input.
    Comment(String),

    /// End of input.
    EndOfFile,
}

impl HtmlToken {
    /// Returns true if this is the end-of-file token.
    #[must_use]
    pub const fn is_eof(&self) -> bool {
        matches!(self, Self::EndOfFile)
    }
}
