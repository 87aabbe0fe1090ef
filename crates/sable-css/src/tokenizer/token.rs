//! CSS token types.
//!
//! A deliberately small token set: what selectors, declarations and the
//! supported value grammar need, nothing more. Numeric tokens keep their
//! source digit string so declaration value strings and stylesheet dumps
//! round-trip exactly.

use core::fmt;

/// A CSS token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CssToken {
    /// An identifier: property name, tag selector, keyword value.
    Ident(String),
    /// `#ident`, with the leading `#` stripped.
    Hash(String),
    /// `.`
    Dot,
    /// `:`
    Colon,
    /// `;`
    Semicolon,
    /// `,`
    Comma,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `)`
    RParen,
    /// A unitless number, e.g. `123` or `12.5`. The source digits are kept
    /// verbatim.
    Number(String),
    /// A number with a unit, e.g. `10px`.
    Dimension {
        /// The numeric part, source digits verbatim.
        value: String,
        /// The unit identifier.
        unit: String,
    },
    /// A number followed by `%`. The value excludes the sign character.
    Percentage(String),
    /// A quoted string, quotes stripped.
    String(String),
    /// An identifier immediately followed by `(`, e.g. `rgb(`.
    Function(String),
    /// End of input.
    Eof,
}

impl CssToken {
    /// Returns true if this is the EOF token.
    #[must_use]
    pub const fn is_eof(&self) -> bool {
        matches!(self, Self::Eof)
    }

    /// The token's contribution to a declaration's textual value string.
    ///
    /// Dimensions append their unit; hashes and percentages contribute
    /// their bare value. Declaration values are these pieces joined with
    /// single spaces.
    #[must_use]
    pub fn value_text(&self) -> String {
        match self {
            Self::Ident(v) | Self::Hash(v) | Self::Number(v) | Self::Percentage(v)
            | Self::String(v) | Self::Function(v) => v.clone(),
            Self::Dimension { value, unit } => format!("{value}{unit}"),
            Self::Dot => ".".to_string(),
            Self::Colon => ":".to_string(),
            Self::Semicolon => ";".to_string(),
            Self::Comma => ",".to_string(),
            Self::LBrace => "{".to_string(),
            Self::RBrace => "}".to_string(),
            Self::RParen => ")".to_string(),
            Self::Eof => String::new(),
        }
    }
}

impl fmt::Display for CssToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ident(v) => write!(f, "<ident:{v}>"),
            Self::Hash(v) => write!(f, "<hash:#{v}>"),
            Self::Dot => write!(f, "<dot>"),
            Self::Colon => write!(f, "<colon>"),
            Self::Semicolon => write!(f, "<semicolon>"),
            Self::Comma => write!(f, "<comma>"),
            Self::LBrace => write!(f, "<{{>"),
            Self::RBrace => write!(f, "<}}>"),
            Self::RParen => write!(f, "<)>"),
            Self::Number(v) => write!(f, "<number:{v}>"),
            Self::Dimension { value, unit } => write!(f, "<dimension:{value}{unit}>"),
            Self::Percentage(v) => write!(f, "<percentage:{v}%>"),
            Self::String(v) => write!(f, "<string:\"{v}\">"),
            Self::Function(v) => write!(f, "<function:{v}(>"),
            Self::Eof => write!(f, "<EOF>"),
        }
    }
}
