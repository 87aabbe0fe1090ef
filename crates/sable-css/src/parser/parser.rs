//! The CSS parser: token stream in, stylesheet out.
//!
//! A stylesheet is an ordered list of rules; each rule is a comma-separated
//! selector list followed by a `{ … }` declaration block. Recovery is
//! skip-based: a rule missing its `{` skips ahead to the next one, and a
//! malformed declaration is dropped without poisoning the surrounding rule.
//! The parser is total and never fails.

use core::fmt;

use crate::tokenizer::{CssToken, CssTokenizer};

/// A simple selector. Matching is selector-level only: no combinators,
/// no compounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// Matches elements by tag name, e.g. `p`.
    Tag(String),
    /// Matches the element's whole `class` attribute string, e.g. `.note`.
    Class(String),
    /// Matches the element's `id` attribute, e.g. `#main`.
    Id(String),
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tag(name) => write!(f, "{name}"),
            Self::Class(name) => write!(f, ".{name}"),
            Self::Id(name) => write!(f, "#{name}"),
        }
    }
}

/// A single `property: value` declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    /// The property name, lowercased.
    pub property: String,
    /// The textual value: token texts joined with single spaces.
    pub value: String,
    /// The original value tokens, for property-specific parsing.
    pub tokens: Vec<CssToken>,
}

/// A style rule: a non-empty selector list plus its declarations.
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    /// The comma-separated selectors this rule applies to.
    pub selectors: Vec<Selector>,
    /// The declarations in source order.
    pub declarations: Vec<Declaration>,
}

/// An ordered list of style rules.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Stylesheet {
    /// The rules in document order.
    pub rules: Vec<Rule>,
}

impl Stylesheet {
    /// Create an empty stylesheet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// True when the sheet holds no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Append another sheet's rules, preserving order.
    pub fn extend(&mut self, other: Stylesheet) {
        self.rules.extend(other.rules);
    }

    /// Serialise the sheet back to CSS text.
    ///
    /// Re-parsing the output yields a sheet whose rules match the original
    /// in selectors and in each declaration's property and value string.
    #[must_use]
    pub fn dump(&self) -> String {
        let mut out = String::new();
        for rule in &self.rules {
            for (i, selector) in rule.selectors.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                out.push_str(&selector.to_string());
            }
            out.push_str(" {\n");
            for decl in &rule.declarations {
                out.push_str("  ");
                out.push_str(&decl.property);
                out.push_str(": ");
                out.push_str(&decl.value);
                out.push_str(";\n");
            }
            out.push_str("}\n");
        }
        out
    }
}

/// Parse CSS text into a stylesheet. Never fails; malformed pieces are
/// skipped.
#[must_use]
pub fn parse_css(input: &str) -> Stylesheet {
    let tokens = CssTokenizer::new(input).tokenize();
    CssParser::new(tokens).parse_stylesheet()
}

static EOF_TOKEN: CssToken = CssToken::Eof;

/// Rule parser over a token list.
pub struct CssParser {
    tokens: Vec<CssToken>,
    position: usize,
}

impl CssParser {
    /// Create a parser over the given tokens.
    #[must_use]
    pub fn new(tokens: Vec<CssToken>) -> Self {
        Self {
            tokens,
            position: 0,
        }
    }

    /// Parse rules until EOF.
    pub fn parse_stylesheet(&mut self) -> Stylesheet {
        let mut rules = Vec::new();
        while !self.peek().is_eof() {
            let rule = self.rule();
            // Rules without selectors are parse debris, not kept
            if !rule.selectors.is_empty() {
                rules.push(rule);
            }
        }
        Stylesheet { rules }
    }

    fn peek(&self) -> &CssToken {
        self.tokens.get(self.position).unwrap_or(&EOF_TOKEN)
    }

    fn advance(&mut self) {
        if self.position < self.tokens.len() {
            self.position += 1;
        }
    }

    fn rule(&mut self) -> Rule {
        let selectors = self.selectors();

        // Recovery: skip ahead to the block when the '{' is missing
        while !matches!(self.peek(), CssToken::LBrace | CssToken::Eof) {
            self.advance();
        }
        if matches!(self.peek(), CssToken::LBrace) {
            self.advance();
        }

        let declarations = self.declarations();

        if matches!(self.peek(), CssToken::RBrace) {
            self.advance();
        }

        Rule {
            selectors,
            declarations,
        }
    }

    fn selectors(&mut self) -> Vec<Selector> {
        let mut selectors = Vec::new();

        loop {
            if let Some(selector) = self.selector() {
                selectors.push(selector);
            }

            if matches!(self.peek(), CssToken::Comma) {
                self.advance();
                continue;
            }
            break;
        }

        selectors
    }

    fn selector(&mut self) -> Option<Selector> {
        match self.peek().clone() {
            CssToken::Ident(name) => {
                self.advance();
                Some(Selector::Tag(name))
            }
            CssToken::Dot => {
                self.advance();
                if let CssToken::Ident(name) = self.peek().clone() {
                    self.advance();
                    return Some(Selector::Class(name));
                }
                None
            }
            CssToken::Hash(name) => {
                self.advance();
                Some(Selector::Id(name))
            }
            _ => None,
        }
    }

    fn declarations(&mut self) -> Vec<Declaration> {
        let mut declarations = Vec::new();

        while !matches!(self.peek(), CssToken::RBrace | CssToken::Eof) {
            if let Some(decl) = self.declaration() {
                declarations.push(decl);
            }
        }

        declarations
    }

    fn declaration(&mut self) -> Option<Declaration> {
        let CssToken::Ident(property) = self.peek().clone() else {
            // Not a property name; drop the token and resynchronise
            self.advance();
            return None;
        };
        self.advance();

        if !matches!(self.peek(), CssToken::Colon) {
            return None;
        }
        self.advance();

        // Collect value tokens until ';', '}' or EOF
        let mut tokens = Vec::new();
        let mut value = String::new();

        while !matches!(
            self.peek(),
            CssToken::Semicolon | CssToken::RBrace | CssToken::Eof
        ) {
            let token = self.peek().clone();
            if !value.is_empty() {
                value.push(' ');
            }
            value.push_str(&token.value_text());
            tokens.push(token);
            self.advance();
        }

        if matches!(self.peek(), CssToken::Semicolon) {
            self.advance();
        }

        Some(Declaration {
            property: property.to_ascii_lowercase(),
            value,
            tokens,
        })
    }
}
