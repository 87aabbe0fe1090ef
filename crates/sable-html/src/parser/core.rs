//! Streaming, stack-based HTML tree construction.
//!
//! The parser maintains a stack of currently-open element ids. It performs
//! a deliberately small subset of HTML5 tree construction: when head- or
//! body-content arrives before its section exists, the missing `<html>`,
//! `<head>` and `<body>` elements are synthesized. The content sets are
//! closed lists, not the full standard's categories.
//!
//! The parser is total: unmatched end tags are ignored, orphan text is
//! dropped, and comments and doctypes are not retained in the tree.

use sable_dom::{DomArena, NodeId};

use crate::tokenizer::{Attribute, HtmlToken, HtmlTokenizer};

/// Tags that belong in `<head>` and trigger head synthesis when neither
/// `<head>` nor `<body>` is open.
const HEAD_CONTENT_TAGS: &[&str] = &["title", "meta", "link", "style", "script", "base"];

/// Common flow elements that trigger body synthesis when `<body>` is not
/// open. A closed list: `html`, `head` and `body` themselves are
/// deliberately absent so explicit markup parses without synthesis.
const BODY_CONTENT_TAGS: &[&str] = &[
    "div", "p", "span", "a", "h1", "h2", "h3", "h4", "h5", "h6", "ul", "ol", "li", "table",
    "thead", "tbody", "tr", "td", "th", "img", "br", "hr", "form", "input", "button", "select",
    "option", "textarea", "label", "section", "article", "header", "footer", "nav", "main",
    "aside", "pre", "blockquote", "strong", "em", "b", "i", "u", "small", "code", "figure",
    "figcaption", "video", "audio", "canvas", "iframe",
];

/// Void elements never take a closing tag and are never pushed onto the
/// open-elements stack.
const VOID_TAGS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param",
    "source", "track", "wbr",
];

/// Parse an HTML string into a DOM arena.
///
/// Never fails; empty input produces an arena with no root.
#[must_use]
pub fn parse_html(input: &str) -> DomArena {
    let mut parser = HtmlParser::new();
    let mut tokenizer = HtmlTokenizer::new(input);
    loop {
        let token = tokenizer.next_token();
        if token.is_eof() {
            break;
        }
        parser.process_token(token);
    }
    parser.finish()
}

/// Streaming tree builder over the token stream.
pub struct HtmlParser {
    arena: DomArena,
    /// Currently-open element ids, innermost last.
    stack: Vec<NodeId>,
}

impl Default for HtmlParser {
    fn default() -> Self {
        Self::new()
    }
}

impl HtmlParser {
    /// Create a parser with an empty tree.
    #[must_use]
    pub fn new() -> Self {
        Self {
            arena: DomArena::new(),
            stack: Vec::new(),
        }
    }

    /// Consume the parser and return the built arena.
    #[must_use]
    pub fn finish(self) -> DomArena {
        self.arena
    }

    /// Feed one token into tree construction.
    pub fn process_token(&mut self, token: HtmlToken) {
        match token {
            HtmlToken::StartTag { name, attributes } => {
                self.insert_element(&name, attributes, false);
            }
            HtmlToken::SelfClosingTag { name, attributes } => {
                self.insert_element(&name, attributes, true);
            }
            HtmlToken::EndTag { name } => self.handle_end_tag(&name),
            HtmlToken::Text(text) => self.handle_text(&text),
            // Comments and doctypes are not retained in the tree
            HtmlToken::Doctype(_) | HtmlToken::Comment(_) | HtmlToken::EndOfFile => {}
        }
    }

    /// True when an element with the given tag is on the open stack.
    fn is_open(&self, tag: &str) -> bool {
        self.stack
            .iter()
            .any(|&id| self.arena.as_element(id).is_some_and(|e| e.tag_name == tag))
    }

    /// Synthesize an `<html>` root when the tree is still empty.
    fn ensure_html_root(&mut self) {
        if self.arena.root().is_none() {
            let html = self.arena.create_element("html");
            self.arena.set_root(html);
            self.stack.push(html);
        }
    }

    /// Pop the stack through the topmost element with the given tag.
    fn pop_through(&mut self, tag: &str) {
        if let Some(pos) = self
            .stack
            .iter()
            .rposition(|&id| self.arena.as_element(id).is_some_and(|e| e.tag_name == tag))
        {
            self.stack.truncate(pos);
        }
    }

    /// Create a synthetic element under the current stack top and open it.
    /// Does nothing when there is no open parent to attach to.
    fn open_synthetic(&mut self, tag: &str) {
        let Some(&top) = self.stack.last() else {
            return;
        };
        let id = self.arena.create_element(tag);
        self.arena.append_child(top, id);
        self.stack.push(id);
    }

    fn insert_element(&mut self, name: &str, attributes: Vec<Attribute>, self_closing: bool) {
        // Head/body synthesis for content arriving before its section
        if HEAD_CONTENT_TAGS.contains(&name) && !self.is_open("head") && !self.is_open("body") {
            self.ensure_html_root();
            self.open_synthetic("head");
        } else if BODY_CONTENT_TAGS.contains(&name) && !self.is_open("body") {
            self.ensure_html_root();
            if self.is_open("head") {
                self.pop_through("head");
            }
            self.open_synthetic("body");
        }

        let parent = self.stack.last().copied();
        if parent.is_none() && self.arena.root().is_some() {
            // No open parent and the tree already has a root: nowhere to
            // attach, so the element is dropped
            return;
        }

        let id = self.arena.create_element(name);
        for Attribute { name, value } in attributes {
            self.arena.set_attribute(id, name, value);
        }

        match parent {
            Some(top) => self.arena.append_child(top, id),
            None => self.arena.set_root(id),
        }

        if !self_closing && !VOID_TAGS.contains(&name) {
            self.stack.push(id);
        }
    }

    /// Scan the stack top-down for a matching tag and pop through it.
    /// Unmatched end tags are ignored.
    fn handle_end_tag(&mut self, name: &str) {
        self.pop_through(name);
    }

    /// Trim, drop if empty, and attach to the current stack top. Orphan
    /// text has no parent and is dropped.
    fn handle_text(&mut self, text: &str) {
        let trimmed = text.trim_matches(|c: char| c.is_ascii_whitespace());
        if trimmed.is_empty() {
            return;
        }
        if let Some(&top) = self.stack.last() {
            let id = self.arena.create_text(trimmed);
            self.arena.append_child(top, id);
        }
    }
}
