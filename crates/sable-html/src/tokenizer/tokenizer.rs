//! The HTML tokenizer.
//!
//! A byte-level scanner over a UTF-8 string. All delimiters it looks for
//! (`<`, `>`, `/`, quotes, whitespace) are ASCII, so byte positions always
//! land on character boundaries and slices stay valid UTF-8.
//!
//! The tokenizer is total: unterminated comments and strings swallow to end
//! of input and emit what was accumulated, and malformed tags degrade to
//! best-effort tokens.

use super::token::{Attribute, HtmlToken};

/// Streaming HTML tokenizer.
pub struct HtmlTokenizer {
    input: String,
    pos: usize,
}

impl HtmlTokenizer {
    /// Create a tokenizer over the given input.
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            pos: 0,
        }
    }

    /// Emit the next token. Returns [`HtmlToken::EndOfFile`] at end of
    /// input, forever after.
    pub fn next_token(&mut self) -> HtmlToken {
        if self.pos >= self.input.len() {
            return HtmlToken::EndOfFile;
        }

        if self.peek() == Some(b'<') {
            return self.tag();
        }

        self.text()
    }

    /// Collect all tokens up to and including the EOF token.
    #[must_use]
    pub fn tokenize(mut self) -> Vec<HtmlToken> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            let is_eof = token.is_eof();
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        tokens
    }

    fn bytes(&self) -> &[u8] {
        self.input.as_bytes()
    }

    fn peek(&self) -> Option<u8> {
        self.bytes().get(self.pos).copied()
    }

    fn advance(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.pos += 1;
        Some(b)
    }

    /// True when the remaining input starts with the given ASCII prefix.
    fn starts_with(&self, prefix: &[u8]) -> bool {
        self.bytes()[self.pos..].starts_with(prefix)
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(|b| b.is_ascii_whitespace()) {
            self.pos += 1;
        }
    }

    /// A run of non-`<` bytes, emitted verbatim.
    fn text(&mut self) -> HtmlToken {
        let start = self.pos;
        while self.pos < self.input.len() && self.peek() != Some(b'<') {
            self.pos += 1;
        }
        HtmlToken::Text(self.input[start..self.pos].to_string())
    }

    /// Dispatch on the byte(s) after `<`.
    fn tag(&mut self) -> HtmlToken {
        let _ = self.advance(); // consume '<'

        // Comment: <!-- ... -->
        if self.starts_with(b"!--") {
            self.pos += 3;
            return self.comment();
        }

        // Doctype: <!DOCTYPE ...>
        if self.starts_with(b"!DOCTYPE") || self.starts_with(b"!doctype") {
            self.pos += 8;
            return self.doctype();
        }

        // End tag: </...>
        if self.peek() == Some(b'/') {
            let _ = self.advance();
            return self.end_tag();
        }

        self.start_tag()
    }

    fn comment(&mut self) -> HtmlToken {
        let start = self.pos;
        while self.pos < self.input.len() {
            if self.starts_with(b"-->") {
                let content = self.input[start..self.pos].to_string();
                self.pos += 3;
                return HtmlToken::Comment(content);
            }
            self.pos += 1;
        }
        // Unclosed comment swallows to end of input
        HtmlToken::Comment(self.input[start..].to_string())
    }

    fn doctype(&mut self) -> HtmlToken {
        self.skip_whitespace();
        let start = self.pos;
        while self.pos < self.input.len() && self.peek() != Some(b'>') {
            self.pos += 1;
        }
        let content = self.input[start..self.pos].trim().to_string();
        if self.peek() == Some(b'>') {
            let _ = self.advance();
        }
        HtmlToken::Doctype(content)
    }

    fn end_tag(&mut self) -> HtmlToken {
        self.skip_whitespace();
        let name = self.tag_name();
        self.skip_whitespace();
        if self.peek() == Some(b'>') {
            let _ = self.advance();
        }
        HtmlToken::EndTag { name }
    }

    fn start_tag(&mut self) -> HtmlToken {
        self.skip_whitespace();
        let name = self.tag_name();
        let attributes = self.attributes();

        self.skip_whitespace();

        // Self-closing: a '/' before the closing '>'
        if self.peek() == Some(b'/') {
            let _ = self.advance();
            self.skip_whitespace();
            if self.peek() == Some(b'>') {
                let _ = self.advance();
            }
            return HtmlToken::SelfClosingTag { name, attributes };
        }

        if self.peek() == Some(b'>') {
            let _ = self.advance();
        }

        HtmlToken::StartTag { name, attributes }
    }

    /// Longest run of letters/digits/`-`/`_`, lowercased.
    fn tag_name(&mut self) -> String {
        let start = self.pos;
        while self
            .peek()
            .is_some_and(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
        {
            self.pos += 1;
        }
        self.input[start..self.pos].to_ascii_lowercase()
    }

    fn attributes(&mut self) -> Vec<Attribute> {
        let mut attrs = Vec::new();

        loop {
            self.skip_whitespace();
            match self.peek() {
                None | Some(b'>') | Some(b'/') => break,
                Some(_) => {}
            }

            match self.attribute() {
                Some(attr) => attrs.push(attr),
                // Not an attribute-name byte; drop it so the scan advances
                None => {
                    let _ = self.advance();
                }
            }
        }

        attrs
    }

    fn attribute(&mut self) -> Option<Attribute> {
        // Attribute names additionally allow ':' (e.g. xml:lang)
        let start = self.pos;
        while self.peek().is_some_and(|b| {
            b.is_ascii_alphanumeric() || b == b'-' || b == b'_' || b == b':'
        }) {
            self.pos += 1;
        }
        let name = self.input[start..self.pos].to_ascii_lowercase();

        if name.is_empty() {
            return None;
        }

        self.skip_whitespace();

        // Missing '=' yields an empty value
        if self.peek() != Some(b'=') {
            return Some(Attribute::new(name, String::new()));
        }
        let _ = self.advance();

        self.skip_whitespace();

        let value = self.attribute_value();
        Some(Attribute::new(name, value))
    }

    fn attribute_value(&mut self) -> String {
        if let Some(quote) = self.peek()
            && (quote == b'"' || quote == b'\'')
        {
            let _ = self.advance();
            let start = self.pos;
            while self.pos < self.input.len() && self.peek() != Some(quote) {
                self.pos += 1;
            }
            let value = self.input[start..self.pos].to_string();
            if self.peek() == Some(quote) {
                let _ = self.advance();
            }
            return value;
        }

        // Unquoted value: up to whitespace, '>' or '/'
        let start = self.pos;
        while let Some(b) = self.peek() {
            if b.is_ascii_whitespace() || b == b'>' || b == b'/' {
                break;
            }
            self.pos += 1;
        }
        self.input[start..self.pos].to_string()
    }
}
