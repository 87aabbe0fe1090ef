//! The CSS tokenizer.
//!
//! A byte-level scanner. Whitespace and `/* … */` comments are skipped
//! between tokens; any byte that starts no token is dropped with a single
//! advance. The tokenizer is total and never fails.

use super::token::CssToken;

/// Streaming CSS tokenizer.
pub struct CssTokenizer {
    input: String,
    pos: usize,
}

impl CssTokenizer {
    /// Create a tokenizer over the given input.
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            pos: 0,
        }
    }

    /// Emit the next token. Returns [`CssToken::Eof`] at end of input,
    /// forever after.
    pub fn next_token(&mut self) -> CssToken {
        loop {
            self.skip_whitespace_and_comments();

            let Some(b) = self.peek() else {
                return CssToken::Eof;
            };

            match b {
                b'{' => {
                    self.pos += 1;
                    return CssToken::LBrace;
                }
                b'}' => {
                    self.pos += 1;
                    return CssToken::RBrace;
                }
                b':' => {
                    self.pos += 1;
                    return CssToken::Colon;
                }
                b';' => {
                    self.pos += 1;
                    return CssToken::Semicolon;
                }
                b',' => {
                    self.pos += 1;
                    return CssToken::Comma;
                }
                b'.' => {
                    self.pos += 1;
                    return CssToken::Dot;
                }
                b')' => {
                    self.pos += 1;
                    return CssToken::RParen;
                }
                b'#' => return self.hash(),
                b'"' | b'\'' => return self.string(),
                _ => {}
            }

            if b == b'-' || b.is_ascii_digit() {
                return self.number();
            }

            if is_ident_start(b) {
                return self.ident();
            }

            // Unrecognised byte: drop it and keep scanning
            self.pos += 1;
        }
    }

    /// Collect all tokens up to and including the EOF token.
    #[must_use]
    pub fn tokenize(mut self) -> Vec<CssToken> {
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

    fn peek(&self) -> Option<u8> {
        self.input.as_bytes().get(self.pos).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<u8> {
        self.input.as_bytes().get(self.pos + offset).copied()
    }

    fn skip_whitespace_and_comments(&mut self) {
        loop {
            match self.peek() {
                Some(b) if b.is_ascii_whitespace() => self.pos += 1,
                Some(b'/') if self.peek_at(1) == Some(b'*') => {
                    self.pos += 2;
                    // Unterminated comments swallow to end of input
                    while self.pos < self.input.len() {
                        if self.peek() == Some(b'*') && self.peek_at(1) == Some(b'/') {
                            self.pos += 2;
                            break;
                        }
                        self.pos += 1;
                    }
                }
                _ => break,
            }
        }
    }

    fn hash(&mut self) -> CssToken {
        self.pos += 1; // consume '#'
        let start = self.pos;
        while self.peek().is_some_and(is_ident_char) {
            self.pos += 1;
        }
        CssToken::Hash(self.input[start..self.pos].to_string())
    }

    fn string(&mut self) -> CssToken {
        let quote = self.peek().unwrap_or(b'"');
        self.pos += 1;
        let start = self.pos;
        while self.pos < self.input.len() && self.peek() != Some(quote) {
            self.pos += 1;
        }
        let value = self.input[start..self.pos].to_string();
        if self.peek() == Some(quote) {
            self.pos += 1;
        }
        CssToken::String(value)
    }

    fn number(&mut self) -> CssToken {
        let start = self.pos;

        // Leading '-' is consumed as sign
        if self.peek() == Some(b'-') {
            self.pos += 1;
        }

        while self.peek().is_some_and(|b| b.is_ascii_digit()) {
            self.pos += 1;
        }

        // Fractional part only when a digit follows the dot
        if self.peek() == Some(b'.') && self.peek_at(1).is_some_and(|b| b.is_ascii_digit()) {
            self.pos += 1;
            while self.peek().is_some_and(|b| b.is_ascii_digit()) {
                self.pos += 1;
            }
        }

        let value = self.input[start..self.pos].to_string();

        if self.peek() == Some(b'%') {
            self.pos += 1;
            return CssToken::Percentage(value);
        }

        if self.peek().is_some_and(is_ident_start) {
            let unit_start = self.pos;
            while self.peek().is_some_and(is_ident_char) {
                self.pos += 1;
            }
            let unit = self.input[unit_start..self.pos].to_string();
            return CssToken::Dimension { value, unit };
        }

        CssToken::Number(value)
    }

    fn ident(&mut self) -> CssToken {
        let start = self.pos;
        while self.peek().is_some_and(is_ident_char) {
            self.pos += 1;
        }
        let value = self.input[start..self.pos].to_string();

        // An ident immediately followed by '(' is a function token
        if self.peek() == Some(b'(') {
            self.pos += 1;
            return CssToken::Function(value);
        }

        CssToken::Ident(value)
    }
}

fn is_ident_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_' || b == b'-'
}

fn is_ident_char(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'-'
}
