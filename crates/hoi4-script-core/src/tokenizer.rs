//! Line-oriented tokenizer for HOI4 script text.
//!
//! Each line is cut at the first `#` (comment), then split on runs of
//! whitespace. There is no quoting: `"Light Tank"` becomes the two tokens
//! `"Light` and `Tank"`. Braces and `=` are only recognised when they stand
//! alone between whitespace.

use crate::error::Result;
use std::io::{BufRead, Cursor, Lines};
use std::sync::Arc;

/// One whitespace-separated piece of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    /// 1-based line number.
    pub line: usize,
    line_text: Arc<str>,
}

/// Structural role of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Open,
    Close,
    Equals,
    Word,
}

impl Token {
    pub fn new(text: impl Into<String>, line: usize, line_text: impl Into<Arc<str>>) -> Self {
        Self {
            text: text.into(),
            line,
            line_text: line_text.into(),
        }
    }

    /// The full source line the token came from, comment included.
    pub fn line_text(&self) -> &str {
        &self.line_text
    }

    pub fn kind(&self) -> TokenKind {
        match self.text.as_str() {
            "{" => TokenKind::Open,
            "}" => TokenKind::Close,
            "=" => TokenKind::Equals,
            _ => TokenKind::Word,
        }
    }
}

/// Lazy token stream over a buffered reader.
///
/// Lines are read one at a time; a read error is yielded once and ends the
/// stream.
pub struct Tokens<R> {
    lines: Lines<R>,
    line: usize,
    pending: std::vec::IntoIter<Token>,
    failed: bool,
}

impl<R: BufRead> Tokens<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line: 0,
            pending: Vec::new().into_iter(),
            failed: false,
        }
    }
}

impl<R: BufRead> Iterator for Tokens<R> {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(token) = self.pending.next() {
                return Some(Ok(token));
            }
            if self.failed {
                return None;
            }
            match self.lines.next()? {
                Ok(text) => {
                    self.line += 1;
                    self.pending = split_line(&text, self.line).into_iter();
                }
                Err(e) => {
                    self.failed = true;
                    return Some(Err(e.into()));
                }
            }
        }
    }
}

/// Tokenize an in-memory string.
pub fn tokenize(input: &str) -> Tokens<Cursor<&[u8]>> {
    Tokens::new(Cursor::new(input.as_bytes()))
}

fn split_line(text: &str, line: usize) -> Vec<Token> {
    let code = match text.find('#') {
        Some(pos) => &text[..pos],
        None => text,
    };
    let mut words = code.split_whitespace().peekable();
    if words.peek().is_none() {
        return Vec::new();
    }
    let shared: Arc<str> = Arc::from(text);
    words
        .map(|word| Token::new(word, line, Arc::clone(&shared)))
        .collect()
}
