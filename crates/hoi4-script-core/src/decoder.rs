//! HOI4 script decoder — turns a token stream into a [`Value`] tree.
//!
//! The format reuses `{ ... }` for two different things:
//!
//! - key/value blocks: `stats = { speed = 4 armor = 10.5 }`
//! - bare word lists: `categories = { category_tank category_light }`
//!
//! Nothing in the syntax says which one a block is, so each block is read as a
//! map of keys to (possibly absent) values and resolved when it closes: if no
//! key ended up with a value the block is a [`Value::Sequence`] of its keys,
//! otherwise a [`Value::Mapping`] with absent values kept as [`Value::Null`].
//!
//! # Key design decisions
//!
//! - **One shared cursor**: nested blocks are read by calling `resolve_block`
//!   again on the same `Resolver`, so every level advances the same token
//!   iterator. Nesting depth lives on the call stack and is capped by
//!   [`ParseOptions::max_depth`].
//! - **Present-value count**: each block keeps a running count of keys whose
//!   current value is not absent. Overwriting a key adjusts the count, so
//!   `a = 1 a` still resolves to a sequence.
//! - **Lenient ends**: running out of input closes every open block. A key
//!   still waiting for its value is recorded as absent.

use crate::coerce::parse_scalar;
use crate::error::{Result, ScriptError};
use crate::tokenizer::{Token, TokenKind, Tokens};
use crate::types::{Mapping, Value};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Default cap on block nesting.
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Knobs for the decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Deepest allowed block nesting. The document itself is depth 0.
    pub max_depth: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ParseOptions {
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

/// Decode script text held in memory.
pub fn decode(input: &str) -> Result<Value> {
    decode_with(input, &ParseOptions::default())
}

pub fn decode_with(input: &str, options: &ParseOptions) -> Result<Value> {
    decode_reader_with(input.as_bytes(), options)
}

/// Decode script text from any buffered reader.
pub fn decode_reader<R: BufRead>(reader: R) -> Result<Value> {
    decode_reader_with(reader, &ParseOptions::default())
}

pub fn decode_reader_with<R: BufRead>(reader: R, options: &ParseOptions) -> Result<Value> {
    Resolver::new(Tokens::new(reader), options).resolve()
}

/// Decode one script file. Errors are tagged with the file's path.
pub fn decode_file(path: impl AsRef<Path>) -> Result<Value> {
    decode_file_with(path, &ParseOptions::default())
}

pub fn decode_file_with(path: impl AsRef<Path>, options: &ParseOptions) -> Result<Value> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| ScriptError::from(e).in_file(path))?;
    decode_reader_with(BufReader::new(file), options).map_err(|e| e.in_file(path))
}

/// Where a block is in its key/value cycle.
enum State {
    SeekingKey,
    HaveKey(String),
    AwaitingValue(String),
}

/// Entries of one block plus how many of them currently hold a value.
#[derive(Default)]
struct Block {
    entries: Mapping,
    present: usize,
}

impl Block {
    fn bind(&mut self, key: String, value: Value) {
        let now_present = !value.is_null();
        let was_present = self
            .entries
            .insert(key, value)
            .is_some_and(|old| !old.is_null());
        match (was_present, now_present) {
            (false, true) => self.present += 1,
            (true, false) => self.present -= 1,
            _ => {}
        }
    }

    fn bind_absent(&mut self, key: String) {
        self.bind(key, Value::Null);
    }

    fn finish(self) -> Value {
        if self.present == 0 {
            Value::Sequence(self.entries.into_keys())
        } else {
            Value::Mapping(self.entries)
        }
    }
}

/// Recursive-descent reader over a token stream.
///
/// Every nesting level shares `tokens`, so a nested call picks up exactly
/// where its parent stopped and hands the position back when it returns.
pub struct Resolver<I> {
    tokens: I,
    depth: usize,
    max_depth: usize,
}

impl<I> Resolver<I>
where
    I: Iterator<Item = Result<Token>>,
{
    pub fn new(tokens: I, options: &ParseOptions) -> Self {
        Self {
            tokens,
            depth: 0,
            max_depth: options.max_depth,
        }
    }

    /// Read the whole document as one top-level block.
    pub fn resolve(mut self) -> Result<Value> {
        let value = self.resolve_block()?;
        if let Some(next) = self.tokens.next() {
            let token = next?;
            tracing::warn!(
                line = token.line,
                token = %token.text,
                "unmatched '}}' closed the document; remaining input ignored"
            );
        }
        Ok(value)
    }

    fn next_token(&mut self) -> Result<Option<Token>> {
        self.tokens.next().transpose()
    }

    fn resolve_block(&mut self) -> Result<Value> {
        let mut block = Block::default();
        let mut state = State::SeekingKey;

        while let Some(token) = self.next_token()? {
            state = match (state, token.kind()) {
                (State::SeekingKey, TokenKind::Close) => return Ok(block.finish()),
                (State::SeekingKey, TokenKind::Equals | TokenKind::Open) => {
                    return Err(malformed_key(token));
                }
                (State::SeekingKey, TokenKind::Word) => State::HaveKey(token.text),

                (State::HaveKey(key), TokenKind::Open) => {
                    let nested = self.nested_block(&token)?;
                    block.bind(key, nested);
                    State::SeekingKey
                }
                (State::HaveKey(key), TokenKind::Equals) => State::AwaitingValue(key),
                (State::HaveKey(key), TokenKind::Close) => {
                    block.bind_absent(key);
                    return Ok(block.finish());
                }
                (State::HaveKey(key), TokenKind::Word) => {
                    block.bind_absent(key);
                    State::HaveKey(token.text)
                }

                (State::AwaitingValue(_), TokenKind::Equals | TokenKind::Close) => {
                    return Err(malformed_value(token));
                }
                (State::AwaitingValue(key), TokenKind::Open) => {
                    let nested = self.nested_block(&token)?;
                    block.bind(key, nested);
                    State::SeekingKey
                }
                (State::AwaitingValue(key), TokenKind::Word) => {
                    block.bind(key, parse_scalar(&token.text));
                    State::SeekingKey
                }
            };
        }

        // Input ended inside this block.
        match state {
            State::SeekingKey => {}
            State::HaveKey(key) | State::AwaitingValue(key) => block.bind_absent(key),
        }
        Ok(block.finish())
    }

    fn nested_block(&mut self, open: &Token) -> Result<Value> {
        if self.depth >= self.max_depth {
            return Err(ScriptError::NestingTooDeep {
                limit: self.max_depth,
                line: open.line,
                line_text: open.line_text().to_string(),
            });
        }
        self.depth += 1;
        let value = self.resolve_block();
        self.depth -= 1;
        value
    }
}

fn malformed_key(token: Token) -> ScriptError {
    ScriptError::MalformedKey {
        line: token.line,
        line_text: token.line_text().to_string(),
        token: token.text,
    }
}

fn malformed_value(token: Token) -> ScriptError {
    ScriptError::MalformedValue {
        line: token.line,
        line_text: token.line_text().to_string(),
        token: token.text,
    }
}
