//! Recursive descent parser from SNBT text to [`Tag`].
//!
//! The parser is strict about commas: `{a:1,}`, `[,1]` and `[1 2]` are all
//! errors. A token that starts like a number but runs into further unquoted
//! string characters is an unquoted string, so `1x` is the string `"1x"` and
//! `300b`, which does not fit in a byte, is the string `"300b"`.
//!
//! ```
//! # use snbt::Tag;
//! let tag = snbt::parse("[I; 1, 2, 3]").unwrap();
//! assert_eq!(tag, Tag::IntArray(vec![1, 2, 3]));
//!
//! let err = snbt::parse("{a:1,,}").unwrap_err();
//! assert_eq!(err.position(), Some(5));
//! ```

use std::str::FromStr;

use crate::error::{Error, Result};
use crate::input::{is_bare_char, Input};
use crate::tag::{Compound, Tag};

/// Options for parsing SNBT.
#[derive(Debug, Clone)]
pub struct ParseOptions {
    pub(crate) max_depth: usize,
}

impl ParseOptions {
    pub fn new() -> Self {
        Self { max_depth: 512 }
    }

    /// Maximum nesting of compounds and lists. Deeper input is rejected
    /// rather than recursing without bound.
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse SNBT text into a [`Tag`]. Only whitespace may follow the value.
pub fn parse(text: &str) -> Result<Tag> {
    parse_with_opts(text, &ParseOptions::default())
}

pub fn parse_with_opts(text: &str, opts: &ParseOptions) -> Result<Tag> {
    let mut parser = Parser {
        input: Input::new(text),
        max_depth: opts.max_depth,
        depth: 0,
    };
    parser.parse_root()
}

struct Parser<'a> {
    input: Input<'a>,
    max_depth: usize,
    depth: usize,
}

impl<'a> Parser<'a> {
    fn parse_root(&mut self) -> Result<Tag> {
        let tag = self.parse_value()?;
        self.input.discard_whitespace();
        if !self.input.is_eof() {
            return Err(self.input.unexpected());
        }
        Ok(tag)
    }

    fn parse_value(&mut self) -> Result<Tag> {
        self.input.discard_whitespace();

        match self.input.peek() {
            Some(b'{') => {
                self.enter()?;
                let tag = self.parse_compound();
                self.depth -= 1;
                tag
            }
            Some(b'[') => {
                self.enter()?;
                let tag = self.parse_list();
                self.depth -= 1;
                tag
            }
            Some(b'"' | b'\'') => Ok(Tag::String(self.input.scan_quoted()?)),
            Some(_) => self.parse_scalar(),
            None => Err(self.input.unexpected()),
        }
    }

    fn enter(&mut self) -> Result<()> {
        if self.depth >= self.max_depth {
            let pos = self.input.char_offset(self.input.pos());
            return Err(Error::too_deep(self.max_depth, pos));
        }
        self.depth += 1;
        self.input.discard();
        Ok(())
    }

    fn parse_scalar(&mut self) -> Result<Tag> {
        let start = self.input.pos();
        if let Some(number) = self.input.scan_number() {
            let ends_token = !self.input.peek().map_or(false, is_bare_char);
            if ends_token {
                if let Some(tag) = number.to_tag() {
                    return Ok(tag);
                }
            }
            self.input.rewind(start);
        }

        Ok(Tag::String(self.input.scan_bare()?.to_owned()))
    }

    fn parse_key(&mut self) -> Result<String> {
        match self.input.peek() {
            Some(b'"' | b'\'') => self.input.scan_quoted(),
            _ => Ok(self.input.scan_bare()?.to_owned()),
        }
    }

    /// Handle what comes before an element: nothing for the first, a comma
    /// for the rest. Returns true once the closing bracket is consumed.
    fn separator(&mut self, first: bool, close: u8) -> Result<bool> {
        self.input.discard_whitespace();

        match self.input.peek() {
            Some(c) if c == close => {
                self.input.discard();
                Ok(true)
            }
            Some(b',') if !first => {
                self.input.discard();
                self.input.discard_whitespace();
                if self.input.peek() == Some(close) {
                    // No trailing comma before the closer.
                    return Err(self.input.unexpected());
                }
                Ok(false)
            }
            Some(b',') => Err(self.input.unexpected()),
            Some(_) if first => Ok(false),
            _ => Err(self.input.unexpected()),
        }
    }

    fn parse_compound(&mut self) -> Result<Tag> {
        let mut compound = Compound::new();
        let mut first = true;

        loop {
            if self.separator(first, b'}')? {
                return Ok(Tag::Compound(compound));
            }
            first = false;

            let key = self.parse_key()?;
            self.input.discard_whitespace();
            self.input.expect(b':')?;
            self.input.discard_whitespace();

            let value = match self.input.peek() {
                Some(b',' | b'}') => None,
                _ => Some(self.parse_value()?),
            };
            compound.insert_entry(key, value);
        }
    }

    fn parse_list(&mut self) -> Result<Tag> {
        if self.input.peek_at(1) == Some(b';') {
            let array = match self.input.peek() {
                Some(b'B' | b'b') => Some(b'B'),
                Some(b'I' | b'i') => Some(b'I'),
                Some(b'L' | b'l') => Some(b'L'),
                _ => None,
            };
            if let Some(array) = array {
                self.input.advance(2);
                return match array {
                    b'B' => Ok(Tag::ByteArray(self.parse_array(Some(b'b'), "byte")?)),
                    b'I' => Ok(Tag::IntArray(self.parse_array(None, "int")?)),
                    _ => Ok(Tag::LongArray(self.parse_array(Some(b'l'), "long")?)),
                };
            }
        }

        let mut list = Vec::new();
        let mut first = true;
        loop {
            if self.separator(first, b']')? {
                return Ok(Tag::List(list));
            }
            first = false;
            list.push(self.parse_value()?);
        }
    }

    /// Elements of `[B;`, `[I;` and `[L;`: plain signed integers, with an
    /// optional suffix letter that is dropped.
    fn parse_array<T: FromStr>(&mut self, suffix: Option<u8>, width: &str) -> Result<Vec<T>> {
        let mut values = Vec::new();
        let mut first = true;

        loop {
            if self.separator(first, b']')? {
                return Ok(values);
            }
            first = false;

            let start = self.input.pos();
            let literal = self
                .input
                .scan_integer()
                .ok_or_else(|| self.input.unexpected())?;

            if let (Some(s), Some(c)) = (suffix, self.input.peek()) {
                if c.to_ascii_lowercase() == s {
                    self.input.discard();
                }
            }

            let value = literal.parse().map_err(|_| {
                Error::out_of_range(literal, width, self.input.char_offset(start))
            })?;
            values.push(value);
        }
    }
}
