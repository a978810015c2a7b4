//! This module turns a [`Tag`] back into SNBT text.
//!
//! There are two dialects:
//!
//! * the classic dialect ([`to_string`], [`to_string_pretty`],
//!   [`to_string_with_opts`]), which [`parse`](crate::parse) reads back to the
//!   same tree, and
//! * the display dialect ([`to_display_string`]), a JSON-flavoured rendering
//!   meant for people and for backends that expect quoted keys. See
//!   [`DisplayOptions`].
//!
//! Both have a pretty mode. A container is first rendered on one line; when
//! that line is longer than the break length, or one of its children already
//! spans several lines, it is written one entry per line with four spaces of
//! indent per level.
//!
//! ```
//! use snbt::{snbt, StringifyOptions};
//!
//! let tag = snbt!({"a": 1, "b": 2, "c": 3});
//! let opts = StringifyOptions::new().pretty(true).break_length(10);
//! assert_eq!(
//!     snbt::to_string_with_opts(&tag, &opts),
//!     "{\n    a: 1,\n    b: 2,\n    c: 3\n}"
//! );
//! ```

use std::fmt::Display;
use std::io::Write;

use crate::error::Result;
use crate::lexer;
use crate::tag::Tag;

mod display;

pub use display::{to_display_string, to_display_string_pretty, DisplayOptions};

const INDENT: &str = "    ";

/// Which quote the classic dialect puts around strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quote {
    Single,
    Double,
}

impl Quote {
    fn char(self) -> char {
        match self {
            Quote::Single => '\'',
            Quote::Double => '"',
        }
    }
}

/// Options for the classic dialect.
#[derive(Debug, Clone)]
pub struct StringifyOptions {
    pub(crate) pretty: bool,
    pub(crate) break_length: usize,
    pub(crate) quote: Option<Quote>,
}

impl StringifyOptions {
    /// Compact output, quotes picked per string.
    pub fn new() -> Self {
        Self {
            pretty: false,
            break_length: 70,
            quote: None,
        }
    }

    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Longest single-line container before pretty mode breaks it up.
    pub fn break_length(mut self, break_length: usize) -> Self {
        self.break_length = break_length;
        self
    }

    /// Always use this quote. Without it a string is quoted with whichever
    /// quote it does not start with, looking at its first eight characters.
    pub fn quote(mut self, quote: Quote) -> Self {
        self.quote = Some(quote);
        self
    }
}

impl Default for StringifyOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Line breaking shared by both dialects.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Layout {
    pub(crate) pretty: bool,
    pub(crate) break_length: usize,
}

impl Layout {
    pub(crate) fn sep(&self) -> &'static str {
        if self.pretty {
            ", "
        } else {
            ","
        }
    }

    pub(crate) fn colon(&self) -> &'static str {
        if self.pretty {
            ": "
        } else {
            ":"
        }
    }

    /// Surround rendered entries with brackets, breaking them over lines if
    /// the single-line form is too long.
    pub(crate) fn wrap(&self, open: &str, close: &str, items: &[String], depth: usize) -> String {
        let single = format!("{}{}{}", open, items.join(self.sep()), close);
        let breaks = self.pretty
            && !items.is_empty()
            && (single.chars().count() > self.break_length
                || items.iter().any(|item| item.contains('\n')));

        if !breaks {
            return single;
        }

        let indent = INDENT.repeat(depth);
        let mut out = String::with_capacity(single.len() + items.len() * (indent.len() + 2));
        out.push_str(open);
        out.push('\n');
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                out.push_str(",\n");
            }
            out.push_str(&indent);
            out.push_str(item);
        }
        out.push('\n');
        out.push_str(&INDENT.repeat(depth.saturating_sub(1)));
        out.push_str(close);
        out
    }
}

/// Plain decimal text for a float, never in exponent form. Integral values
/// get a `.0` so that they read back as a decimal.
pub(crate) fn float_literal(v: impl Display) -> String {
    let mut s = v.to_string();
    if s.bytes().all(|b| b.is_ascii_digit() || b == b'-') {
        s.push_str(".0");
    }
    s
}

pub(crate) fn is_bare_key(key: &str) -> bool {
    matches!(lexer::bare(key), Ok(("", _)))
}

pub(crate) fn write_escaped_str(out: &mut String, v: &str, quote: char) {
    out.push(quote);
    let mut start = 0;
    for (i, ch) in v.char_indices() {
        if ch != quote && ch != '\\' {
            continue;
        }
        out.push_str(&v[start..i]);
        out.push('\\');
        out.push(ch);
        start = i + ch.len_utf8();
    }
    out.push_str(&v[start..]);
    out.push(quote);
}

struct Serializer {
    layout: Layout,
    quote: Option<Quote>,
}

impl Serializer {
    fn quote_for(&self, text: &str) -> char {
        if let Some(q) = self.quote {
            return q.char();
        }
        for ch in text.chars().take(8) {
            match ch {
                '\'' => return '"',
                '"' => return '\'',
                _ => {}
            }
        }
        '"'
    }

    fn string(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len() + 2);
        write_escaped_str(&mut out, text, self.quote_for(text));
        out
    }

    /// Elements are written without suffixes: `[B;1,2,3]`.
    fn array<T: itoa::Integer + Copy>(&self, prefix: &str, values: &[T]) -> String {
        let mut out = String::from("[");
        out.push_str(prefix);
        if self.layout.pretty && !values.is_empty() {
            out.push(' ');
        }
        let mut buffer = itoa::Buffer::new();
        for (i, v) in values.iter().enumerate() {
            if i > 0 {
                out.push_str(self.layout.sep());
            }
            out.push_str(buffer.format(*v));
        }
        out.push(']');
        out
    }

    fn tag(&self, tag: &Tag, depth: usize) -> String {
        let mut int = itoa::Buffer::new();

        match tag {
            Tag::Byte(v) => format!("{}b", int.format(*v)),
            Tag::Short(v) => format!("{}s", int.format(*v)),
            Tag::Int(v) => int.format(*v).to_owned(),
            Tag::Long(v) => format!("{}l", int.format(*v)),
            Tag::Float(v) => format!("{}f", float_literal(v)),
            Tag::Double(v) => float_literal(v),
            Tag::String(s) => self.string(s),
            Tag::ByteArray(values) => self.array("B;", values),
            Tag::IntArray(values) => self.array("I;", values),
            Tag::LongArray(values) => self.array("L;", values),
            Tag::List(list) => {
                let items: Vec<String> = list.iter().map(|t| self.tag(t, depth + 1)).collect();
                self.layout.wrap("[", "]", &items, depth)
            }
            Tag::Compound(compound) => {
                let items: Vec<String> = compound
                    .iter()
                    .map(|(key, value)| {
                        let mut pair = if is_bare_key(key) {
                            key.to_owned()
                        } else {
                            self.string(key)
                        };
                        pair.push(':');
                        if let Some(value) = value {
                            if self.layout.pretty {
                                pair.push(' ');
                            }
                            pair.push_str(&self.tag(value, depth + 1));
                        }
                        pair
                    })
                    .collect();
                self.layout.wrap("{", "}", &items, depth)
            }
        }
    }
}

/// Serialize a tag as compact classic SNBT.
///
/// ```
/// # use snbt::Tag;
/// assert_eq!(snbt::to_string(&Tag::Byte(5)), "5b");
/// assert_eq!(snbt::to_string(&Tag::Double(3.0)), "3.0");
/// assert_eq!(snbt::to_string(&Tag::IntArray(vec![1, 2, 3])), "[I;1,2,3]");
/// ```
pub fn to_string(tag: &Tag) -> String {
    to_string_with_opts(tag, &StringifyOptions::new())
}

/// Serialize a tag as pretty classic SNBT with the default break length.
pub fn to_string_pretty(tag: &Tag) -> String {
    to_string_with_opts(tag, &StringifyOptions::new().pretty(true))
}

pub fn to_string_with_opts(tag: &Tag, opts: &StringifyOptions) -> String {
    let ser = Serializer {
        layout: Layout {
            pretty: opts.pretty,
            break_length: opts.break_length,
        },
        quote: opts.quote,
    };
    ser.tag(tag, 1)
}

/// Serialize a tag as compact classic SNBT into the given writer.
pub fn to_writer<W: Write>(writer: W, tag: &Tag) -> Result<()> {
    to_writer_with_opts(writer, tag, &StringifyOptions::new())
}

pub fn to_writer_pretty<W: Write>(writer: W, tag: &Tag) -> Result<()> {
    to_writer_with_opts(writer, tag, &StringifyOptions::new().pretty(true))
}

pub fn to_writer_with_opts<W: Write>(mut writer: W, tag: &Tag, opts: &StringifyOptions) -> Result<()> {
    let snbt = to_string_with_opts(tag, opts);
    Ok(writer.write_all(snbt.as_bytes())?)
}
