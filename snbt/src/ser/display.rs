use std::collections::BTreeSet;

use crate::tag::Tag;

use super::{float_literal, write_escaped_str, Layout};

/// Options for the display dialect.
///
/// Keys are always double quoted, typed arrays are written like lists with
/// suffixed elements (`[1b,2b]`, `[1,2]`, `[1l,2l]`) and doubles lose their
/// forced `.0`. Two extra rules exist for compatibility with item data:
///
/// * keys in the force-byte set (by default `Count` and `Slot`) always get a
///   `b` suffix when their value is integral. Only Short, Int and a Double
///   with no fractional part count as integral; Byte already has the suffix,
///   and Long and Float are written as they are, and
/// * a compound whose only entry is `value` is replaced by that entry's
///   value before rendering. Some producers wrap plain numbers in such an
///   envelope; the unwrapping can be turned off with
///   [`unwrap_value_envelopes`](DisplayOptions::unwrap_value_envelopes).
///
/// ```
/// use snbt::{snbt, DisplayOptions};
///
/// let item = snbt!({"id": "minecraft:stone", "Count": 3});
/// assert_eq!(
///     snbt::to_display_string(&item, &DisplayOptions::new()),
///     r#"{"id":"minecraft:stone","Count":3b}"#
/// );
/// ```
#[derive(Debug, Clone)]
pub struct DisplayOptions {
    pub(crate) pretty: bool,
    pub(crate) break_length: usize,
    pub(crate) force_byte_keys: BTreeSet<String>,
    pub(crate) unwrap_value_envelopes: bool,
}

impl DisplayOptions {
    pub fn new() -> Self {
        Self {
            pretty: false,
            break_length: 70,
            force_byte_keys: ["Count", "Slot"].iter().map(|k| k.to_string()).collect(),
            unwrap_value_envelopes: true,
        }
    }

    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn break_length(mut self, break_length: usize) -> Self {
        self.break_length = break_length;
        self
    }

    /// Add a key whose integral values are written as bytes.
    pub fn force_byte_key(mut self, key: impl Into<String>) -> Self {
        self.force_byte_keys.insert(key.into());
        self
    }

    /// Replace the whole set of force-byte keys.
    pub fn force_byte_keys<I, K>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        self.force_byte_keys = keys.into_iter().map(Into::into).collect();
        self
    }

    pub fn unwrap_value_envelopes(mut self, unwrap: bool) -> Self {
        self.unwrap_value_envelopes = unwrap;
        self
    }
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self::new()
    }
}

struct DisplaySerializer<'o> {
    layout: Layout,
    opts: &'o DisplayOptions,
}

impl DisplaySerializer<'_> {
    fn unwrap<'t>(&self, mut tag: &'t Tag) -> &'t Tag {
        if !self.opts.unwrap_value_envelopes {
            return tag;
        }
        while let Tag::Compound(c) = tag {
            match c.get("value") {
                Some(inner) if c.len() == 1 => tag = inner,
                _ => break,
            }
        }
        tag
    }

    fn string(text: &str) -> String {
        let mut out = String::with_capacity(text.len() + 2);
        write_escaped_str(&mut out, text, '"');
        out
    }

    fn array<T: itoa::Integer + Copy>(&self, values: &[T], suffix: &str) -> String {
        let mut buffer = itoa::Buffer::new();
        let items: Vec<String> = values
            .iter()
            .map(|v| format!("{}{}", buffer.format(*v), suffix))
            .collect();
        format!("[{}]", items.join(self.layout.sep()))
    }

    /// The byte form of an integral number under a force-byte key.
    fn forced_byte(tag: &Tag) -> Option<String> {
        let mut buffer = itoa::Buffer::new();
        match *tag {
            Tag::Short(v) => Some(format!("{}b", buffer.format(v))),
            Tag::Int(v) => Some(format!("{}b", buffer.format(v))),
            Tag::Double(v) if v.fract() == 0.0 && v.abs() < 1e15 => {
                Some(format!("{}b", buffer.format(v as i64)))
            }
            _ => None,
        }
    }

    fn tag(&self, tag: &Tag, depth: usize) -> String {
        let tag = self.unwrap(tag);
        let mut int = itoa::Buffer::new();

        match tag {
            Tag::Byte(v) => format!("{}b", int.format(*v)),
            Tag::Short(v) => format!("{}s", int.format(*v)),
            Tag::Int(v) => int.format(*v).to_owned(),
            Tag::Long(v) => format!("{}l", int.format(*v)),
            Tag::Float(v) => format!("{}f", float_literal(v)),
            Tag::Double(v) => {
                let s = float_literal(v);
                s.strip_suffix(".0").unwrap_or(s.as_str()).to_owned()
            }
            Tag::String(s) => Self::string(s),
            Tag::ByteArray(values) => self.array(values, "b"),
            Tag::IntArray(values) => self.array(values, ""),
            Tag::LongArray(values) => self.array(values, "l"),
            Tag::List(list) => {
                let items: Vec<String> = list.iter().map(|t| self.tag(t, depth + 1)).collect();
                self.layout.wrap("[", "]", &items, depth)
            }
            Tag::Compound(compound) => {
                let items: Vec<String> = compound
                    .iter()
                    .map(|(key, value)| {
                        let mut pair = Self::string(key);
                        pair.push_str(self.layout.colon());
                        match value.map(|v| self.unwrap(v)) {
                            None => pair.push_str("{}"),
                            Some(value) => {
                                let forced = if self.opts.force_byte_keys.contains(key) {
                                    Self::forced_byte(value)
                                } else {
                                    None
                                };
                                match forced {
                                    Some(b) => pair.push_str(&b),
                                    None => pair.push_str(&self.tag(value, depth + 1)),
                                }
                            }
                        }
                        pair
                    })
                    .collect();
                self.layout.wrap("{", "}", &items, depth)
            }
        }
    }
}

/// Render a tag in the display dialect.
pub fn to_display_string(tag: &Tag, opts: &DisplayOptions) -> String {
    let ser = DisplaySerializer {
        layout: Layout {
            pretty: opts.pretty,
            break_length: opts.break_length,
        },
        opts,
    };
    ser.tag(tag, 1)
}

/// Render a tag in the display dialect with the default options, optionally
/// pretty.
pub fn to_display_string_pretty(tag: &Tag, pretty: bool) -> String {
    to_display_string(tag, &DisplayOptions::new().pretty(pretty))
}
