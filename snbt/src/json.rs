//! Carrying tags through JSON.
//!
//! JSON has one number type, so a channel that only speaks JSON cannot tell
//! a byte from an int, and loses precision on longs past 2^53. The encoding
//! here keeps what it can:
//!
//! * Byte, Short, Int, Float and Double are JSON numbers,
//! * Long is a string with its suffix, `"7l"`,
//! * typed arrays are objects `{"_kind": "IntArray", "_values": [1, 2]}`,
//!   with byte and long elements as suffixed strings,
//! * strings, lists and compounds are JSON strings, arrays and objects. The
//!   empty marker is `null`.
//!
//! Decoding never fails. Anything that is not a recognised encoding comes
//! back as the nearest tag: JSON integers as Int (or Long when too big),
//! floats as Double, booleans as Byte. Bytes, shorts and floats therefore
//! widen on the way back. With [`NumberEncoding::Suffixed`] they are written
//! as suffixed strings too (`"5b"`, `"3s"`, `"1.5f"`), and decoding with the
//! same options gives them back exactly.
//!
//! A string value that itself looks like an encoded long, such as `"5l"`,
//! comes back as a Long, and a non-finite number becomes `null`.
//!
//! ```
//! use snbt::{snbt, JsonSafeOptions, NumberEncoding};
//!
//! let tag = snbt!({"id": "stone", "Count": (1i8), "seed": (i64::MAX)});
//! let json = snbt::to_json_safe(&tag);
//! assert_eq!(
//!     json.to_string(),
//!     r#"{"id":"stone","Count":1,"seed":"9223372036854775807l"}"#
//! );
//! assert_eq!(
//!     snbt::from_json_safe(&json),
//!     snbt!({"id": "stone", "Count": 1, "seed": (i64::MAX)})
//! );
//!
//! let opts = JsonSafeOptions::new().numbers(NumberEncoding::Suffixed);
//! let json = snbt::to_json_safe_with_opts(&tag, &opts);
//! assert_eq!(json["Count"], "1b");
//! assert_eq!(snbt::from_json_safe_with_opts(&json, &opts), tag);
//! ```

use std::convert::TryFrom;

use nom::combinator::all_consuming;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Number, Value};

use crate::error::Result;
use crate::lexer;
use crate::ser::float_literal;
use crate::tag::{Compound, Tag, TagKind};

const KIND_FIELD: &str = "_kind";
const VALUES_FIELD: &str = "_values";
// Field written by older front ends, with JavaScript typed array names.
const LEGACY_KIND_FIELD: &str = "_nbtType";

/// How the narrow numeric kinds are written and read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberEncoding {
    /// Byte, Short and Float as plain JSON numbers. They come back as Int and
    /// Double.
    Natural,
    /// Byte, Short and Float as suffixed strings, and such strings read back
    /// as those kinds. Lossless.
    Suffixed,
}

/// Options for [`to_json_safe_with_opts`] and [`from_json_safe_with_opts`].
#[derive(Debug, Clone)]
pub struct JsonSafeOptions {
    pub(crate) numbers: NumberEncoding,
}

impl JsonSafeOptions {
    pub fn new() -> Self {
        Self {
            numbers: NumberEncoding::Natural,
        }
    }

    pub fn numbers(mut self, numbers: NumberEncoding) -> Self {
        self.numbers = numbers;
        self
    }
}

impl Default for JsonSafeOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Encode a tag as a JSON value that survives a JSON-only transport.
pub fn to_json_safe(tag: &Tag) -> Value {
    to_json_safe_with_opts(tag, &JsonSafeOptions::new())
}

pub fn to_json_safe_with_opts(tag: &Tag, opts: &JsonSafeOptions) -> Value {
    let natural = opts.numbers == NumberEncoding::Natural;

    match tag {
        Tag::Byte(v) if natural => Value::from(*v),
        Tag::Byte(v) => Value::String(format!("{}b", v)),
        Tag::Short(v) if natural => Value::from(*v),
        Tag::Short(v) => Value::String(format!("{}s", v)),
        Tag::Int(v) => Value::from(*v),
        Tag::Long(v) => Value::String(format!("{}l", v)),
        Tag::Float(v) if natural => Number::from_f64(*v as f64).map_or(Value::Null, Value::Number),
        Tag::Float(v) => Value::String(format!("{}f", float_literal(v))),
        Tag::Double(v) => Number::from_f64(*v).map_or(Value::Null, Value::Number),
        Tag::String(s) => Value::String(s.clone()),
        Tag::ByteArray(values) => {
            typed_array(TagKind::ByteArray, values.iter().map(|v| format!("{}b", v).into()))
        }
        Tag::IntArray(values) => typed_array(TagKind::IntArray, values.iter().map(|v| (*v).into())),
        Tag::LongArray(values) => {
            typed_array(TagKind::LongArray, values.iter().map(|v| format!("{}l", v).into()))
        }
        Tag::List(list) => Value::Array(
            list.iter()
                .map(|t| to_json_safe_with_opts(t, opts))
                .collect(),
        ),
        Tag::Compound(compound) => {
            let map: Map<String, Value> = compound
                .iter()
                .map(|(k, v)| {
                    let value = v.map_or(Value::Null, |t| to_json_safe_with_opts(t, opts));
                    (k.to_owned(), value)
                })
                .collect();
            Value::Object(map)
        }
    }
}

fn typed_array(kind: TagKind, values: impl Iterator<Item = Value>) -> Value {
    let mut map = Map::new();
    map.insert(KIND_FIELD.to_owned(), Value::String(kind.name().to_owned()));
    map.insert(VALUES_FIELD.to_owned(), Value::Array(values.collect()));
    Value::Object(map)
}

/// Decode a value produced by [`to_json_safe`]. Values that never went
/// through the encoder are converted structurally.
pub fn from_json_safe(value: &Value) -> Tag {
    from_json_safe_with_opts(value, &JsonSafeOptions::new())
}

pub fn from_json_safe_with_opts(value: &Value, opts: &JsonSafeOptions) -> Tag {
    match value {
        Value::Null => Tag::Compound(Compound::new()),
        Value::Bool(b) => Tag::from(*b),
        Value::Number(n) => number(n),
        Value::String(s) => suffixed(s, opts.numbers).unwrap_or_else(|| Tag::String(s.clone())),
        Value::Array(list) => Tag::List(
            list.iter()
                .map(|v| from_json_safe_with_opts(v, opts))
                .collect(),
        ),
        Value::Object(map) => {
            if let Some(tag) = typed_array_of(map) {
                return tag;
            }
            let compound: Compound = map
                .iter()
                .map(|(k, v)| match v {
                    Value::Null => (k.as_str(), None),
                    v => (k.as_str(), Some(from_json_safe_with_opts(v, opts))),
                })
                .collect();
            Tag::Compound(compound)
        }
    }
}

fn number(n: &Number) -> Tag {
    if let Some(i) = n.as_i64() {
        match i32::try_from(i) {
            Ok(i) => Tag::Int(i),
            Err(_) => Tag::Long(i),
        }
    } else {
        // u64 past i64::MAX, or a float.
        Tag::Double(n.as_f64().unwrap_or(f64::NAN))
    }
}

/// `"7l"` back to a Long, and with suffixed numbers `"5b"`, `"3s"` and
/// `"1.5f"` to their kinds. Only the lower-case suffixes the encoder writes
/// are recognised.
fn suffixed(s: &str, numbers: NumberEncoding) -> Option<Tag> {
    let suffixes: &[char] = match numbers {
        NumberEncoding::Natural => &['l'],
        NumberEncoding::Suffixed => &['b', 's', 'l', 'f'],
    };
    if !s.ends_with(suffixes) {
        return None;
    }

    if numbers == NumberEncoding::Suffixed {
        match s {
            "NaNf" => return Some(Tag::Float(f32::NAN)),
            "inff" => return Some(Tag::Float(f32::INFINITY)),
            "-inff" => return Some(Tag::Float(f32::NEG_INFINITY)),
            _ => {}
        }
    }

    let (_, number) = all_consuming(lexer::number)(s).ok()?;
    number.to_tag()
}

fn typed_array_of(map: &Map<String, Value>) -> Option<Tag> {
    if map.len() != 2 {
        return None;
    }
    let values = map.get(VALUES_FIELD)?.as_array()?;

    if let Some(kind) = map.get(KIND_FIELD) {
        return match kind.as_str()?.parse::<TagKind>().ok()? {
            TagKind::ByteArray => elements(values, Some(b'b')).map(Tag::ByteArray),
            TagKind::IntArray => elements(values, None).map(Tag::IntArray),
            TagKind::LongArray => elements(values, Some(b'l')).map(Tag::LongArray),
            _ => None,
        };
    }

    match map.get(LEGACY_KIND_FIELD)?.as_str()? {
        "Int8Array" => elements(values, Some(b'b')).map(Tag::ByteArray),
        "Uint8Array" => elements::<u8>(values, Some(b'b'))
            .map(|v| Tag::ByteArray(v.into_iter().map(|b| b as i8).collect())),
        "Int32Array" => elements(values, None).map(Tag::IntArray),
        "BigInt64Array" => elements(values, Some(b'l')).map(Tag::LongArray),
        _ => None,
    }
}

/// Array elements, as JSON integers or as strings with an optional suffix.
/// `None` if any element is neither or does not fit.
fn elements<T>(values: &[Value], suffix: Option<u8>) -> Option<Vec<T>>
where
    T: TryFrom<i64> + std::str::FromStr,
{
    values
        .iter()
        .map(|v| match v {
            Value::Number(n) => T::try_from(n.as_i64()?).ok(),
            Value::String(s) => {
                let s = match (suffix, s.as_bytes().last()) {
                    (Some(suf), Some(last)) if last.to_ascii_lowercase() == suf => &s[..s.len() - 1],
                    _ => s.as_str(),
                };
                let (_, literal) = all_consuming(lexer::integer)(s).ok()?;
                literal.parse().ok()
            }
            _ => None,
        })
        .collect()
}

/// Encode a tag as JSON text, see [`to_json_safe`].
pub fn to_json_string(tag: &Tag) -> Result<String> {
    Ok(serde_json::to_string(&to_json_safe(tag))?)
}

pub fn to_json_string_pretty(tag: &Tag) -> Result<String> {
    Ok(serde_json::to_string_pretty(&to_json_safe(tag))?)
}

/// Decode JSON text, see [`from_json_safe`]. Fails only when the text is not
/// JSON.
pub fn from_json_str(text: &str) -> Result<Tag> {
    let value: Value = serde_json::from_str(text)?;
    Ok(from_json_safe(&value))
}

impl Serialize for Tag {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        to_json_safe(self).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Tag {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(from_json_safe(&value))
    }
}
