use std::convert::TryFrom;
use std::str::FromStr;

use indexmap::IndexMap;

use crate::error::Error;

/// Tag is a complete SNBT value. It owns its data. Compounds and Lists are
/// nested recursively, and every numeric kind keeps its exact width so that a
/// value read from text is written back with the same suffix.
///
/// ```
/// # use snbt::Tag;
/// # fn main() -> snbt::error::Result<()> {
/// let tag = snbt::parse("{DataVersion: 3465, Count: 1b}")?;
/// match tag.as_compound().and_then(|c| c.get("DataVersion")) {
///     Some(Tag::Int(ver)) => println!("Version: {}", ver),
///     _ => {}
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Tag {
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    String(String),
    ByteArray(Vec<i8>),
    IntArray(Vec<i32>),
    LongArray(Vec<i64>),
    List(Vec<Tag>),
    Compound(Compound),
}

/// The kind of a [`Tag`], without its payload. The discriminants are the NBT
/// tag ids.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
#[cfg_attr(feature = "arbitrary1", derive(arbitrary::Arbitrary))]
#[repr(u8)]
pub enum TagKind {
    /// Equivalent to i8.
    Byte = 1,
    /// Equivalent to i16.
    Short = 2,
    /// Equivalent to i32.
    Int = 3,
    /// Equivalent to i64.
    Long = 4,
    /// Equivalent to f32.
    Float = 5,
    /// Equivalent to f64.
    Double = 6,
    /// Array of Byte (i8).
    ByteArray = 7,
    /// A Unicode string.
    String = 8,
    /// A list of other tags, elements are not required to be the same kind.
    List = 9,
    /// A struct-like ordered mapping.
    Compound = 10,
    /// Array of Int (i32).
    IntArray = 11,
    /// Array of Long (i64).
    LongArray = 12,
}

impl TagKind {
    pub const ALL: [TagKind; 12] = [
        TagKind::Byte,
        TagKind::Short,
        TagKind::Int,
        TagKind::Long,
        TagKind::Float,
        TagKind::Double,
        TagKind::ByteArray,
        TagKind::String,
        TagKind::List,
        TagKind::Compound,
        TagKind::IntArray,
        TagKind::LongArray,
    ];

    pub fn name(self) -> &'static str {
        match self {
            TagKind::Byte => "Byte",
            TagKind::Short => "Short",
            TagKind::Int => "Int",
            TagKind::Long => "Long",
            TagKind::Float => "Float",
            TagKind::Double => "Double",
            TagKind::ByteArray => "ByteArray",
            TagKind::String => "String",
            TagKind::List => "List",
            TagKind::Compound => "Compound",
            TagKind::IntArray => "IntArray",
            TagKind::LongArray => "LongArray",
        }
    }

    pub fn is_numeric(self) -> bool {
        matches!(
            self,
            TagKind::Byte
                | TagKind::Short
                | TagKind::Int
                | TagKind::Long
                | TagKind::Float
                | TagKind::Double
        )
    }

    pub fn is_array(self) -> bool {
        matches!(
            self,
            TagKind::ByteArray | TagKind::IntArray | TagKind::LongArray
        )
    }
}

impl std::fmt::Display for TagKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u8> for TagKind {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Error> {
        use TagKind::*;
        Ok(match value {
            1 => Byte,
            2 => Short,
            3 => Int,
            4 => Long,
            5 => Float,
            6 => Double,
            7 => ByteArray,
            8 => String,
            9 => List,
            10 => Compound,
            11 => IntArray,
            12 => LongArray,
            _ => return Err(Error::invalid_tag_id(value)),
        })
    }
}

impl From<TagKind> for u8 {
    fn from(kind: TagKind) -> Self {
        kind as u8
    }
}

impl FromStr for TagKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        TagKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| Error::invalid_tag_name(s))
    }
}

impl Tag {
    /// Classify this tag. Total over the closed set of kinds.
    pub fn kind(&self) -> TagKind {
        match self {
            Tag::Byte(_) => TagKind::Byte,
            Tag::Short(_) => TagKind::Short,
            Tag::Int(_) => TagKind::Int,
            Tag::Long(_) => TagKind::Long,
            Tag::Float(_) => TagKind::Float,
            Tag::Double(_) => TagKind::Double,
            Tag::String(_) => TagKind::String,
            Tag::ByteArray(_) => TagKind::ByteArray,
            Tag::IntArray(_) => TagKind::IntArray,
            Tag::LongArray(_) => TagKind::LongArray,
            Tag::List(_) => TagKind::List,
            Tag::Compound(_) => TagKind::Compound,
        }
    }

    pub fn byte_array(data: impl Into<Vec<i8>>) -> Self {
        Tag::ByteArray(data.into())
    }

    pub fn int_array(data: impl Into<Vec<i32>>) -> Self {
        Tag::IntArray(data.into())
    }

    pub fn long_array(data: impl Into<Vec<i64>>) -> Self {
        Tag::LongArray(data.into())
    }

    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Tag::Byte(v) => Some(v as i64),
            Tag::Short(v) => Some(v as i64),
            Tag::Int(v) => Some(v as i64),
            Tag::Long(v) => Some(v),
            Tag::Float(v) => Some(v as i64),
            Tag::Double(v) => Some(v as i64),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            Tag::Byte(v) => Some(v as f64),
            Tag::Short(v) => Some(v as f64),
            Tag::Int(v) => Some(v as f64),
            Tag::Long(v) => Some(v as f64),
            Tag::Float(v) => Some(v as f64),
            Tag::Double(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Tag::String(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Tag]> {
        match self {
            Tag::List(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_compound(&self) -> Option<&Compound> {
        match self {
            Tag::Compound(v) => Some(v),
            _ => None,
        }
    }
}

/// An insertion-ordered mapping from names to tags.
///
/// An entry can hold the empty marker, written `key:` in SNBT with nothing
/// after the colon. That is different from the key being absent:
///
/// ```
/// # use snbt::Tag;
/// let tag = snbt::parse("{a:,b:1}").unwrap();
/// let c = tag.as_compound().unwrap();
/// assert_eq!(c.entry_of("a"), Some(None));
/// assert_eq!(c.entry_of("b"), Some(Some(&Tag::Int(1))));
/// assert_eq!(c.entry_of("z"), None);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Compound {
    entries: IndexMap<String, Option<Tag>>,
}

impl Compound {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value. An existing key keeps its position and gets the new
    /// value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Tag>) -> Option<Option<Tag>> {
        self.entries.insert(key.into(), Some(value.into()))
    }

    /// Insert the empty marker under `key`.
    pub fn insert_empty(&mut self, key: impl Into<String>) -> Option<Option<Tag>> {
        self.entries.insert(key.into(), None)
    }

    pub(crate) fn insert_entry(&mut self, key: String, value: Option<Tag>) {
        self.entries.insert(key, value);
    }

    /// The value under `key`. Both an absent key and the empty marker give
    /// `None`; use [`Compound::entry_of`] to tell them apart.
    pub fn get(&self, key: &str) -> Option<&Tag> {
        self.entries.get(key).and_then(Option::as_ref)
    }

    pub fn entry_of(&self, key: &str) -> Option<Option<&Tag>> {
        self.entries.get(key).map(Option::as_ref)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Remove `key`, keeping the order of the remaining entries.
    pub fn remove(&mut self, key: &str) -> Option<Option<Tag>> {
        self.entries.shift_remove(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&Tag>)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_ref()))
    }
}

impl<K: Into<String>> FromIterator<(K, Tag)> for Compound {
    fn from_iter<I: IntoIterator<Item = (K, Tag)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k.into(), Some(v))).collect(),
        }
    }
}

impl<K: Into<String>> FromIterator<(K, Option<Tag>)> for Compound {
    fn from_iter<I: IntoIterator<Item = (K, Option<Tag>)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

impl IntoIterator for Compound {
    type Item = (String, Option<Tag>);
    type IntoIter = indexmap::map::IntoIter<String, Option<Tag>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

// ------------- From<T> impls -------------

macro_rules! from {
    ($type:ty, $variant:ident $(, $($part:tt)+)?) => {
        impl From<$type> for Tag {
            fn from(val: $type) -> Self {
                Self::$variant(val$($($part)+)?)
            }
        }
        impl From<&$type> for Tag {
            fn from(val: &$type) -> Self {
                Self::$variant(val.to_owned()$($($part)+)?)
            }
        }
    };
}
from!(i8, Byte);
from!(i16, Short);
from!(i32, Int);
from!(i64, Long);
from!(f32, Float);
from!(f64, Double);
from!(String, String);
from!(&str, String, .to_owned());
from!(Vec<Tag>, List);
from!(Compound, Compound);

impl From<bool> for Tag {
    fn from(val: bool) -> Self {
        Self::Byte(i8::from(val))
    }
}

impl From<&bool> for Tag {
    fn from(val: &bool) -> Self {
        Self::Byte(i8::from(*val))
    }
}

#[cfg(feature = "arbitrary1")]
fn arb_tag(u: &mut arbitrary::Unstructured, depth: usize) -> arbitrary::Result<Tag> {
    // Containers stop nesting past a few levels so fuzz inputs stay small.
    let kind = if depth > 4 {
        match u.int_in_range(0..=6)? {
            0 => TagKind::Byte,
            1 => TagKind::Short,
            2 => TagKind::Int,
            3 => TagKind::Long,
            4 => TagKind::Float,
            5 => TagKind::Double,
            _ => TagKind::String,
        }
    } else {
        u.arbitrary::<TagKind>()?
    };

    Ok(match kind {
        TagKind::Byte => Tag::Byte(u.arbitrary()?),
        TagKind::Short => Tag::Short(u.arbitrary()?),
        TagKind::Int => Tag::Int(u.arbitrary()?),
        TagKind::Long => Tag::Long(u.arbitrary()?),
        TagKind::Float => Tag::Float(u.arbitrary()?),
        TagKind::Double => Tag::Double(u.arbitrary()?),
        TagKind::String => Tag::String(u.arbitrary()?),
        TagKind::ByteArray => Tag::ByteArray(u.arbitrary()?),
        TagKind::IntArray => Tag::IntArray(u.arbitrary()?),
        TagKind::LongArray => Tag::LongArray(u.arbitrary()?),
        TagKind::List => {
            let len = u.arbitrary_len::<u8>()?.min(8);
            let mut v = Vec::with_capacity(len);
            for _ in 0..len {
                v.push(arb_tag(u, depth + 1)?);
            }
            Tag::List(v)
        }
        TagKind::Compound => {
            let len = u.arbitrary_len::<u8>()?.min(8);
            let mut c = Compound::new();
            for _ in 0..len {
                let key: String = u.arbitrary()?;
                if u.arbitrary::<bool>()? {
                    c.insert(key, arb_tag(u, depth + 1)?);
                } else {
                    c.insert_empty(key);
                }
            }
            Tag::Compound(c)
        }
    })
}

#[cfg(feature = "arbitrary1")]
impl<'a> arbitrary::Arbitrary<'a> for Tag {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        arb_tag(u, 0)
    }
}
