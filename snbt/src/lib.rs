//! snbt reads and writes *stringified NBT*, the text form of Minecraft's
//! named binary tag data that shows up in commands, data packs and item
//! tooltips.
//!
//! * [`parse`] turns SNBT text into a [`Tag`] tree.
//! * [`to_string`] and friends write a tree back as classic SNBT, which
//!   parses to the same tree again.
//! * [`to_display_string`] writes the JSON-flavoured display dialect, with
//!   quoted keys and a couple of item-data conventions. See [`DisplayOptions`].
//! * [`to_json_safe`] and [`from_json_safe`] carry a tree through JSON
//!   without losing which numeric kind each value was.
//! * [`snbt!`] builds trees in Rust code.
//!
//! ```toml
//! [dependencies]
//! snbt = "0.1"
//! ```
//!
//! # Quick example
//!
//! ```
//! use snbt::{Tag, StringifyOptions};
//!
//! let tag = snbt::parse(r#"{id:"minecraft:diamond_sword",Count:1b,tag:{Damage:0}}"#).unwrap();
//!
//! let item = tag.as_compound().unwrap();
//! assert_eq!(item.get("Count"), Some(&Tag::Byte(1)));
//!
//! // Writing it back gives the same text.
//! assert_eq!(
//!     snbt::to_string(&tag),
//!     r#"{id:"minecraft:diamond_sword",Count:1b,tag:{Damage:0}}"#
//! );
//!
//! // Pretty output breaks containers that do not fit on a line.
//! let opts = StringifyOptions::new().pretty(true).break_length(20);
//! assert_eq!(
//!     snbt::to_string_with_opts(&tag, &opts),
//!     "{\n    id: \"minecraft:diamond_sword\",\n    Count: 1b,\n    tag: {Damage: 0}\n}"
//! );
//! ```
//!
//! # Numbers
//!
//! Every numeric kind keeps its width: `1b` is a Byte, `1s` a Short, `1` an
//! Int, `1l` a Long, `1.5f` a Float and `1.5` (or `1.5d`) a Double. Suffixes
//! are case insensitive. A token that starts like a number but is not one,
//! such as `1x` or `300b`, is read as an unquoted string.
//!
//! # JSON
//!
//! `Tag` implements serde's `Serialize` and `Deserialize` using the same
//! encoding as [`to_json_safe`], so it can sit inside any serde type:
//!
//! ```
//! # use snbt::{snbt, Tag};
//! let tag = snbt!({"Count": 2, "seed": (7i64)});
//! let text = serde_json::to_string(&tag).unwrap();
//! assert_eq!(text, r#"{"Count":2,"seed":"7l"}"#);
//! let back: Tag = serde_json::from_str(&text).unwrap();
//! assert_eq!(back, tag);
//! ```

pub mod error;
pub mod ser;

mod input;
mod json;
mod lexer;
mod parser;
mod tag;

#[macro_use]
mod macros;

pub use json::*;
pub use parser::{parse, parse_with_opts, ParseOptions};
pub use ser::{
    to_display_string, to_display_string_pretty, to_string, to_string_pretty,
    to_string_with_opts, to_writer, to_writer_pretty, to_writer_with_opts, DisplayOptions, Quote,
    StringifyOptions,
};
pub use tag::*;

#[cfg(test)]
mod tests;
