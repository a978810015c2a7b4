//! Token scanners. These only recognise a token at the start of their input;
//! [`Input`](crate::input::Input) keeps track of where that is.

use std::borrow::Cow;

use crate::tag::Tag;

use nom::{IResult, combinator::{recognize, opt, map, cut}, sequence::{pair, preceded, terminated}, character::complete::{one_of, char, alphanumeric1, digit1}, branch::alt, bytes::complete::is_a, multi::many1, error::{ParseError, ErrorKind}};

/// A numeric literal as scanned, before it is given a width.
#[derive(Debug, PartialEq)]
pub(crate) struct Number<'a> {
    /// The literal without its suffix.
    pub(crate) literal: &'a str,
    pub(crate) decimal: bool,
    /// Lower-cased suffix letter, if any.
    pub(crate) suffix: Option<char>,
}

impl Number<'_> {
    /// Give the literal its width. `None` when the suffix does not suit the
    /// literal or the value does not fit.
    pub(crate) fn to_tag(&self) -> Option<Tag> {
        match (self.suffix, self.decimal) {
            (None, false) => self.literal.parse().ok().map(Tag::Int),
            (None, true) | (Some('d'), _) => self.literal.parse().ok().map(Tag::Double),
            (Some('f'), _) => self.literal.parse().ok().map(Tag::Float),
            (Some('b'), false) => self.literal.parse().ok().map(Tag::Byte),
            (Some('s'), false) => self.literal.parse().ok().map(Tag::Short),
            (Some('l'), false) => self.literal.parse().ok().map(Tag::Long),
            _ => None,
        }
    }
}

/// `[0-9A-Za-z._+-]+`
pub(crate) fn bare(input: &str) -> IResult<&str, &str> {
    recognize(many1(alt((
        alphanumeric1,
        is_a("_-.+"),
    ))))(input)
}

/// `-? digit+`
pub(crate) fn integer(input: &str) -> IResult<&str, &str> {
    recognize(pair(opt(char('-')), digit1))(input)
}

/// `-? digit+ ('.' digit+)? suffix?`. Says nothing about what follows; the
/// caller decides whether the token is a number or the start of an unquoted
/// string.
pub(crate) fn number(input: &str) -> IResult<&str, Number<'_>> {
    map(
        pair(
            recognize(pair(integer, opt(pair(char('.'), digit1)))),
            opt(one_of("bBsSlLfFdD")),
        ),
        |(literal, suffix): (&str, Option<char>)| Number {
            literal,
            decimal: literal.contains('.'),
            suffix: suffix.map(|c| c.to_ascii_lowercase()),
        },
    )(input)
}

/// A string between matching `'` or `"` quotes. Once the opening quote is
/// seen a missing closer is a failure at the end of input.
pub(crate) fn quoted(input: &str) -> IResult<&str, Cow<'_, str>> {
    alt((
        preceded(char('"'), cut(terminated(escaped('"'), char('"')))),
        preceded(char('\''), cut(terminated(escaped('\''), char('\'')))),
    ))(input)
}

/// Body of a quoted string up to, not including, `surround`. A backslash
/// takes the next character literally.
fn escaped<'a, E: ParseError<&'a str>>(surround: char) -> impl FnMut(&'a str) -> IResult<&'a str, Cow<'a, str>, E> {
    move |input: &'a str| {
        let mut owned: Option<String> = None;
        let mut start = 0;
        let mut skip = false;

        for (i, c) in input.char_indices() {
            if skip {
                skip = false;
                owned.get_or_insert_with(String::new).push(c);
                start = i + c.len_utf8();
            } else if c == '\\' {
                owned.get_or_insert_with(String::new).push_str(&input[start..i]);
                skip = true;
            } else if c == surround {
                let body = match owned {
                    Some(mut owned) => {
                        owned.push_str(&input[start..i]);
                        Cow::Owned(owned)
                    }
                    None => Cow::Borrowed(&input[..i]),
                };
                return Ok((&input[i..], body));
            }
        }

        Err(nom::Err::Error(E::from_error_kind(&input[input.len()..], ErrorKind::Eof)))
    }
}
