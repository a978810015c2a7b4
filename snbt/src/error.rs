//! Contains the Error and Result type used by the parser, serializers and
//! the JSON bridge.
use std::fmt::Display;

/// Various errors that can occur while reading or writing SNBT.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Malformed SNBT. `position` is the character offset into the original
    /// text, suitable for drawing a caret under the input.
    Syntax { position: usize, message: String },
    /// A tag kind outside of the twelve NBT value kinds.
    InvalidTag(String),
    /// Text handed to [`from_json_str`](crate::from_json_str) was not JSON.
    Json(String),
    /// The sink given to [`to_writer`](crate::to_writer) failed.
    Io(String),
}

/// Convenience type for Result.
pub type Result<T> = std::result::Result<T, Error>;

impl std::error::Error for Error {}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Syntax { position, message } => {
                write!(f, "{} at position {}", message, position)
            }
            Error::InvalidTag(msg) => write!(f, "invalid tag: {}", msg),
            Error::Json(msg) => write!(f, "json error: {}", msg),
            Error::Io(msg) => write!(f, "io error: {}", msg),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Json(e.to_string())
    }
}

impl Error {
    pub(crate) fn unexpected_end(position: usize) -> Error {
        Error::Syntax {
            position,
            message: "unexpected end of input".to_owned(),
        }
    }

    pub(crate) fn unexpected_char(ch: char, position: usize) -> Error {
        Error::Syntax {
            position,
            message: format!("unexpected character {:?}", ch),
        }
    }

    pub(crate) fn out_of_range(literal: &str, kind: &str, position: usize) -> Error {
        Error::Syntax {
            position,
            message: format!("{} does not fit in {}", literal, kind),
        }
    }

    pub(crate) fn too_deep(max_depth: usize, position: usize) -> Error {
        Error::Syntax {
            position,
            message: format!("nesting deeper than {} levels", max_depth),
        }
    }

    pub(crate) fn invalid_tag_id(id: u8) -> Error {
        Error::InvalidTag(format!("no value kind with id {}", id))
    }

    pub(crate) fn invalid_tag_name(name: &str) -> Error {
        Error::InvalidTag(format!("no value kind named {:?}", name))
    }

    /// Character offset of a syntax error, if this is one.
    pub fn position(&self) -> Option<usize> {
        match self {
            Error::Syntax { position, .. } => Some(*position),
            _ => None,
        }
    }

    /// Render the line of `text` containing a syntax error with a `^` under
    /// the offending character. Returns `None` for other errors.
    ///
    /// ```
    /// let text = "{a:1,,}";
    /// let err = snbt::parse(text).unwrap_err();
    /// assert_eq!(err.caret(text).unwrap(), "{a:1,,}\n     ^");
    /// ```
    pub fn caret(&self, text: &str) -> Option<String> {
        let position = self.position()?;

        let mut line_start = 0;
        let mut line = "";
        let mut seen = 0;
        for l in text.split('\n') {
            let len = l.chars().count();
            line = l;
            line_start = seen;
            if position <= seen + len {
                break;
            }
            seen += len + 1;
        }

        let column = position.saturating_sub(line_start);
        Some(format!("{}\n{:column$}^", line, "", column = column))
    }
}
