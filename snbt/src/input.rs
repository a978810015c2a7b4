use nom::IResult;

use crate::error::{Error, Result};
use crate::lexer::{self, Number};

/// Characters allowed in an unquoted string or key.
pub(crate) fn is_bare_char(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'_' | b'-' | b'.' | b'+')
}

/// Cursor over SNBT text. Positions are byte indices internally; errors
/// convert them to character offsets.
pub(crate) struct Input<'a> {
    data: &'a str,
    index: usize,
}

impl<'a> Input<'a> {
    pub(crate) fn new(data: &'a str) -> Self {
        Self { data, index: 0 }
    }

    pub(crate) fn peek(&self) -> Option<u8> {
        self.data.as_bytes().get(self.index).copied()
    }

    pub(crate) fn peek_at(&self, offset: usize) -> Option<u8> {
        self.data.as_bytes().get(self.index + offset).copied()
    }

    pub(crate) fn discard(&mut self) {
        self.index += 1;
    }

    pub(crate) fn advance(&mut self, n: usize) {
        self.index += n;
    }

    pub(crate) fn pos(&self) -> usize {
        self.index
    }

    pub(crate) fn rewind(&mut self, pos: usize) {
        self.index = pos;
    }

    pub(crate) fn is_eof(&self) -> bool {
        self.index >= self.data.len()
    }

    pub(crate) fn discard_whitespace(&mut self) {
        while let Some(b' ' | b'\n' | b'\t' | b'\r') = self.peek() {
            self.discard();
        }
    }

    /// Character offset of a byte index.
    pub(crate) fn char_offset(&self, index: usize) -> usize {
        self.data[..index.min(self.data.len())].chars().count()
    }

    /// The error for whatever sits under the cursor: end of input, or the
    /// character that was not wanted.
    pub(crate) fn unexpected(&self) -> Error {
        self.unexpected_at(self.index)
    }

    pub(crate) fn unexpected_at(&self, index: usize) -> Error {
        match self.data[index..].chars().next() {
            Some(ch) => Error::unexpected_char(ch, self.char_offset(index)),
            None => Error::unexpected_end(self.char_offset(index)),
        }
    }

    pub(crate) fn expect(&mut self, b: u8) -> Result<()> {
        if self.peek() == Some(b) {
            self.discard();
            Ok(())
        } else {
            Err(self.unexpected())
        }
    }

    /// Run a scanner on the rest of the text. On success the cursor moves
    /// past what it consumed; on failure the byte index where it gave up is
    /// returned.
    fn scan<T>(
        &mut self,
        mut scanner: impl FnMut(&'a str) -> IResult<&'a str, T>,
    ) -> std::result::Result<T, usize> {
        match scanner(&self.data[self.index..]) {
            Ok((rest, value)) => {
                self.index = self.data.len() - rest.len();
                Ok(value)
            }
            Err(nom::Err::Error(e) | nom::Err::Failure(e)) => Err(self.data.len() - e.input.len()),
            Err(nom::Err::Incomplete(_)) => Err(self.data.len()),
        }
    }

    /// Leaves the cursor untouched when there is no integer.
    pub(crate) fn scan_integer(&mut self) -> Option<&'a str> {
        self.scan(lexer::integer).ok()
    }

    pub(crate) fn scan_number(&mut self) -> Option<Number<'a>> {
        self.scan(lexer::number).ok()
    }

    pub(crate) fn scan_bare(&mut self) -> Result<&'a str> {
        self.scan(lexer::bare).map_err(|at| self.unexpected_at(at))
    }

    /// The cursor must be on the opening quote.
    pub(crate) fn scan_quoted(&mut self) -> Result<String> {
        self.scan(lexer::quoted)
            .map(|s| s.into_owned())
            .map_err(|at| self.unexpected_at(at))
    }
}
