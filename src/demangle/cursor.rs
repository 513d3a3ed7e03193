//! Low-level cursor over mangled symbol text.
//!
//! This module provides the [`crate::demangle::Cursor`] type, a position-tracking reader used by
//! every stage of the decoder. It offers bounds-checked access to the mangled text with helpers
//! for the handful of lexical shapes the grammar uses: single lead characters, single-digit
//! counts, decimal lengths and length-prefixed identifiers.
//!
//! # Architecture
//!
//! The cursor maintains a position within a string slice and an *origin*, the absolute offset
//! of that slice inside the complete symbol. Template arguments are decoded by fresh cursors over
//! sub-slices of the base name or of a literal name; the origin lets their errors still point at
//! the right byte of the original input.
//!
//! - **Position tracking** - [`Cursor::pos`] always reports an absolute offset
//! - **Bounds checking** - every read validates availability and fails with
//!   [`crate::Error::MalformedSymbol`] instead of panicking
//! - **Char boundaries** - [`Cursor::read_str`] never splits a multi-byte character
//!
//! # Usage Examples
//!
//! ```rust
//! use symscope::demangle::Cursor;
//!
//! let mut cursor = Cursor::new("18MorphItemNeoTeresaFv");
//! let len = cursor.read_decimal()?;
//! assert_eq!(cursor.read_str(len)?, "MorphItemNeoTeresa");
//! assert_eq!(cursor.peek_byte()?, b'F');
//! assert_eq!(cursor.remaining(), "Fv");
//! # Ok::<(), symscope::Error>(())
//! ```

use crate::Result;

/// A cursor over mangled symbol text.
///
/// `Cursor` hands out bytes and slices from the underlying string while keeping track of how far
/// decoding has progressed. All decode steps share one cursor per call; it is never retained
/// after the call returns.
///
/// # Examples
///
/// ```rust
/// use symscope::demangle::Cursor;
///
/// let mut cursor = Cursor::new("Q29JGeometry");
/// assert_eq!(cursor.read_byte()?, b'Q');
/// assert_eq!(cursor.read_digit()?, 2);
/// assert_eq!(cursor.pos(), 2);
/// # Ok::<(), symscope::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    /// The text being decoded
    data: &'a str,
    /// Current position within `data`
    position: usize,
    /// Absolute offset of `data` within the complete symbol
    origin: usize,
}

impl<'a> Cursor<'a> {
    /// Create a new [`Cursor`] at the start of `data`.
    ///
    /// # Arguments
    /// * `data` - The text to read from
    #[must_use]
    pub fn new(data: &'a str) -> Self {
        Self::with_origin(data, 0)
    }

    /// Create a cursor over a slice that starts at `origin` in the complete symbol.
    ///
    /// # Arguments
    /// * `data` - The text to read from
    /// * `origin` - Absolute offset of `data[0]`, used for error reporting
    #[must_use]
    pub fn with_origin(data: &'a str, origin: usize) -> Self {
        Cursor {
            data,
            position: 0,
            origin,
        }
    }

    /// Returns the length of the underlying text in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the cursor was created over empty text.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns `true` if there is more text to decode.
    #[must_use]
    pub fn has_more_data(&self) -> bool {
        self.position < self.data.len()
    }

    /// Absolute offset of the cursor within the complete symbol.
    #[must_use]
    pub fn pos(&self) -> usize {
        self.origin + self.position
    }

    /// The text that has not been consumed yet.
    #[must_use]
    pub fn remaining(&self) -> &'a str {
        self.data.get(self.position..).unwrap_or_default()
    }

    /// Peek at the next byte without advancing.
    ///
    /// # Errors
    /// Returns [`crate::Error::MalformedSymbol`] if the cursor is at the end of the text.
    pub fn peek_byte(&self) -> Result<u8> {
        match self.data.as_bytes().get(self.position) {
            Some(byte) => Ok(*byte),
            None => Err(malformed_symbol!(self, "unexpected end of symbol")),
        }
    }

    /// Returns `true` if the next byte is `expected`. Never fails.
    #[must_use]
    pub fn next_is(&self, expected: u8) -> bool {
        self.data.as_bytes().get(self.position) == Some(&expected)
    }

    /// Move forward by one byte.
    ///
    /// # Errors
    /// Returns [`crate::Error::MalformedSymbol`] if the cursor is at the end of the text.
    pub fn advance(&mut self) -> Result<()> {
        self.advance_by(1)
    }

    /// Move forward by `step` bytes.
    ///
    /// # Errors
    /// Returns [`crate::Error::MalformedSymbol`] if fewer than `step` bytes remain.
    pub fn advance_by(&mut self, step: usize) -> Result<()> {
        if self.position + step > self.data.len() {
            return Err(malformed_symbol!(
                self,
                "expected {} more characters, found {}",
                step,
                self.data.len() - self.position
            ));
        }

        self.position += step;
        Ok(())
    }

    /// Read one byte and advance past it.
    ///
    /// # Errors
    /// Returns [`crate::Error::MalformedSymbol`] if the cursor is at the end of the text.
    pub fn read_byte(&mut self) -> Result<u8> {
        let byte = self.peek_byte()?;
        self.position += 1;
        Ok(byte)
    }

    /// Consume `expected` or fail.
    ///
    /// # Errors
    /// Returns [`crate::Error::MalformedSymbol`] if the next byte is missing or differs.
    pub fn expect_byte(&mut self, expected: u8) -> Result<()> {
        if self.next_is(expected) {
            self.position += 1;
            return Ok(());
        }

        Err(malformed_symbol!(self, "expected '{}'", expected as char))
    }

    /// Read exactly one ASCII digit.
    ///
    /// # Errors
    /// Returns [`crate::Error::MalformedSymbol`] if the next byte is missing or not a digit.
    pub fn read_digit(&mut self) -> Result<u32> {
        let byte = self.peek_byte()?;
        if !byte.is_ascii_digit() {
            return Err(malformed_symbol!(self, "expected a digit"));
        }

        self.position += 1;
        Ok(u32::from(byte - b'0'))
    }

    /// Read a run of one or more ASCII digits as a decimal number.
    ///
    /// # Errors
    /// Returns [`crate::Error::MalformedSymbol`] if no digit is present or the value does not
    /// fit into a `usize`.
    pub fn read_decimal(&mut self) -> Result<usize> {
        let digits = self.remaining().bytes().take_while(u8::is_ascii_digit).count();
        if digits == 0 {
            return Err(malformed_symbol!(self, "expected a decimal number"));
        }

        let Ok(value) = self.remaining()[..digits].parse::<usize>() else {
            return Err(malformed_symbol!(self, "decimal number out of range"));
        };

        self.position += digits;
        Ok(value)
    }

    /// Read the next `length` bytes as a string slice.
    ///
    /// # Errors
    /// Returns [`crate::Error::MalformedSymbol`] if the text is truncated or the slice would end
    /// inside a multi-byte character.
    pub fn read_str(&mut self, length: usize) -> Result<&'a str> {
        let end = self.position.checked_add(length);
        match end.and_then(|end| self.data.get(self.position..end)) {
            Some(slice) => {
                self.position += length;
                Ok(slice)
            }
            None => Err(malformed_symbol!(
                self,
                "name of length {} does not fit the remaining input",
                length
            )),
        }
    }
}
