use thiserror::Error;

macro_rules! malformed_symbol {
    // Single string version
    ($cursor:expr, $msg:expr) => {
        crate::Error::MalformedSymbol {
            message: $msg.to_string(),
            remaining: $cursor.remaining().to_string(),
            offset: $cursor.pos(),
        }
    };

    // Format string with arguments version
    ($cursor:expr, $fmt:expr, $($arg:tt)*) => {
        crate::Error::MalformedSymbol {
            message: format!($fmt, $($arg)*),
            remaining: $cursor.remaining().to_string(),
            offset: $cursor.pos(),
        }
    };
}

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// Decoding a symbol can only fail in one way: the mangled text does not follow the grammar.
/// That covers an unknown leading character, a truncated production (a missing length, count,
/// closing `>` or `_` terminator), and input left over after a function signature that should
/// have consumed everything. A symbol without the `__` separator is never an error, it is
/// passed through unchanged.
///
/// Errors are not recovered internally. Any failure aborts the decode of that symbol and the
/// caller decides whether to fall back to the raw text (see
/// [`crate::demangle::demangle_or_original`]) or to report it.
///
/// # Examples
///
/// ```rust
/// use symscope::{demangle, Error};
///
/// match demangle("foo__Fz") {
///     Ok(decl) => println!("{decl}"),
///     Err(Error::MalformedSymbol { message, remaining, offset }) => {
///         eprintln!("bad symbol at {offset}: {message} ('{remaining}')");
///     }
/// }
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The mangled suffix could not be decoded.
    ///
    /// # Fields
    ///
    /// * `message` - What the decoder expected and did not find
    /// * `remaining` - The unconsumed input at the point of failure
    /// * `offset` - Byte offset of that point within the whole symbol
    #[error("Malformed symbol at offset {offset}: {message} (remaining: '{remaining}')")]
    MalformedSymbol {
        /// Description of the grammar violation
        message: String,
        /// Input that was left when decoding stopped
        remaining: String,
        /// Byte offset into the original symbol
        offset: usize,
    },
}

impl Error {
    /// Byte offset into the original symbol at which decoding failed.
    #[must_use]
    pub fn offset(&self) -> usize {
        match self {
            Error::MalformedSymbol { offset, .. } => *offset,
        }
    }
}
