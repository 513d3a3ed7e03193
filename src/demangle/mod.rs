//! Decoding of CodeWarrior-style C++ mangled symbol names.
//!
//! This module reconstructs human-readable C++ declarations from the compiler-mangled names
//! found in PowerPC (GameCube / Wii era) binaries and their symbol maps. The scheme is a compact
//! text grammar: a base name, the separator `__`, then a suffix encoding the enclosing scope and,
//! for functions, the signature.
//!
//! # Grammar
//!
//! The mangled suffix is a sequence of *nodes*. Each node is introduced by a lead character:
//!
//! | Lead | Production | Rendering |
//! |---|---|---|
//! | `C` `U` `S` | prefix qualifier | `const` / `unsigned` / `signed` before the type |
//! | `P` `R` | suffix qualifier | `*` / `&` after the type |
//! | `b c w s i l x f d v e` | primitive | `bool`, `char`, ..., `...` |
//! | `Q` digit | qualified name | `A::B::C` |
//! | `A` count `_` node | array | `elem[count]` |
//! | `F` args [`_` ret] | function type | `ret ()(args)` |
//! | `M` class [`C`] `F` args [`_` ret] | member function pointer | `ret (class::*)(args)` |
//! | length chars | literal name | `chars`, template arguments decoded |
//!
//! At the top level, nodes before an `F` name the enclosing scope, a `C` marks a const member
//! function, and the `F` starts the argument list. The base name is then finalized against the
//! scope: operator codes such as `__pl` become `operator+`, `__ct` / `__dt` become the class name
//! or its destructor, and `__vt` becomes `VTable`.
//!
//! # Examples
//!
//! ```rust
//! use symscope::demangle::demangle;
//!
//! assert_eq!(
//!     demangle("makeMtxRotate__2MRFPA4_ffff")?,
//!     "MR::makeMtxRotate(float[4]*, float, float, float)"
//! );
//!
//! // Names without the separator are plain C symbols and pass through
//! assert_eq!(demangle("ARCOpen")?, "ARCOpen");
//! # Ok::<(), symscope::Error>(())
//! ```
//!
//! ```rust
//! use symscope::demangle::parse_symbol;
//!
//! let decl = parse_symbol("__dt__18MorphItemNeoTeresaFv")?.unwrap();
//! assert_eq!(decl.name, "~MorphItemNeoTeresa");
//! assert_eq!(decl.arguments, Some(vec!["void".to_string()]));
//! # Ok::<(), symscope::Error>(())
//! ```
//!
//! # Implementation Notes
//!
//! - Every decode step consumes input or fails; there is no backtracking.
//! - Decoding is a pure function of the input. No state survives a call, so symbols can be
//!   decoded from any number of threads at once.
//! - The decoded tree is never materialized; each step returns its rendered text.

mod cursor;
mod name;
mod parser;
mod tables;
mod templates;
mod types;

pub use cursor::*;
pub use name::*;
pub use parser::*;
pub use tables::*;
pub use templates::*;
pub use types::*;

use crate::Result;

/// Separator between the base name and the mangled suffix
const SEPARATOR: &str = "__";

/// Returns `true` if `symbol` has a mangled suffix, i.e. a `__` at an index greater than zero.
///
/// ## Arguments
/// * 'symbol' - The symbol to inspect
#[must_use]
pub fn is_mangled(symbol: &str) -> bool {
    split_symbol(symbol).is_some()
}

/// Decode `symbol` into its structured declaration.
///
/// Returns `Ok(None)` for symbols without a mangled suffix.
///
/// ## Arguments
/// * 'symbol' - The symbol to decode
///
/// # Errors
/// Returns [`crate::Error::MalformedSymbol`] if the mangled suffix does not follow the grammar
pub fn parse_symbol(symbol: &str) -> Result<Option<Declaration>> {
    let Some(split) = split_symbol(symbol) else {
        return Ok(None);
    };

    let base = &symbol[..split];
    let origin = split + SEPARATOR.len();

    let mut parser = SymbolParser::with_origin(&symbol[origin..], origin);
    parser.parse_declaration(base).map(Some)
}

/// Decode `symbol` into declaration text.
///
/// Symbols without a mangled suffix are returned unchanged.
///
/// ## Arguments
/// * 'symbol' - The symbol to decode
///
/// # Errors
/// Returns [`crate::Error::MalformedSymbol`] if the mangled suffix does not follow the grammar
pub fn demangle(symbol: &str) -> Result<String> {
    match parse_symbol(symbol)? {
        Some(declaration) => Ok(declaration.to_string()),
        None => Ok(symbol.to_string()),
    }
}

/// Decode `symbol` for display, falling back to the raw text if it cannot be decoded.
///
/// ## Arguments
/// * 'symbol' - The symbol to decode
#[must_use]
pub fn demangle_or_original(symbol: &str) -> String {
    match demangle(symbol) {
        Ok(declaration) => declaration,
        Err(error) => {
            log::debug!("Keeping raw symbol {symbol}: {error}");
            symbol.to_string()
        }
    }
}

/// Index of the last separator, if it is past the first character.
fn split_symbol(symbol: &str) -> Option<usize> {
    symbol.rfind(SEPARATOR).filter(|&split| split > 0)
}
