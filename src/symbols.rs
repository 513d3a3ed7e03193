//! Batch passes over symbol lists.
//!
//! Symbol tables of a reverse-engineering project are usually kept as `(address, symbol)` pairs.
//! The helpers here run the decoder over such lists for the common passes: a validation sweep
//! that only reports symbols that fail to decode, a case-insensitive search over declarations,
//! and the compact declaration spelling used when exporting symbol maps. Storage of the list is
//! left to the caller.
//!
//! # Examples
//!
//! ```rust
//! use symscope::symbols::{search_symbols, validate_symbols, SymbolEntry};
//!
//! let entries = vec![
//!     SymbolEntry::new(0x8000_3100, "__dt__18MorphItemNeoTeresaFv"),
//!     SymbolEntry::new(0x8000_3200, "broken__3FooFz"),
//! ];
//!
//! let failures = validate_symbols(&entries);
//! assert_eq!(failures.len(), 1);
//! assert_eq!(
//!     failures[0].to_string(),
//!     "Failed to demangle symbol at 0x80003200: broken__3FooFz"
//! );
//!
//! let found = search_symbols(&entries, "~morph");
//! assert_eq!(found[0].address, 0x8000_3100);
//! ```

use std::fmt;

use rayon::prelude::*;

use crate::{demangle::demangle, Error};

/// A symbol and the address it is placed at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolEntry {
    /// Load address of the symbol
    pub address: u32,
    /// Mangled (or plain) symbol text; empty for unnamed functions
    pub symbol: String,
}

impl SymbolEntry {
    /// Create a new entry.
    pub fn new(address: u32, symbol: impl Into<String>) -> Self {
        SymbolEntry {
            address,
            symbol: symbol.into(),
        }
    }
}

/// A symbol that could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemangleFailure {
    /// Address of the offending symbol
    pub address: u32,
    /// The symbol text
    pub symbol: String,
    /// Why decoding failed
    pub error: Error,
}

impl fmt::Display for DemangleFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Failed to demangle symbol at 0x{:08X}: {}",
            self.address, self.symbol
        )
    }
}

/// Decode every named symbol and collect the ones that fail, ordered by address.
///
/// Empty symbols are skipped. The decoded text is discarded; this pass only detects failures.
/// Symbols are decoded in parallel.
#[must_use]
pub fn validate_symbols(entries: &[SymbolEntry]) -> Vec<DemangleFailure> {
    let mut failures: Vec<DemangleFailure> = entries
        .par_iter()
        .filter(|entry| !entry.symbol.is_empty())
        .filter_map(|entry| {
            demangle(&entry.symbol).err().map(|error| DemangleFailure {
                address: entry.address,
                symbol: entry.symbol.clone(),
                error,
            })
        })
        .collect();

    failures.sort_by_key(|failure| failure.address);
    for failure in &failures {
        log::debug!("{failure} ({})", failure.error);
    }

    failures
}

/// Entries whose declaration contains `pattern`, ignoring case.
///
/// Empty and undecodable symbols never match. Input order is preserved.
#[must_use]
pub fn search_symbols<'e>(entries: &'e [SymbolEntry], pattern: &str) -> Vec<&'e SymbolEntry> {
    let pattern = pattern.to_lowercase();

    entries
        .par_iter()
        .filter(|entry| !entry.symbol.is_empty())
        .filter(|entry| match demangle(&entry.symbol) {
            Ok(declaration) => declaration.to_lowercase().contains(&pattern),
            Err(_) => false,
        })
        .collect()
}

/// Declaration text without spaces, as written into exported symbol maps.
///
/// Falls back to the raw symbol if it cannot be decoded.
#[must_use]
pub fn map_name(symbol: &str) -> String {
    match demangle(symbol) {
        Ok(declaration) => declaration.replace(' ', ""),
        Err(_) => symbol.to_string(),
    }
}
