// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
#![deny(unsafe_code)]

//! # symscope
//!
//! [![Crates.io](https://img.shields.io/crates/v/symscope.svg)](https://crates.io/crates/symscope)
//! [![Documentation](https://docs.rs/symscope/badge.svg)](https://docs.rs/symscope)
//! [![License](https://img.shields.io/badge/license-Apache--2.0-blue.svg)](https://github.com/BinFlip/symscope/blob/main/LICENSE-APACHE)
//!
//! A fast decoder for the C++ symbol names emitted by the CodeWarrior toolchain for PowerPC
//! (GameCube / Wii) targets. `symscope` turns linker-visible names such as
//! `__ct<i>__Q29JGeometry8TVec3<f>Fiii_Pv` back into the declarations they encode
//! (`void* JGeometry::TVec3<float>::TVec3<int>(int, int, int)`), which is the first step when
//! reconstructing headers for a decompilation project.
//!
//! ## Features
//!
//! - **🔍 Complete grammar** - Qualified names, templates, arrays, function and member function
//!   pointer types, operators, constructors, destructors and vtables
//! - **🛡️ Total** - Every input either decodes or yields a typed [`Error`]; nothing panics
//! - **⚡ Stateless** - No global mutable state, decode from as many threads as you like
//! - **📊 Structured output** - Get the rendered text or the [`demangle::Declaration`] pieces
//!
//! ## Quick Start
//!
//! ```rust
//! use symscope::demangle;
//!
//! let decl = demangle("findElement<l>__8JMapInfoCFPCcli_12JMapInfoIter")?;
//! assert_eq!(decl, "JMapInfoIter JMapInfo::findElement<long>(const char*, long, int) const");
//! # Ok::<(), symscope::Error>(())
//! ```
//!
//! Plain C symbols are not an error, they come back unchanged:
//!
//! ```rust
//! assert_eq!(symscope::demangle("ARCOpen")?, "ARCOpen");
//! # Ok::<(), symscope::Error>(())
//! ```
//!
//! ## Architecture
//!
//! - [`demangle`](mod@demangle) - The grammar decoder: cursor, code tables, node parser, name resolver
//! - [`symbols`] - Batch passes (validation sweep, search, map names) over symbol lists
//! - [`Error`] and [`Result`] - Error handling
//!
//! ## Error Handling
//!
//! All decoding returns [`Result<T, Error>`](Result). The only failure is
//! [`Error::MalformedSymbol`], which carries the unconsumed input and its byte offset:
//!
//! ```rust
//! use symscope::{demangle, Error};
//!
//! match demangle("update__8ActorMgrFz") {
//!     Ok(decl) => println!("{decl}"),
//!     Err(Error::MalformedSymbol { offset, .. }) => println!("bad symbol at byte {offset}"),
//! }
//! ```
//!
//! ## Development and Testing
//!
//! ```bash
//! cargo test
//! cargo bench
//!
//! # Fuzzing
//! cargo +nightly fuzz run demangle --release
//! ```
#[macro_use]
pub(crate) mod error;

/// Grammar decoder for mangled symbol names
///
/// This module implements the complete decoder:
///
/// - **Cursor**: Bounds-checked reading of the mangled text with absolute offsets
/// - **Tables**: Primitive, qualifier and operator codes
/// - **Parser**: Recursive descent over nodes and argument lists
/// - **Name resolution**: Operators, constructors, destructors and template arguments
///
/// # Main Functions
///
/// - [`demangle::demangle`] - Symbol in, declaration text out
/// - [`demangle::parse_symbol`] - Symbol in, structured [`demangle::Declaration`] out
/// - [`demangle::demangle_or_original`] - Display helper that never fails
///
/// # Examples
///
/// ```rust
/// use symscope::demangle::{demangle, parse_symbol};
///
/// let text = demangle("__dt__18MorphItemNeoTeresaFv")?;
/// assert_eq!(text, "MorphItemNeoTeresa::~MorphItemNeoTeresa(void)");
///
/// let decl = parse_symbol("__dt__18MorphItemNeoTeresaFv")?.unwrap();
/// assert_eq!(decl.namespace.as_deref(), Some("MorphItemNeoTeresa"));
/// # Ok::<(), symscope::Error>(())
/// ```
pub mod demangle;

/// Validation, search and map export over `(address, symbol)` lists
pub mod symbols;

/// `symscope` Result type
///
/// A type alias for [`std::result::Result<T, Error>`] where the error type is always [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// `symscope` Error type
///
/// See [`Error::MalformedSymbol`] for the information carried with a failure.
pub use error::Error;

/// Decode a symbol into declaration text. See [`demangle::demangle`].
pub use demangle::demangle;
