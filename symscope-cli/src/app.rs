use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// symscope - decode, validate and search CodeWarrior C++ symbol names
#[derive(Debug, Parser)]
#[command(name = "symscope", version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOptions,

    #[command(subcommand)]
    pub command: Command,
}

/// Options shared across all subcommands.
#[derive(Debug, Parser)]
pub struct GlobalOptions {
    /// Emit output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable verbose (debug-level) logging output.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Decode one or more mangled symbols into declarations.
    Demangle {
        /// Symbols to decode. Plain C names are printed unchanged.
        #[arg(value_name = "SYMBOL", required = true)]
        symbols: Vec<String>,
    },

    /// Report every symbol of a symbol list that fails to decode.
    Validate {
        /// Symbol list: one `ADDRESS SYMBOL` or `SYMBOL` per line.
        #[arg(value_name = "FILE")]
        path: PathBuf,
    },

    /// List symbols whose declaration contains a pattern (case-insensitive).
    Search {
        /// Symbol list: one `ADDRESS SYMBOL` or `SYMBOL` per line.
        #[arg(value_name = "FILE")]
        path: PathBuf,

        /// Text to look for in the decoded declarations.
        #[arg(value_name = "PATTERN")]
        pattern: String,
    },

    /// Print `ADDRESS NAME` lines with space-free declarations for symbol map import.
    Map {
        /// Symbol list: one `ADDRESS SYMBOL` or `SYMBOL` per line.
        #[arg(value_name = "FILE")]
        path: PathBuf,
    },

    /// Decode a built-in table of known symbols and compare with the expected declarations.
    Selftest,
}
