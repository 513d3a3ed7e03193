use std::path::Path;

use serde::Serialize;
use symscope::{demangle::demangle_or_original, symbols::search_symbols};

use crate::{
    app::GlobalOptions,
    commands::common::load_symbol_list,
    output::{hex32, print_output, Align, TabWriter},
};

#[derive(Debug, Serialize)]
struct SearchMatch {
    address: String,
    symbol: String,
    declaration: String,
}

#[derive(Debug, Serialize)]
struct SearchOutput {
    pattern: String,
    matches: Vec<SearchMatch>,
}

pub fn run(path: &Path, pattern: &str, opts: &GlobalOptions) -> anyhow::Result<()> {
    let entries = load_symbol_list(path)?;

    let matches = search_symbols(&entries, pattern)
        .into_iter()
        .map(|entry| SearchMatch {
            address: hex32(entry.address),
            symbol: entry.symbol.clone(),
            declaration: demangle_or_original(&entry.symbol),
        })
        .collect();

    let output = SearchOutput {
        pattern: pattern.to_string(),
        matches,
    };

    print_output(&output, opts, |out| {
        let mut tw = TabWriter::new(&[("Address", Align::Right), ("Declaration", Align::Left)]);
        for m in &out.matches {
            tw.row([m.address.as_str(), m.declaration.as_str()]);
        }

        if tw.is_empty() {
            println!("No symbols match '{}'.", out.pattern);
            return Ok(());
        }

        tw.print()?;
        println!("\n{} match(es).", tw.len());
        Ok(())
    })
}
