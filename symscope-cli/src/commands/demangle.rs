use anyhow::bail;
use serde::Serialize;
use symscope::demangle::demangle;

use crate::{app::GlobalOptions, output::print_output};

#[derive(Debug, Serialize)]
struct DemangleEntry {
    symbol: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    declaration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

pub fn run(symbols: &[String], opts: &GlobalOptions) -> anyhow::Result<()> {
    let entries: Vec<DemangleEntry> = symbols
        .iter()
        .map(|symbol| match demangle(symbol) {
            Ok(declaration) => DemangleEntry {
                symbol: symbol.clone(),
                declaration: Some(declaration),
                error: None,
            },
            Err(e) => DemangleEntry {
                symbol: symbol.clone(),
                declaration: None,
                error: Some(e.to_string()),
            },
        })
        .collect();

    print_output(&entries, opts, |entries| {
        for entry in entries {
            match (&entry.declaration, &entry.error) {
                (Some(declaration), _) => println!("{declaration}"),
                (None, Some(error)) => log::error!("{}: {error}", entry.symbol),
                (None, None) => {}
            }
        }
        Ok(())
    })?;

    let failed = entries.iter().filter(|e| e.error.is_some()).count();
    if failed > 0 {
        bail!("{failed} of {} symbol(s) failed to demangle", entries.len());
    }

    Ok(())
}
