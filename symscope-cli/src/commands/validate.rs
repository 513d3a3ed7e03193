use std::path::Path;

use anyhow::bail;
use serde::Serialize;
use symscope::symbols::validate_symbols;

use crate::{
    app::GlobalOptions,
    commands::common::load_symbol_list,
    output::{hex32, print_output},
};

#[derive(Debug, Serialize)]
struct FailureEntry {
    address: String,
    symbol: String,
    offset: usize,
    error: String,
}

#[derive(Debug, Serialize)]
struct ValidationResult {
    path: String,
    checked: usize,
    valid: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    failures: Vec<FailureEntry>,
}

pub fn run(path: &Path, opts: &GlobalOptions) -> anyhow::Result<()> {
    let entries = load_symbol_list(path)?;
    let failures = validate_symbols(&entries);

    let result = ValidationResult {
        path: path.display().to_string(),
        checked: entries.iter().filter(|e| !e.symbol.is_empty()).count(),
        valid: failures.is_empty(),
        failures: failures
            .iter()
            .map(|failure| FailureEntry {
                address: hex32(failure.address),
                symbol: failure.symbol.clone(),
                offset: failure.error.offset(),
                error: failure.error.to_string(),
            })
            .collect(),
    };

    print_output(&result, opts, |r| {
        for failure in &failures {
            println!("{failure}");
        }
        log::info!(
            "{} symbol(s) checked, {} failed",
            r.checked,
            r.failures.len()
        );
        Ok(())
    })?;

    if !result.valid {
        bail!(
            "{} symbol(s) in {} failed to demangle",
            result.failures.len(),
            result.path
        );
    }

    Ok(())
}
