use std::path::Path;

use anyhow::{bail, Context};
use symscope::symbols::SymbolEntry;

/// Load a symbol list: one `ADDRESS SYMBOL` or bare `SYMBOL` per line.
///
/// Blank lines and lines starting with `#` are skipped. Bare symbols get their zero-based line
/// number as address.
pub fn load_symbol_list(path: &Path) -> anyhow::Result<Vec<SymbolEntry>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read symbol list: {}", path.display()))?;

    let entries = parse_symbol_list(&text)
        .with_context(|| format!("invalid symbol list: {}", path.display()))?;

    log::debug!("Loaded {} symbols from {}", entries.len(), path.display());
    Ok(entries)
}

fn parse_symbol_list(text: &str) -> anyhow::Result<Vec<SymbolEntry>> {
    let mut entries = Vec::new();

    for (index, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = line.split_whitespace().collect();
        let entry = match fields.as_slice() {
            [symbol] => SymbolEntry::new(index as u32, *symbol),
            [address, symbol] => {
                let Some(address) = parse_address(address) else {
                    bail!("line {}: invalid address '{address}'", index + 1);
                };
                SymbolEntry::new(address, *symbol)
            }
            _ => bail!("line {}: expected 'ADDRESS SYMBOL' or 'SYMBOL'", index + 1),
        };

        entries.push(entry);
    }

    Ok(entries)
}

/// Parse a hex address, with or without a `0x` prefix.
pub fn parse_address(text: &str) -> Option<u32> {
    let digits = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
        .unwrap_or(text);

    u32::from_str_radix(digits, 16).ok()
}
