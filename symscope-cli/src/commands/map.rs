use std::path::Path;

use serde::Serialize;
use symscope::symbols::map_name;

use crate::{
    app::GlobalOptions,
    commands::common::load_symbol_list,
    output::{hex32, print_output},
};

#[derive(Debug, Serialize)]
struct MapEntry {
    address: String,
    name: String,
}

pub fn run(path: &Path, opts: &GlobalOptions) -> anyhow::Result<()> {
    let entries: Vec<MapEntry> = load_symbol_list(path)?
        .iter()
        .filter(|entry| !entry.symbol.is_empty())
        .map(|entry| MapEntry {
            address: hex32(entry.address),
            name: map_name(&entry.symbol),
        })
        .collect();

    print_output(&entries, opts, |entries| {
        for entry in entries {
            println!("{} {}", entry.address, entry.name);
        }
        Ok(())
    })
}
