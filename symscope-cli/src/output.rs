use std::io::{self, Write};

use comfy_table::{presets, CellAlignment, ContentArrangement, Table};
use serde::Serialize;

use crate::app::GlobalOptions;

/// Print `data` as JSON (if `--json`) or call `display_fn` for human-readable output.
pub fn print_output<T: Serialize>(
    data: &T,
    opts: &GlobalOptions,
    display_fn: impl FnOnce(&T) -> io::Result<()>,
) -> anyhow::Result<()> {
    if opts.json {
        let json = serde_json::to_string_pretty(data)?;
        println!("{json}");
    } else {
        display_fn(data)?;
    }
    Ok(())
}

/// Addresses are always shown as eight upper-case hex digits.
pub fn hex32(address: u32) -> String {
    format!("{address:08X}")
}

/// Column alignment for tabular output.
#[derive(Clone, Copy)]
pub enum Align {
    Left,
    Right,
}

/// Borderless table for symbol listings, backed by `comfy-table`.
///
/// Columns are sized to the widest entry and separated by two spaces.
pub struct TabWriter {
    table: Table,
    rows: usize,
}

impl TabWriter {
    /// Create a table with `(header, alignment)` columns.
    pub fn new(columns: &[(&str, Align)]) -> Self {
        let mut table = Table::new();
        table
            .load_preset(presets::NOTHING)
            .set_content_arrangement(ContentArrangement::Disabled)
            .set_header(columns.iter().map(|(name, _)| *name));

        let last = columns.len().saturating_sub(1);
        for (i, (_, align)) in columns.iter().enumerate() {
            if let Some(column) = table.column_mut(i) {
                column.set_cell_alignment(match align {
                    Align::Left => CellAlignment::Left,
                    Align::Right => CellAlignment::Right,
                });
                column.set_padding((u16::from(i != 0), u16::from(i != last)));
            }
        }

        Self { table, rows: 0 }
    }

    /// Add a row. Values are given in column order.
    pub fn row<I, S>(&mut self, values: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.table
            .add_row(values.into_iter().map(Into::into).collect::<Vec<String>>());
        self.rows += 1;
    }

    /// Number of rows added so far.
    pub fn len(&self) -> usize {
        self.rows
    }

    /// Returns `true` if no rows were added.
    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }

    /// Write the table to stdout, without trailing whitespace.
    pub fn print(&self) -> io::Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        for line in self.table.to_string().lines() {
            writeln!(out, "{}", line.trim_end())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex32() {
        assert_eq!(hex32(0x8000_3100), "80003100");
        assert_eq!(hex32(0x10), "00000010");
    }

    #[test]
    fn test_tab_writer_rows() {
        let mut tw = TabWriter::new(&[("Address", Align::Right), ("Declaration", Align::Left)]);
        assert!(tw.is_empty());
        tw.row([hex32(0x8000_3100), "MR::init(void)".to_string()]);
        tw.row(["80003200", "ARCOpen"]);
        assert_eq!(tw.len(), 2);
    }
}
