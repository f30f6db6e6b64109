//! Output rendering
//!
//! Writes command results as a table, JSON, or bare values.

use std::io::{self, Write};

use clap::ValueEnum;
use comfy_table::Table;
use comfy_table::presets::UTF8_FULL;
use serde_json::{Map, Value};

use crate::command::{Listing, ShowData};
use crate::error::CliResult;
use crate::format::render_value;

/// Output format for command results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Bordered table
    #[default]
    Table,
    /// JSON object or array
    Json,
    /// Values only, space separated
    Value,
}

/// Print a single record to stdout
pub fn print_show(data: &ShowData, format: OutputFormat) -> CliResult<()> {
    let stdout = io::stdout();
    write_show(data, format, &mut stdout.lock())
}

/// Print a listing to stdout
pub fn print_list(listing: Listing, format: OutputFormat) -> CliResult<()> {
    let stdout = io::stdout();
    write_list(listing, format, &mut stdout.lock())
}

pub fn write_show(data: &ShowData, format: OutputFormat, out: &mut impl Write) -> CliResult<()> {
    match format {
        OutputFormat::Table => {
            let mut table = Table::new();
            table.load_preset(UTF8_FULL);
            table.set_header(vec!["Field", "Value"]);
            for (column, value) in data.columns.iter().zip(&data.values) {
                table.add_row(vec![column.clone(), render_value(value)]);
            }
            writeln!(out, "{table}")?;
        }
        OutputFormat::Json => {
            let object: Map<String, Value> = data
                .columns
                .iter()
                .cloned()
                .zip(data.values.iter().cloned())
                .collect();
            writeln!(out, "{}", serde_json::to_string_pretty(&object)?)?;
        }
        OutputFormat::Value => {
            for value in &data.values {
                writeln!(out, "{}", render_value(value))?;
            }
        }
    }
    Ok(())
}

pub fn write_list(listing: Listing, format: OutputFormat, out: &mut impl Write) -> CliResult<()> {
    let Listing { columns, rows } = listing;
    if columns.is_empty() {
        return Ok(());
    }

    match format {
        OutputFormat::Table => {
            let mut table = Table::new();
            table.load_preset(UTF8_FULL);
            table.set_header(columns);
            for row in rows {
                table.add_row(row);
            }
            writeln!(out, "{table}")?;
        }
        OutputFormat::Json => {
            let objects: Vec<Map<String, Value>> = rows
                .map(|row| {
                    columns
                        .iter()
                        .cloned()
                        .zip(row.into_iter().map(Value::String))
                        .collect()
                })
                .collect();
            writeln!(out, "{}", serde_json::to_string_pretty(&objects)?)?;
        }
        OutputFormat::Value => {
            for row in rows {
                writeln!(out, "{}", row.join(" "))?;
            }
        }
    }
    Ok(())
}
