//! Terminal output: fixed column templates, JSON, and colored status lines
//!
//! Colors respect NO_COLOR, CLICOLOR, CLICOLOR_FORCE automatically.

use std::io::Write;
use std::str::FromStr;

use clap::ValueEnum;
use colored::Colorize;
use comfy_table::{presets, ContentArrangement, Table};
use serde::Serialize;

use crate::cli::{CliError, CliResult};
use crate::domain::{ApiKey, Container};

/// Column gap between table cells.
const COLUMN_GAP: u16 = 3;

/// How command results are rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Fixed column template
    #[default]
    Plain,
    /// Pretty-printed JSON of the API response
    Json,
}

impl FromStr for OutputFormat {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" | "plain" => Ok(OutputFormat::Plain),
            "json" => Ok(OutputFormat::Json),
            other => Err(CliError::InvalidArgs(format!(
                "unsupported output format '{other}' (expected plain or json)"
            ))),
        }
    }
}

/// Writes one command result in the selected format.
pub struct Printer<'a> {
    format: OutputFormat,
    out: &'a mut dyn Write,
}

impl<'a> Printer<'a> {
    pub fn new(format: OutputFormat, out: &'a mut dyn Write) -> Self {
        Self { format, out }
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Print `value` as JSON, or through `template` in plain mode.
    pub fn print<T, F>(&mut self, value: &T, template: F) -> CliResult<()>
    where
        T: Serialize + ?Sized,
        F: FnOnce(&T) -> String,
    {
        let rendered = match self.format {
            OutputFormat::Json => serde_json::to_string_pretty(value)?,
            OutputFormat::Plain => template(value),
        };
        writeln!(self.out, "{}", rendered.trim_end())?;
        Ok(())
    }
}

/// Render rows under a header, columns left aligned, no borders.
pub fn render_table(header: &[&str], rows: Vec<Vec<String>>) -> String {
    let mut table = Table::new();
    table
        .load_preset(presets::NOTHING)
        .set_content_arrangement(ContentArrangement::Disabled)
        .set_header(header.to_vec());
    for row in rows {
        table.add_row(row);
    }
    for column in table.column_iter_mut() {
        column.set_padding((0, COLUMN_GAP));
    }
    table
        .lines()
        .map(|line| line.trim_end().to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

/// `ID PROVIDER REGION ATLAS CIDR PROVISIONED`
pub fn containers_template(containers: &[Container]) -> String {
    let rows = containers
        .iter()
        .map(|c| {
            vec![
                c.id.clone().unwrap_or_default(),
                c.provider_name.clone().unwrap_or_default(),
                c.display_region().to_string(),
                c.atlas_cidr_block.clone().unwrap_or_default(),
                c.provisioned.map(|p| p.to_string()).unwrap_or_default(),
            ]
        })
        .collect();
    render_table(
        &["ID", "PROVIDER", "REGION", "ATLAS CIDR", "PROVISIONED"],
        rows,
    )
}

/// `ID DESCRIPTION PUBLIC KEY PRIVATE KEY`
pub fn api_keys_template(keys: &[ApiKey]) -> String {
    let rows = keys
        .iter()
        .map(|k| {
            vec![
                k.id.clone(),
                k.desc.clone(),
                k.public_key.clone(),
                k.private_key.clone(),
            ]
        })
        .collect();
    render_table(&["ID", "DESCRIPTION", "PUBLIC KEY", "PRIVATE KEY"], rows)
}

/// Single API key, same columns as the list.
pub fn api_key_template(key: &ApiKey) -> String {
    api_keys_template(std::slice::from_ref(key))
}

/// Print error (red bold "error:" prefix) to stderr
pub fn error(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}

/// Print success status (green checkmark)
pub fn success(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{} {}", "✓".green(), msg);
}

/// Print plain output (no color, for data)
pub fn info(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{}", msg);
}
