use chrono::{DateTime, FixedOffset};
use credset_common::{CredentialSet, Error, Result};
use serde::Serialize;
use std::io::Write;
use std::str::FromStr;

use crate::source::classify;

/// Output representation for `list` and `show`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    Json,
    Yaml,
    #[default]
    Table,
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(raw: &str) -> Result<Self> {
        match raw {
            "json" => Ok(Self::Json),
            "yaml" => Ok(Self::Yaml),
            "table" => Ok(Self::Table),
            other => Err(Error::FormatInvalid(other.to_string())),
        }
    }
}

/// Render a collection of credential sets, in the order given.
pub fn render_list(sets: &[CredentialSet], format: OutputFormat, out: &mut dyn Write) -> Result<()> {
    match format {
        OutputFormat::Json => write_json(sets, out),
        OutputFormat::Yaml => write_yaml(sets, out),
        OutputFormat::Table => write_list_table(sets, out),
    }
}

/// Render a single credential set with all of its entries.
pub fn render_show(set: &CredentialSet, format: OutputFormat, out: &mut dyn Write) -> Result<()> {
    match format {
        OutputFormat::Json => write_json(set, out),
        OutputFormat::Yaml => write_yaml(set, out),
        OutputFormat::Table => write_show_table(set, out),
    }
}

fn write_json<T: Serialize + ?Sized>(value: &T, out: &mut dyn Write) -> Result<()> {
    let json = serde_json::to_string_pretty(value).map_err(std::io::Error::from)?;
    writeln!(out, "{json}")?;
    Ok(())
}

fn write_yaml<T: Serialize + ?Sized>(value: &T, out: &mut dyn Write) -> Result<()> {
    let yaml = serde_yaml::to_string(value).map_err(std::io::Error::other)?;
    // Each document is followed by a blank line.
    writeln!(out, "{yaml}")?;
    Ok(())
}

fn date(ts: &DateTime<FixedOffset>) -> String {
    ts.format("%Y-%m-%d").to_string()
}

const LIST_PADDING: usize = 3;

fn write_list_table(sets: &[CredentialSet], out: &mut dyn Write) -> Result<()> {
    let width = sets
        .iter()
        .map(|s| s.name.chars().count())
        .chain(["NAME".len()])
        .max()
        .unwrap_or_default()
        + LIST_PADDING;

    writeln!(out, "{:<width$}MODIFIED", "NAME")?;
    for set in sets {
        writeln!(out, "{:<width$}{}", set.name, date(&set.modified))?;
    }
    Ok(())
}

fn write_show_table(set: &CredentialSet, out: &mut dyn Write) -> Result<()> {
    writeln!(out, "Name: {}", set.name)?;
    writeln!(out, "Created: {}", date(&set.created))?;
    writeln!(out, "Modified: {}", date(&set.modified))?;
    writeln!(out)?;

    let mut table = BorderedTable::new(["Name", "Local Source", "Source Type"]);
    for entry in &set.credentials {
        let (value, kind) = classify(&entry.source);
        table.push([entry.name.as_str(), value, kind]);
    }
    table.write(out)
}

/// Fixed-column text table: dash rule, header, dash rule, rows.
struct BorderedTable<'a, const N: usize> {
    header: [&'a str; N],
    rows: Vec<[&'a str; N]>,
}

impl<'a, const N: usize> BorderedTable<'a, N> {
    const MARGIN: &'static str = "  ";

    fn new(header: [&'a str; N]) -> Self {
        Self {
            header,
            rows: Vec::new(),
        }
    }

    fn push(&mut self, row: [&'a str; N]) {
        self.rows.push(row);
    }

    fn widths(&self) -> [usize; N] {
        let mut widths = self.header.map(|h| h.chars().count());
        for row in &self.rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }
        widths
    }

    fn line(cells: &[&str; N], widths: &[usize; N]) -> String {
        let padded: Vec<String> = cells
            .iter()
            .zip(widths)
            .map(|(cell, &width)| format!("{cell:<width$}"))
            .collect();
        format!("{m}{}{m}", padded.join(Self::MARGIN), m = Self::MARGIN)
    }

    fn write(&self, out: &mut dyn Write) -> Result<()> {
        let widths = self.widths();
        let header = Self::line(&self.header, &widths);
        let rule = "-".repeat(header.chars().count());

        writeln!(out, "{rule}")?;
        writeln!(out, "{header}")?;
        writeln!(out, "{rule}")?;
        for row in &self.rows {
            writeln!(out, "{}", Self::line(row, &widths))?;
        }
        Ok(())
    }
}
