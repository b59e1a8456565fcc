//! Table Printer
//!
//! Renders a report under its registry column sequence, either as aligned
//! text (tabwriter style, using the registry's width and padding) or as
//! JSON/YAML for scripting.

use crate::error::{Error, Result};
use serde::Serialize;
use std::fmt;
use std::io::Write;
use tracing::debug;

use super::column::{ColumnType, ReportKind, TableColumnDefinition};
use super::constant::{MAX_WIDTH, MIN_WIDTH, PADDING};

// =============================================================================
// Output Format
// =============================================================================

/// How a table is written out
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Yaml,
}

// =============================================================================
// Cells and Rows
// =============================================================================

/// A single typed cell
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Cell {
    Str(String),
    Bool(bool),
    Int(i64),
}

impl Cell {
    pub fn column_type(&self) -> ColumnType {
        match self {
            Cell::Str(_) => ColumnType::String,
            Cell::Bool(_) => ColumnType::Bool,
            Cell::Int(_) => ColumnType::Int,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Str(s) => f.write_str(s),
            Cell::Bool(b) => write!(f, "{}", b),
            Cell::Int(i) => write!(f, "{}", i),
        }
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Cell::Str(s.to_string())
    }
}

impl From<String> for Cell {
    fn from(s: String) -> Self {
        Cell::Str(s)
    }
}

impl From<bool> for Cell {
    fn from(b: bool) -> Self {
        Cell::Bool(b)
    }
}

impl From<i64> for Cell {
    fn from(i: i64) -> Self {
        Cell::Int(i)
    }
}

/// One row of cells, in column order
pub type TableRow = Vec<Cell>;

// =============================================================================
// Table
// =============================================================================

/// Rows bound to the column sequence of one report kind
#[derive(Debug, Clone)]
pub struct Table {
    kind: ReportKind,
    columns: &'static [TableColumnDefinition],
    rows: Vec<TableRow>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TableDocument<'a> {
    column_definitions: &'a [TableColumnDefinition],
    rows: &'a [TableRow],
}

impl Table {
    pub fn new(kind: ReportKind) -> Self {
        Self {
            kind,
            columns: kind.columns(),
            rows: Vec::new(),
        }
    }

    pub fn kind(&self) -> ReportKind {
        self.kind
    }

    pub fn columns(&self) -> &'static [TableColumnDefinition] {
        self.columns
    }

    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    /// Append a row after checking its arity and cell types
    pub fn add_row(&mut self, row: TableRow) -> Result<()> {
        if row.len() != self.columns.len() {
            return Err(Error::RowShape {
                report: self.kind.to_string(),
                expected: self.columns.len(),
                actual: row.len(),
            });
        }

        for (column, cell) in self.columns.iter().zip(&row) {
            if cell.column_type() != column.column_type {
                return Err(Error::CellType {
                    column: column.name.to_string(),
                    expected: column.column_type.to_string(),
                    actual: cell.column_type().to_string(),
                });
            }
        }

        self.rows.push(row);
        Ok(())
    }

    /// Write the table in the requested format
    pub fn render<W: Write>(&self, out: &mut W, format: OutputFormat) -> Result<()> {
        debug!(report = %self.kind, rows = self.rows.len(), ?format, "rendering table");

        match format {
            OutputFormat::Table => self.render_text(out),
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut *out, &self.document())?;
                writeln!(out)?;
                Ok(())
            }
            OutputFormat::Yaml => {
                serde_yaml::to_writer(&mut *out, &self.document())?;
                Ok(())
            }
        }
    }

    /// Render to a string, mostly for tests and small outputs
    pub fn render_to_string(&self, format: OutputFormat) -> Result<String> {
        let mut buf = Vec::new();
        self.render(&mut buf, format)?;
        Ok(String::from_utf8(buf)?)
    }

    fn document(&self) -> TableDocument<'_> {
        TableDocument {
            column_definitions: self.columns,
            rows: &self.rows,
        }
    }

    fn render_text<W: Write>(&self, out: &mut W) -> Result<()> {
        let header: Vec<String> = self.columns.iter().map(|c| c.name.to_uppercase()).collect();
        let body: Vec<Vec<String>> = self
            .rows
            .iter()
            .map(|row| row.iter().map(|cell| clip(cell.to_string())).collect())
            .collect();
        write_aligned(out, &header, &body)
    }
}

/// Write a header and rows as left-aligned, padded columns
pub fn write_aligned<W: Write>(out: &mut W, header: &[String], body: &[Vec<String>]) -> Result<()> {
    let mut widths: Vec<usize> = header.iter().map(|h| h.chars().count().max(MIN_WIDTH)).collect();
    for row in body {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    for line in std::iter::once(header).chain(body.iter().map(Vec::as_slice)) {
        let mut text = String::new();
        for (cell, width) in line.iter().zip(&widths) {
            text.push_str(cell);
            let fill = width + PADDING - cell.chars().count();
            text.extend(std::iter::repeat(' ').take(fill));
        }
        writeln!(out, "{}", text.trim_end())?;
    }
    Ok(())
}

fn clip(cell: String) -> String {
    if MAX_WIDTH == 0 || cell.chars().count() <= MAX_WIDTH {
        cell
    } else {
        cell.chars().take(MAX_WIDTH).collect()
    }
}
