// 🧹 Raw sheet model + whitespace cleaning
// Every sheet is read into a Table of Cells before any typed access

use crate::error::{ProfileError, Result};
use serde::Serialize;
use std::collections::HashMap;

// ============================================================================
// CELL
// ============================================================================

/// One spreadsheet value. `Missing` is the missing-data marker.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Cell {
    Missing,
    Text(String),
    Number(f64),
    Bool(bool),
}

impl Cell {
    pub fn is_missing(&self) -> bool {
        matches!(self, Cell::Missing)
    }

    /// Text form of the value, `None` for a missing cell.
    /// Integral numbers render without a fractional part so phone numbers
    /// stored as numbers come out as plain digits.
    pub fn as_text(&self) -> Option<String> {
        match self {
            Cell::Missing => None,
            Cell::Text(s) => Some(s.clone()),
            Cell::Number(n) => {
                if n.fract() == 0.0 && n.abs() < 1e15 {
                    Some(format!("{}", *n as i64))
                } else {
                    Some(format!("{}", n))
                }
            }
            Cell::Bool(b) => Some(if *b { "True" } else { "False" }.to_string()),
        }
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Cell::Text(s.to_string())
    }
}

// ============================================================================
// CLEANING
// ============================================================================

/// Normalize a column name: NBSP becomes a space, line breaks are dropped,
/// surrounding whitespace is trimmed.
pub fn clean_header(header: &str) -> String {
    header
        .replace('\u{a0}', " ")
        .replace('\n', "")
        .replace('\r', "")
        .trim()
        .to_string()
}

pub fn clean_headers(headers: &[String]) -> Vec<String> {
    headers.iter().map(|h| clean_header(h)).collect()
}

/// Text cells get NBSP → space and a trim. Other cells pass through.
pub fn clean_cell(cell: Cell) -> Cell {
    match cell {
        Cell::Text(s) => Cell::Text(s.replace('\u{a0}', " ").trim().to_string()),
        other => other,
    }
}

/// Build a header row from the first sheet row.
/// Blank cells become `Unnamed: {index}`, repeats get `.1`, `.2`, ... suffixes.
pub fn header_row(cells: &[Cell]) -> Vec<String> {
    let mut seen: HashMap<String, usize> = HashMap::new();
    let mut headers = Vec::with_capacity(cells.len());

    for (idx, cell) in cells.iter().enumerate() {
        let base = match cell.as_text() {
            Some(text) if !text.trim().is_empty() => text,
            _ => format!("Unnamed: {}", idx),
        };

        let name = match seen.get_mut(&base) {
            Some(count) => {
                *count += 1;
                format!("{}.{}", base, count)
            }
            None => base.clone(),
        };
        seen.entry(base).or_insert(0);
        headers.push(name);
    }

    headers
}

// ============================================================================
// TABLE
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    name: String,
    headers: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl Table {
    /// Rows shorter than the header are padded with `Missing`, longer rows truncated.
    pub fn new(name: impl Into<String>, headers: Vec<String>, rows: Vec<Vec<Cell>>) -> Self {
        let width = headers.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, Cell::Missing);
                row
            })
            .collect();

        Table {
            name: name.into(),
            headers,
            rows,
        }
    }

    /// First sheet row is the header; fully blank data rows are skipped.
    pub fn from_grid(name: impl Into<String>, grid: Vec<Vec<Cell>>) -> Self {
        let mut grid = grid.into_iter();
        let headers = grid.next().map(|first| header_row(&first)).unwrap_or_default();
        let rows = grid
            .filter(|row| row.iter().any(|cell| !cell.is_missing()))
            .collect();

        Table::new(name, headers, rows)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, header: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == header)
    }

    pub fn require_column(&self, header: &str) -> Result<usize> {
        self.column_index(header)
            .ok_or_else(|| ProfileError::MissingColumn {
                sheet: self.name.clone(),
                column: header.to_string(),
            })
    }

    pub fn cell(&self, row: usize, col: usize) -> &Cell {
        static MISSING: Cell = Cell::Missing;
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .unwrap_or(&MISSING)
    }

    /// Clean every header and every text cell.
    pub fn clean(self) -> Self {
        Table {
            name: self.name,
            headers: clean_headers(&self.headers),
            rows: self
                .rows
                .into_iter()
                .map(|row| row.into_iter().map(clean_cell).collect())
                .collect(),
        }
    }
}
