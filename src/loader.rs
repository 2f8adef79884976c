// 📂 Data Loader - workbook (calamine) or CSV export → cleaned tables
//
// Both sources produce the same raw grid of Cells; cleaning and column
// validation are shared.

use crate::error::{ProfileError, Result};
use crate::records::{DistrictTable, InfluencerTable};
use crate::table::{Cell, Table};
use calamine::{open_workbook_auto, Data, Reader};
use log::info;
use std::path::{Path, PathBuf};

pub const DISTRICT_SHEET: &str = "District Mapping";
pub const INFLUENCER_SHEET: &str = "इन\u{94d}\u{200d}फ\u{94d}लुऐंशर लिस\u{94d}\u{200d}ट MP";

/// Where the two sheets come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// Any spreadsheet calamine can open (xlsx, xls, xlsb, ods)
    Workbook(PathBuf),
    /// Directory holding one `<sheet name>.csv` per sheet
    CsvDir(PathBuf),
}

impl Source {
    /// Directories are CSV exports, anything else is a workbook.
    pub fn detect(path: &Path) -> Self {
        if path.is_dir() {
            Source::CsvDir(path.to_path_buf())
        } else {
            Source::Workbook(path.to_path_buf())
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            Source::Workbook(p) | Source::CsvDir(p) => p,
        }
    }
}

/// Sheet names to read from a source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetNames {
    pub districts: String,
    pub influencers: String,
}

impl Default for SheetNames {
    fn default() -> Self {
        SheetNames {
            districts: DISTRICT_SHEET.to_string(),
            influencers: INFLUENCER_SHEET.to_string(),
        }
    }
}

/// Read both sheets, clean them and resolve their columns.
pub fn load_and_clean(source: &Source, sheets: &SheetNames) -> Result<(DistrictTable, InfluencerTable)> {
    let (district_raw, influencer_raw) = match source {
        Source::Workbook(path) => read_workbook(path, sheets)?,
        Source::CsvDir(dir) => (
            read_csv_sheet(dir, &sheets.districts)?,
            read_csv_sheet(dir, &sheets.influencers)?,
        ),
    };

    let districts = DistrictTable::from_table(district_raw.clean())?;
    let influencers = InfluencerTable::from_table(influencer_raw.clean())?;

    info!(
        "Loaded {} district rows and {} influencer rows from {:?}",
        districts.len(),
        influencers.len(),
        source.path()
    );

    Ok((districts, influencers))
}

// ============================================================================
// WORKBOOK
// ============================================================================

fn read_workbook(path: &Path, sheets: &SheetNames) -> Result<(Table, Table)> {
    if !path.exists() {
        return Err(ProfileError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("workbook not found: {:?}", path),
        )));
    }

    let mut workbook = open_workbook_auto(path).map_err(|e| ProfileError::Workbook {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let available = workbook.sheet_names();
    let mut read_sheet = |name: &str| -> Result<Table> {
        if !available.iter().any(|s| s == name) {
            return Err(ProfileError::MissingSheet(name.to_string()));
        }

        let range = workbook
            .worksheet_range(name)
            .map_err(|e| ProfileError::Workbook {
                path: path.to_path_buf(),
                message: format!("failed to read sheet '{}': {}", name, e),
            })?;

        // Data may not begin at column A
        let (_, start_col) = range.start().unwrap_or((0, 0));
        let grid = range
            .rows()
            .map(|row| {
                let mut cells = vec![Cell::Missing; start_col as usize];
                cells.extend(row.iter().map(convert_cell));
                cells
            })
            .collect();

        Ok(Table::from_grid(name, grid))
    };

    let districts = read_sheet(&sheets.districts)?;
    let influencers = read_sheet(&sheets.influencers)?;
    Ok((districts, influencers))
}

fn convert_cell(data: &Data) -> Cell {
    match data {
        Data::Empty | Data::Error(_) => Cell::Missing,
        Data::String(s) => Cell::Text(s.clone()),
        Data::Float(n) => Cell::Number(*n),
        Data::Int(n) => Cell::Number(*n as f64),
        Data::Bool(b) => Cell::Bool(*b),
        // Serial date; no date-typed district attribute exists
        Data::DateTime(dt) => Cell::Number(dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => Cell::Text(s.clone()),
    }
}

// ============================================================================
// CSV EXPORT
// ============================================================================

fn read_csv_sheet(dir: &Path, sheet: &str) -> Result<Table> {
    let path = dir.join(format!("{}.csv", sheet));
    if !path.exists() {
        return Err(ProfileError::MissingSheet(sheet.to_string()));
    }

    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(&path)?;

    let mut grid = Vec::new();
    for record in rdr.records() {
        let record = record?;
        let row = record
            .iter()
            .map(|field| {
                if field.is_empty() {
                    Cell::Missing
                } else {
                    Cell::Text(field.to_string())
                }
            })
            .collect();
        grid.push(row);
    }

    Ok(Table::from_grid(sheet, grid))
}
