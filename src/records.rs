// 📋 Typed district + influencer rows and the lookups over them
//
// Column names below are the cleaned headers of the source workbook.
// Both tables resolve their columns once, at load time, so a renamed
// column fails start-up instead of a later render.

use crate::error::{ProfileError, Result};
use crate::table::{Cell, Table};
use log::{debug, warn};
use serde::Serialize;
use std::collections::HashSet;

// ============================================================================
// COLUMN NAMES
// ============================================================================

pub const COL_DISTRICT: &str = "जिले का नाम";
pub const COL_DIVISION: &str = "संभाग";
pub const COL_DESCRIPTION: &str = "जिले का विवरण";
pub const COL_RELIGIOUS_SITES: &str = "दर्शनीय स्थल (मंदिर एवं धार्मिक महत्व के क्षेत्र)";
pub const COL_TOURIST_SITES: &str = "पर्यटन स्थल";
pub const COL_CUISINE: &str = "व्यंजन एवं मशहूर खान पान स्थल";
pub const COL_INNOVATION: &str = "जिला स्तर पर किए जा रहे विशेष नवाचार";
pub const COL_ODOP: &str = "ODOP उत्पाद";
pub const COL_MODEL_VILLAGE: &str = "आदर्श ग्राम";
pub const COL_RIVER_GHAT: &str = "नदी एवं घाट";
pub const COL_NOTABLE_PERSON: &str =
    "प्रमुख हस्ती (भारत रत्न, पद्म श्री, पद्म विभूषण या अन्य सम्मान से सम्मानित)";

pub const COL_INFLUENCER_NAME: &str = "इन्फ्लुएंसर्स नाम";
pub const COL_INSTAGRAM: &str = "इंस\u{94d}\u{200d}टाग\u{94d}राम अकाउंट";
pub const COL_YOUTUBE: &str = "यूट्यूब अकाउंट";
pub const COL_PHONE: &str = "मोबाइल नम\u{94d}\u{200d}बर";

// ============================================================================
// DISTRICTS
// ============================================================================

/// One row of the district sheet. Attributes are `None` when the cell was missing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistrictRecord {
    pub name: String,
    pub division: Option<String>,
    pub description: Option<String>,
    pub religious_sites: Option<String>,
    pub tourist_sites: Option<String>,
    pub cuisine: Option<String>,
    pub innovation: Option<String>,
    pub odop_product: Option<String>,
    pub model_village: Option<String>,
    pub river_ghat: Option<String>,
    pub notable_person: Option<String>,
}

#[derive(Debug, Clone, Copy)]
struct DistrictColumns {
    name: usize,
    division: usize,
    description: usize,
    religious_sites: usize,
    tourist_sites: usize,
    cuisine: usize,
    innovation: usize,
    odop_product: usize,
    model_village: usize,
    river_ghat: usize,
    notable_person: usize,
}

#[derive(Debug, Clone)]
pub struct DistrictTable {
    table: Table,
    columns: DistrictColumns,
}

impl DistrictTable {
    /// Wrap a cleaned sheet, failing if any referenced column is absent.
    pub fn from_table(table: Table) -> Result<Self> {
        let columns = DistrictColumns {
            name: table.require_column(COL_DISTRICT)?,
            division: table.require_column(COL_DIVISION)?,
            description: table.require_column(COL_DESCRIPTION)?,
            religious_sites: table.require_column(COL_RELIGIOUS_SITES)?,
            tourist_sites: table.require_column(COL_TOURIST_SITES)?,
            cuisine: table.require_column(COL_CUISINE)?,
            innovation: table.require_column(COL_INNOVATION)?,
            odop_product: table.require_column(COL_ODOP)?,
            model_village: table.require_column(COL_MODEL_VILLAGE)?,
            river_ghat: table.require_column(COL_RIVER_GHAT)?,
            notable_person: table.require_column(COL_NOTABLE_PERSON)?,
        };

        Ok(DistrictTable { table, columns })
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    fn record(&self, row: usize) -> DistrictRecord {
        let c = &self.columns;
        let text = |col: usize| self.table.cell(row, col).as_text();

        DistrictRecord {
            name: text(c.name).unwrap_or_default(),
            division: text(c.division),
            description: text(c.description),
            religious_sites: text(c.religious_sites),
            tourist_sites: text(c.tourist_sites),
            cuisine: text(c.cuisine),
            innovation: text(c.innovation),
            odop_product: text(c.odop_product),
            model_village: text(c.model_village),
            river_ghat: text(c.river_ghat),
            notable_person: text(c.notable_person),
        }
    }
}

/// First row whose trimmed district name equals the trimmed query.
pub fn find_district(districts: &DistrictTable, name: &str) -> Result<DistrictRecord> {
    let query = name.trim();
    let col = districts.columns.name;

    let mut matches = (0..districts.len()).filter(|&row| {
        districts
            .table
            .cell(row, col)
            .as_text()
            .is_some_and(|candidate| candidate.trim() == query)
    });

    let row = matches
        .next()
        .ok_or_else(|| ProfileError::DistrictNotFound(query.to_string()))?;

    if matches.next().is_some() {
        warn!("District '{}' appears more than once; using the first row", query);
    }
    debug!("District '{}' resolved to row {}", query, row);

    Ok(districts.record(row))
}

/// Distinct non-missing district names in first-occurrence order.
pub fn district_names(districts: &DistrictTable) -> Vec<String> {
    let col = districts.columns.name;
    let mut seen = HashSet::new();
    let mut names = Vec::new();

    for row in 0..districts.len() {
        if let Some(name) = districts.table.cell(row, col).as_text() {
            if seen.insert(name.clone()) {
                names.push(name);
            }
        }
    }

    names
}

// ============================================================================
// INFLUENCERS
// ============================================================================

/// Displayed influencer fields. Missing cells are empty strings, never `NO_INFO`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InfluencerRecord {
    pub name: String,
    pub instagram: String,
    pub youtube: String,
    pub phone: String,
}

impl InfluencerRecord {
    pub const HEADERS: [&'static str; 4] = [COL_INFLUENCER_NAME, COL_INSTAGRAM, COL_YOUTUBE, COL_PHONE];

    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.instagram.clone(),
            self.youtube.clone(),
            self.phone.clone(),
        ]
    }
}

#[derive(Debug, Clone, Copy)]
struct InfluencerColumns {
    district: usize,
    name: usize,
    instagram: usize,
    youtube: usize,
    phone: usize,
}

#[derive(Debug, Clone)]
pub struct InfluencerTable {
    table: Table,
    columns: InfluencerColumns,
}

impl InfluencerTable {
    pub fn from_table(table: Table) -> Result<Self> {
        let columns = InfluencerColumns {
            district: table.require_column(COL_DISTRICT)?,
            name: table.require_column(COL_INFLUENCER_NAME)?,
            instagram: table.require_column(COL_INSTAGRAM)?,
            youtube: table.require_column(COL_YOUTUBE)?,
            phone: table.require_column(COL_PHONE)?,
        };

        Ok(InfluencerTable { table, columns })
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    fn record(&self, row: usize) -> InfluencerRecord {
        let c = &self.columns;
        let blank = |col: usize| self.table.cell(row, col).as_text().unwrap_or_default();

        InfluencerRecord {
            name: blank(c.name),
            instagram: blank(c.instagram),
            youtube: blank(c.youtube),
            phone: blank(c.phone),
        }
    }
}

/// Every row whose trimmed affiliation contains the trimmed query as a
/// literal, case-sensitive substring. One affiliation cell may list
/// several districts.
pub fn find_influencers(influencers: &InfluencerTable, name: &str) -> Vec<InfluencerRecord> {
    let query = name.trim();
    let col = influencers.columns.district;

    let found: Vec<InfluencerRecord> = (0..influencers.len())
        .filter(|&row| {
            let affiliation = influencers.table.cell(row, col).as_text().unwrap_or_default();
            affiliation.trim().contains(query)
        })
        .map(|row| influencers.record(row))
        .collect();

    debug!("{} influencer row(s) matched '{}'", found.len(), query);
    found
}
