// ⚙️ Application configuration
// Defaults reproduce the stock deployment: DistrictMapping.xlsx + images/
// next to the binary's working directory. An optional district-profile.json
// in the same directory overrides any subset of fields.

use crate::images::{default_image_keys, ImageCatalog, BACKGROUND_IMAGE};
use crate::loader::{SheetNames, Source, DISTRICT_SHEET, INFLUENCER_SHEET};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "district-profile.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Workbook file, or a directory of per-sheet CSV exports
    pub workbook: PathBuf,
    pub district_sheet: String,
    pub influencer_sheet: String,
    pub image_dir: PathBuf,
    pub background_image: String,
    /// District name → image key (`{key}.png`, `{key}2.png`)
    pub image_keys: BTreeMap<String, String>,
    pub bind_addr: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            workbook: PathBuf::from("DistrictMapping.xlsx"),
            district_sheet: DISTRICT_SHEET.to_string(),
            influencer_sheet: INFLUENCER_SHEET.to_string(),
            image_dir: PathBuf::from("images"),
            background_image: BACKGROUND_IMAGE.to_string(),
            image_keys: default_image_keys(),
            bind_addr: "0.0.0.0:3000".to_string(),
        }
    }
}

impl AppConfig {
    /// Read `district-profile.json` from `base_dir` when present, then resolve
    /// relative paths against `base_dir`.
    pub fn load(base_dir: &Path) -> Result<Self> {
        let path = base_dir.join(CONFIG_FILE);

        let config = if path.exists() {
            let raw = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read {:?}", path))?;
            serde_json::from_str(&raw).with_context(|| format!("Failed to parse {:?}", path))?
        } else {
            AppConfig::default()
        };

        Ok(config.resolve(base_dir))
    }

    pub fn resolve(mut self, base_dir: &Path) -> Self {
        if self.workbook.is_relative() {
            self.workbook = base_dir.join(&self.workbook);
        }
        if self.image_dir.is_relative() {
            self.image_dir = base_dir.join(&self.image_dir);
        }
        self
    }

    pub fn source(&self) -> Source {
        Source::detect(&self.workbook)
    }

    pub fn sheets(&self) -> SheetNames {
        SheetNames {
            districts: self.district_sheet.clone(),
            influencers: self.influencer_sheet.clone(),
        }
    }

    pub fn images(&self) -> ImageCatalog {
        ImageCatalog::new(
            self.image_dir.clone(),
            self.image_keys.clone(),
            self.background_image.clone(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_defaults_resolve_against_base_dir() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load(dir.path()).unwrap();

        assert_eq!(config.workbook, dir.path().join("DistrictMapping.xlsx"));
        assert_eq!(config.image_dir, dir.path().join("images"));
        assert_eq!(config.district_sheet, "District Mapping");
        assert_eq!(config.image_keys.get("सीहोर").map(String::as_str), Some("Sehore"));
        assert!(matches!(config.source(), Source::Workbook(_)));
    }

    #[test]
    fn test_partial_override_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE),
            r#"{ "bind_addr": "127.0.0.1:8080", "image_keys": { "रीवा": "Rewa" } }"#,
        )
        .unwrap();

        let config = AppConfig::load(dir.path()).unwrap();
        assert_eq!(config.bind_addr, "127.0.0.1:8080");
        assert_eq!(config.image_keys.len(), 1);
        assert_eq!(config.background_image, "BJP_BG.png");
        assert_eq!(config.sheets(), SheetNames::default());
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), "{ not json").unwrap();
        assert!(AppConfig::load(dir.path()).is_err());
    }
}
