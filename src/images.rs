// District images: `{key}.png`, `{key}2.png` and the page background

use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

pub const BACKGROUND_IMAGE: &str = "BJP_BG.png";

/// District name → image key, both Hindi and Latin spellings.
pub fn default_image_keys() -> BTreeMap<String, String> {
    [
        ("भोपाल", "Bhopal"),
        ("सीहोर", "Sehore"),
        ("Bhopal", "Bhopal"),
        ("Sehore", "Sehore"),
    ]
    .into_iter()
    .map(|(district, key)| (district.to_string(), key.to_string()))
    .collect()
}

/// An image file known to exist under the catalog directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageRef {
    pub file: String,
}

#[derive(Debug, Clone)]
pub struct ImageCatalog {
    dir: PathBuf,
    keys: BTreeMap<String, String>,
    background: String,
}

impl ImageCatalog {
    pub fn new(dir: impl Into<PathBuf>, keys: BTreeMap<String, String>, background: impl Into<String>) -> Self {
        ImageCatalog {
            dir: dir.into(),
            keys,
            background: background.into(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Exact-name lookup; no trimming or case folding.
    pub fn key_for(&self, district: &str) -> Option<&str> {
        self.keys.get(district).map(String::as_str)
    }

    pub fn primary(&self, district: &str) -> Option<ImageRef> {
        self.key_for(district)
            .and_then(|key| self.existing(format!("{}.png", key)))
    }

    pub fn secondary(&self, district: &str) -> Option<ImageRef> {
        self.key_for(district)
            .and_then(|key| self.existing(format!("{}2.png", key)))
    }

    pub fn background(&self) -> Option<ImageRef> {
        self.existing(self.background.clone())
    }

    fn existing(&self, file: String) -> Option<ImageRef> {
        if self.dir.join(&file).is_file() {
            Some(ImageRef { file })
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_images_require_mapping_and_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("Sehore.png"), b"png").unwrap();

        let catalog = ImageCatalog::new(dir.path(), default_image_keys(), BACKGROUND_IMAGE);

        assert_eq!(
            catalog.primary("सीहोर"),
            Some(ImageRef { file: "Sehore.png".to_string() })
        );
        // mapped, file absent
        assert_eq!(catalog.secondary("सीहोर"), None);
        assert_eq!(catalog.primary("भोपाल"), None);
        // not mapped
        assert_eq!(catalog.primary("इंदौर"), None);
        assert_eq!(catalog.background(), None);
    }

    #[test]
    fn test_secondary_and_background() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("Bhopal2.png"), b"png").unwrap();
        fs::write(dir.path().join(BACKGROUND_IMAGE), b"png").unwrap();

        let catalog = ImageCatalog::new(dir.path(), default_image_keys(), BACKGROUND_IMAGE);

        assert_eq!(catalog.secondary("Bhopal").unwrap().file, "Bhopal2.png");
        assert_eq!(catalog.background().unwrap().file, BACKGROUND_IMAGE);
    }
}
