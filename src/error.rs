// Errors raised while loading the workbook and looking up districts

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("failed to open workbook {path:?}: {message}")]
    Workbook { path: PathBuf, message: String },

    #[error("sheet '{0}' not found in source")]
    MissingSheet(String),

    #[error("sheet '{sheet}' has no column '{column}'")]
    MissingColumn { sheet: String, column: String },

    #[error("district '{0}' not found")]
    DistrictNotFound(String),

    #[error("failed to read CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ProfileError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ProfileError::DistrictNotFound(_))
    }
}

pub type Result<T> = std::result::Result<T, ProfileError>;
