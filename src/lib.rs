// District Profile - Core Library
// Exposes all modules for use in the TUI, web server, and tests

pub mod config;
pub mod error;
pub mod html;
pub mod images;
pub mod loader;
pub mod records;
pub mod sanitize;
pub mod store;
pub mod table;
pub mod view;

#[cfg(feature = "tui")]
pub mod ui;

#[cfg(feature = "server")]
pub mod web;

// Re-export commonly used types
pub use config::{AppConfig, CONFIG_FILE};
pub use error::{ProfileError, Result};
pub use html::{render_not_found, render_page};
pub use images::{ImageCatalog, ImageRef};
pub use loader::{load_and_clean, SheetNames, Source};
pub use records::{
    district_names, find_district, find_influencers,
    DistrictRecord, DistrictTable, InfluencerRecord, InfluencerTable,
};
pub use sanitize::{safe, NO_INFO};
pub use store::ProfileStore;
pub use table::{clean_cell, clean_header, clean_headers, Cell, Table};
pub use view::{build_view, Block, DisplayTable, ProfileView};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
