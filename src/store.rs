// Process-wide read-only profile data
// Loaded once at start-up; every request reads it through a shared reference.

use crate::config::AppConfig;
use crate::error::Result;
use crate::images::ImageCatalog;
use crate::loader::load_and_clean;
use crate::records::{district_names, find_district, find_influencers, DistrictTable, InfluencerTable};
use crate::view::{build_view, ProfileView};
use chrono::{DateTime, Utc};
use log::info;

pub struct ProfileStore {
    districts: DistrictTable,
    influencers: InfluencerTable,
    images: ImageCatalog,
    names: Vec<String>,
    loaded_at: DateTime<Utc>,
}

impl ProfileStore {
    pub fn new(districts: DistrictTable, influencers: InfluencerTable, images: ImageCatalog) -> Self {
        let names = district_names(&districts);
        ProfileStore {
            districts,
            influencers,
            images,
            names,
            loaded_at: Utc::now(),
        }
    }

    pub fn load(config: &AppConfig) -> Result<Self> {
        let (districts, influencers) = load_and_clean(&config.source(), &config.sheets())?;
        let store = ProfileStore::new(districts, influencers, config.images());
        info!("Profile store ready: {} districts", store.names.len());
        Ok(store)
    }

    /// Selector entries: distinct district names in sheet order.
    pub fn district_names(&self) -> &[String] {
        &self.names
    }

    /// Default selection, as a select box shows its first option.
    pub fn first_district(&self) -> Option<&str> {
        self.names.first().map(String::as_str)
    }

    pub fn district_count(&self) -> usize {
        self.districts.len()
    }

    pub fn influencer_count(&self) -> usize {
        self.influencers.len()
    }

    pub fn images(&self) -> &ImageCatalog {
        &self.images
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }

    /// Full render pipeline for one selection.
    pub fn view(&self, selection: &str) -> Result<ProfileView> {
        let record = find_district(&self.districts, selection)?;
        let influencers = find_influencers(&self.influencers, selection);
        Ok(build_view(selection, &record, &influencers, &self.images))
    }
}
