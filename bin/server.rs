// District Profile - Web Server
// Loads the workbook once, then serves every district page from memory

use anyhow::{Context, Result};
use district_profile::{web, AppConfig, ProfileStore};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    println!("🌐 District Profile - Web Server");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    let base_dir = std::env::current_dir().context("Failed to resolve working directory")?;
    let config = AppConfig::load(&base_dir)?;

    let store = ProfileStore::load(&config)
        .with_context(|| format!("Failed to load district data from {:?}", config.workbook))?;
    println!("✓ Workbook loaded: {:?}", config.workbook);
    println!("✓ {} districts, {} influencer rows", store.district_names().len(), store.influencer_count());

    let app = web::router(Arc::new(store));

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind to {}", config.bind_addr))?;

    println!("\n🚀 Server running on http://{}", config.bind_addr);
    println!("   API: http://{}/api/districts", config.bind_addr);
    println!("\n   Press Ctrl+C to stop\n");

    axum::serve(listener, app)
        .await
        .context("Failed to start server")?;

    Ok(())
}
