use anyhow::{Context, Result};
use district_profile::{render_page, AppConfig, ProfileStore, VERSION};
use std::env;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    match args.get(1).map(String::as_str) {
        Some("list") => run_list()?,
        Some("render") => {
            let district = args
                .get(2)
                .context("Usage: district-profile render <district>")?;
            run_render(district)?;
        }
        // UI mode (default)
        _ => run_ui_mode()?,
    }

    Ok(())
}

fn load_store() -> Result<(AppConfig, ProfileStore)> {
    let base_dir = env::current_dir().context("Failed to resolve working directory")?;
    let config = AppConfig::load(&base_dir)?;
    let store = ProfileStore::load(&config)
        .with_context(|| format!("Failed to load district data from {:?}", config.workbook))?;
    Ok((config, store))
}

fn run_list() -> Result<()> {
    let (_, store) = load_store()?;
    for name in store.district_names() {
        println!("{}", name);
    }
    Ok(())
}

/// Write the profile page to stdout; images resolve relative to the working directory.
fn run_render(district: &str) -> Result<()> {
    let (config, store) = load_store()?;
    let view = store.view(district)?;
    let background = store.images().background();
    let image_base = config.image_dir.to_string_lossy().into_owned();

    println!(
        "{}",
        render_page(store.district_names(), &view, background.as_ref(), &image_base)
    );
    Ok(())
}

#[cfg(feature = "tui")]
fn run_ui_mode() -> Result<()> {
    println!("🗺️  District Profile v{}\n", VERSION);

    println!("📂 Loading workbook...");
    let (_, store) = load_store()?;
    println!("✓ Loaded {} districts\n", store.district_names().len());
    println!("Starting UI... (Press 'q' to quit)\n");

    let mut app = district_profile::ui::App::new(store);
    district_profile::ui::run_ui(&mut app)?;

    println!("\n✅ UI closed successfully");

    Ok(())
}

#[cfg(not(feature = "tui"))]
fn run_ui_mode() -> Result<()> {
    println!("🗺️  District Profile v{}", VERSION);
    eprintln!("❌ TUI mode not available!");
    eprintln!("   Rebuild with: cargo build --features tui");
    eprintln!("   Or use web UI: cargo run --bin district-server --features server");
    std::process::exit(1);
}
