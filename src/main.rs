use anyhow::{Result, anyhow, bail};
use clap::Parser;
use std::path::PathBuf;

mod api;
mod app;
mod config;
mod domain;
mod fetch;
mod geometry;
mod layers;
mod osm;
mod theme;

use app::DistrictMapApp;
use config::{FileConfig, Settings};
use domain::{DISTRICTS, District};

/// Interactive dark-themed map of a city district
///
/// Examples:
///   # Open the default district (Mission District)
///   duskmap
///
///   # Open another preset without name labels
///   duskmap --district north-beach --no-labels
///
///   # Use a config file
///   duskmap --config my-settings.toml
#[derive(Parser, Debug)]
#[command(name = "duskmap")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to config file (optional, auto-searches duskmap.toml if not provided)
    #[arg(long)]
    config: Option<PathBuf>,

    /// District preset to open (see --list-districts)
    #[arg(short = 'd', long)]
    district: Option<String>,

    /// Start with point-of-interest labels hidden
    #[arg(long)]
    no_labels: bool,

    /// List the available district presets and exit
    #[arg(long)]
    list_districts: bool,

    /// Enable verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = if args.verbose {
        "duskmap=debug"
    } else {
        "duskmap=info"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();

    if args.list_districts {
        println!("Available districts:");
        for district in &DISTRICTS {
            println!("  {:<12} {}", district.id, district.name);
        }
        return Ok(());
    }

    let file_config = if let Some(ref config_path) = args.config {
        FileConfig::from_path(config_path)?
    } else {
        FileConfig::load().unwrap_or_default()
    };

    let district_id = args
        .district
        .clone()
        .or_else(|| file_config.district.clone())
        .unwrap_or_else(|| District::default_district().id.to_string());

    let district = match District::by_id(&district_id) {
        Some(d) => d,
        None => {
            let known: Vec<&str> = DISTRICTS.iter().map(|d| d.id).collect();
            bail!(
                "unknown district '{}' (expected one of: {})",
                district_id,
                known.join(", ")
            );
        }
    };

    let settings = Settings {
        show_labels: !args.no_labels && file_config.labels,
        simplify_buildings: file_config.simplify_buildings,
        overpass: file_config.overpass.unwrap_or_default(),
    };

    log::info!("opening {} ({})", district.name, district.id);

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 760.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("duskmap"),
        ..Default::default()
    };

    eframe::run_native(
        "duskmap",
        options,
        Box::new(move |cc| Ok(Box::new(DistrictMapApp::new(cc, district, settings)))),
    )
    .map_err(|e| anyhow!("failed to start UI: {e}"))
}
