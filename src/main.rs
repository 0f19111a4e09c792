mod config;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::Parser;
use config::BuildConfig;
use expo_core::ics::generate_ics;
use expo_core::{html, loader, window};

#[derive(Parser)]
#[command(name = "expo-build")]
#[command(version, about = "Build the London expos calendar and refresh the event list in index.html")]
struct Cli {}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let _cli = Cli::parse();

    let root = std::env::current_dir().context("Could not determine working directory")?;
    let cfg = config::load_config(&root)?;

    let count = build(&cfg, Utc::now())?;
    println!("Built {} events for next 3 months", count);

    Ok(())
}

/// Load, filter, then write the calendar and the page. Returns the number of
/// events in the window.
fn build(cfg: &BuildConfig, now: DateTime<Utc>) -> Result<usize> {
    let input = loader::locate_input(&cfg.input_candidates)?;
    log::debug!("Using events file {}", input.display());

    let all_events = loader::load_events(&input)
        .with_context(|| format!("Failed to load events from {}", input.display()))?;
    let events = window::into_window(all_events, now);

    let ics = generate_ics(&events, &cfg.calendar, now);
    std::fs::write(&cfg.ics_output, ics)
        .with_context(|| format!("Failed to write calendar to {}", cfg.ics_output.display()))?;

    let page = std::fs::read_to_string(&cfg.html_path)
        .with_context(|| format!("Failed to read {}", cfg.html_path.display()))?;

    if let Some(Ok(previous)) = html::extract_events(&page) {
        log::info!("{} currently lists {} events", cfg.html_path.display(), previous.len());
    }

    let page = html::inject_events(&page, &events)?;
    std::fs::write(&cfg.html_path, page)
        .with_context(|| format!("Failed to write {}", cfg.html_path.display()))?;

    Ok(events.len())
}
