//! ctrinfo system information
//!
//! Prints what a console reports about its hardware: screen panel types,
//! backlight brightness, headphone jack, game card, SD card, sound output
//! mode and auto-brightness.
//!
//! Facts that cannot be read are reported as unavailable (or with their
//! fallback value) instead of aborting the report.

mod args;
mod report;

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use ctrinfo_config::{CtrInfoConfig, ReportFormat};
use ctrinfo_hal::HardwareFacts;
use ctrinfo_hal::mock::{MockHal, MockProfile};
use tracing::{debug, info};

use crate::args::Args;

fn main() -> Result<()> {
    let args = Args::parse();
    let config = load_config(&args)?;
    setup_logging(&config.logging.level);
    debug!("Configuration: {:?}", config);

    let hal = open_platform(&config)?;
    let console = hal.hardware().name;
    info!("Querying hardware facts for {}", console);

    let report = HardwareFacts::new(&hal).snapshot();

    let format = if args.json {
        ReportFormat::Json
    } else {
        config.report.format
    };
    match format {
        ReportFormat::Text => print!("{}", report::render_text(&console, &report)),
        ReportFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(&report).context("Failed to serialize report")?
        ),
    }

    Ok(())
}

/// Setup logging to stderr, keeping stdout for the report
fn setup_logging(level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

fn load_config(args: &Args) -> Result<CtrInfoConfig> {
    let mut config = match &args.config {
        Some(path) => CtrInfoConfig::load_layered(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => CtrInfoConfig::load_default().context("Failed to load configuration")?,
    };

    if let Some(profile) = &args.profile {
        config.device.profile = profile.clone();
        config.device.profile_file = None;
    }

    Ok(config)
}

fn open_platform(config: &CtrInfoConfig) -> Result<MockHal> {
    if let Some(path) = &config.device.profile_file {
        return MockHal::from_profile_file(path)
            .with_context(|| format!("Failed to load console profile {}", path.display()));
    }

    let profile = MockProfile::from_name(&config.device.profile).ok_or_else(|| {
        let known: Vec<&str> = MockProfile::all().iter().map(|p| p.name()).collect();
        anyhow!(
            "Unknown console profile '{}', expected one of {}",
            config.device.profile,
            known.join(", ")
        )
    })?;

    Ok(MockHal::new(profile))
}
