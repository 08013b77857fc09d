//! echonav - Script replay entry point
//!
//! Reads the script from stdin when no path is given; see `--help`.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use echonav_a11y::{HostInfo, SimulatorConfig};
use echonav_sim::{parse_script, Cli, ConsoleSpeech, MissionDriver, DEFAULT_GIFTS};
use tracing_subscriber::EnvFilter;

fn load_config(path: Option<&Path>) -> Result<SimulatorConfig> {
    let Some(path) = path else {
        return Ok(SimulatorConfig::default());
    };
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    SimulatorConfig::from_json(&json).with_context(|| format!("loading config {}", path.display()))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    let source = match &cli.script {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading script {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf).context("reading script from stdin")?;
            buf
        }
    };
    let commands = parse_script(&source)?;

    let host = HostInfo::new(cli.user_agent.unwrap_or_default(), cli.platform, cli.max_touch_points);
    tracing::info!("Replaying {} commands", commands.len());

    let speech = ConsoleSpeech::new().echo(true);
    let mut driver = MissionDriver::new(config, &host, speech, &DEFAULT_GIFTS)
        .context("building mission screen")?;

    for command in &commands {
        let report = driver.step(command);
        for event in &report.events {
            println!("→ {:?}", event);
        }
        if let Some(cleared) = report.cleared_status {
            tracing::debug!("Status cleared: {}", cleared);
        }
    }

    let speech = driver.speech();
    tracing::info!(
        "Done at t={}ms: {} utterances, {} interrupted",
        driver.clock_ms(),
        speech.transcript().len(),
        speech.interrupted()
    );
    Ok(())
}
