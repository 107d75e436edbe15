//! `urgentbox` - terminal message composer with urgency triage
//!
//! Compose messages, have an external service rate their urgency, and browse
//! them in a tabbed inbox. Nothing is persisted between runs.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod command;
mod render;
mod shell;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tokio::io::BufReader;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use urgentbox_core::Settings;

use shell::Shell;

/// Command line arguments.
#[derive(Debug, Parser)]
#[command(name = "urgentbox", version, about)]
struct Args {
    /// Classifier base URL (overrides settings and environment).
    #[arg(long, value_name = "URL")]
    classifier: Option<String>,

    /// Classifier request timeout in seconds.
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,

    /// Settings file to read instead of the default location.
    #[arg(long, value_name = "PATH")]
    settings: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so they do not interleave with shell output.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "urgentbox=info,urgentbox_core=info,urgentbox_classifier=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    let settings_path = args.settings.unwrap_or_else(Settings::default_path);
    let mut settings = Settings::load(&settings_path)
        .await
        .with_context(|| format!("failed to load settings from {}", settings_path.display()))?
        .with_env_overrides()?;

    if let Some(url) = args.classifier {
        settings.classifier.base_url = Some(url);
    }
    if let Some(secs) = args.timeout {
        settings.classifier.timeout_secs = Some(secs);
    }

    let classifier = settings
        .classifier_client()
        .context("invalid classifier configuration")?;

    match &classifier {
        Some(client) => info!("Using classifier at {}", client.endpoint()),
        None => warn!("No classifier configured, messages will be marked unknown"),
    }

    info!("Starting urgentbox");

    let stdin = BufReader::new(tokio::io::stdin());
    let stdout = tokio::io::stdout();
    Shell::new(classifier).run(stdin, stdout).await?;

    Ok(())
}
