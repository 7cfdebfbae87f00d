//! Cue Runtime
//!
//! Headless host: loads settings and scripts, then drives the behavior stack
//! at a fixed tick rate until it empties or the frame limit is reached.
//!
//! Usage: `cue [settings.json]` (defaults to `cue.json`; missing file means
//! default settings).

mod host;

use anyhow::{Context, Result};
use cue_services::Settings;
use host::Host;
use std::path::PathBuf;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    tracing::info!("Cue v{}", cue_core::VERSION);

    let settings_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("cue.json"));
    let settings = Settings::load_or_default(&settings_path)
        .with_context(|| format!("loading settings from {}", settings_path.display()))?;

    let mut host = Host::from_settings(&settings)?;
    let summary = host.run()?;

    tracing::info!(
        frames = summary.frames,
        seconds = summary.seconds,
        draws = summary.draws,
        finished = summary.finished,
        "run complete"
    );
    Ok(())
}
