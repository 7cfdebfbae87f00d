//! Settings management

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Host settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub window: WindowSettings,
    /// Script document holding every scenario.
    pub script_path: PathBuf,
    /// Optional per-frame input recording for headless runs.
    pub input_path: Option<PathBuf>,
    /// Simulation rate; the per-tick delta is `1 / tick_rate_hz`.
    pub tick_rate_hz: u32,
    /// Stop a headless run after this many frames.
    pub max_frames: u64,
    pub stage: StageSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    pub width: u32,
    pub height: u32,
}

/// Settings read by the behavior stack and its units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StageSettings {
    /// Scenario the stack starts in.
    pub entry_scenario: String,
    pub missing_entity: MissingEntityPolicy,
    pub adventure: AdventureSettings,
}

/// What the stack does when a unit references an entity or component that
/// is not in the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingEntityPolicy {
    /// Unwind every unit through its exit hook and report the error.
    #[default]
    Abort,
    /// Pop only the failing unit and keep playing.
    Skip,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdventureSettings {
    /// Horizontal walk speed in units per second.
    pub speed: f64,
    pub min_x: f64,
    pub max_x: f64,
    /// A link fires only when the controlled entity is closer than this.
    pub link_distance: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window: WindowSettings::default(),
            script_path: PathBuf::from("assets/scenario.json"),
            input_path: None,
            tick_rate_hz: 60,
            max_frames: 3600,
            stage: StageSettings::default(),
        }
    }
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
        }
    }
}

impl Default for StageSettings {
    fn default() -> Self {
        Self {
            entry_scenario: "init".to_string(),
            missing_entity: MissingEntityPolicy::default(),
            adventure: AdventureSettings::default(),
        }
    }
}

impl Default for AdventureSettings {
    fn default() -> Self {
        Self {
            speed: 100.0,
            min_x: 0.0,
            max_x: 640.0,
            link_distance: 60.0,
        }
    }
}

impl Settings {
    /// Load settings from a JSON file, falling back to defaults when it is absent.
    pub fn load_or_default(path: &Path) -> Result<Self, SettingsError> {
        if !path.exists() {
            info!(path = %path.display(), "no settings file, using defaults");
            return Ok(Self::default());
        }
        Self::load(path)
    }

    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let source = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&source)?)
    }
}
