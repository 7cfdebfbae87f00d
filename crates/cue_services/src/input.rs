//! Input abstraction and recording for replays
//!
//! The host polls its devices once per frame and hands the stage an
//! `InputState`. Recordings are plain JSON arrays of states, one per frame.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Input for a single frame.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InputState {
    /// Horizontal movement axis: negative is left, positive is right.
    pub move_x: f32,
    /// Confirm was pressed down this frame (edge, not level).
    pub confirm: bool,
}

impl InputState {
    pub fn left() -> Self {
        Self {
            move_x: -1.0,
            ..Self::default()
        }
    }

    pub fn right() -> Self {
        Self {
            move_x: 1.0,
            ..Self::default()
        }
    }

    pub fn confirm() -> Self {
        Self {
            confirm: true,
            ..Self::default()
        }
    }

    pub fn confirm_pressed(&self) -> bool {
        self.confirm
    }
}

#[derive(Debug, Error)]
pub enum RecordingError {
    #[error("failed to read input recording: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse input recording: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Prerecorded per-frame input, replayed in order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InputRecording {
    frames: Vec<InputState>,
}

impl InputRecording {
    pub fn new(frames: Vec<InputState>) -> Self {
        Self { frames }
    }

    pub fn load(path: &Path) -> Result<Self, RecordingError> {
        let source = std::fs::read_to_string(path)?;
        let recording: Self = serde_json::from_str(&source)?;
        debug!(path = %path.display(), frames = recording.frames.len(), "loaded input recording");
        Ok(recording)
    }

    /// Input for `frame`; frames past the end are neutral.
    pub fn frame(&self, frame: usize) -> InputState {
        self.frames.get(frame).copied().unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}
