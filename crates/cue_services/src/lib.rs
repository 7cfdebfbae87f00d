//! Cue Services Layer
//!
//! Host-side collaborators the stage consumes: input state and settings.

pub mod input;
pub mod settings;

pub use input::{InputRecording, InputState, RecordingError};
pub use settings::{
    AdventureSettings, MissingEntityPolicy, Settings, SettingsError, StageSettings,
};
