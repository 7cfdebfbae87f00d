use cue_core::StoreError;
use cue_script::ScriptError;
use thiserror::Error;

/// Failure raised by a behavior unit while entering or updating.
#[derive(Debug, Error)]
pub enum StageError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Script(#[from] ScriptError),
}

impl StageError {
    /// Entity named by a failed store lookup. Only these failures may be
    /// skipped by policy; script errors never are.
    pub fn missing_entity(&self) -> Option<&str> {
        match self {
            StageError::Store(err) => Some(err.entity()),
            StageError::Script(_) => None,
        }
    }
}

/// Errors that can occur while assembling the behavior registry.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("behavior '{name}' is already registered")]
    DuplicateBehavior { name: String },
}
