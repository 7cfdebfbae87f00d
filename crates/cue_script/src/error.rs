use thiserror::Error;

/// Problems with a script document or one of its steps.
///
/// Step indices are zero-based positions inside the named scenario.
#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("failed to read script: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse script: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("script document is malformed: {reason}")]
    InvalidDocument { reason: String },

    #[error("scenario '{scenario}' step {step} is malformed: {source}")]
    Malformed {
        scenario: String,
        step: usize,
        #[source]
        source: StepError,
    },

    #[error("scenario '{scenario}' step {step}: invalid `{behavior}` payload: {source}")]
    InvalidPayload {
        scenario: String,
        step: usize,
        behavior: String,
        #[source]
        source: PayloadError,
    },

    #[error("scenario '{scenario}' step {step}: unknown behavior `{behavior}`")]
    UnknownBehavior {
        scenario: String,
        step: usize,
        behavior: String,
    },

    #[error("unknown scenario '{name}'")]
    UnknownScenario { name: String },
}

/// A single step object with the wrong shape. Carries no location.
#[derive(Debug, Error)]
pub enum StepError {
    #[error("expected an object, found {found}")]
    NotAnObject { found: &'static str },

    #[error("expected one of `make`, `push` or `replace`")]
    NoAction,

    #[error("step declares more than one action: {}", .actions.join(", "))]
    ManyActions { actions: Vec<&'static str> },

    #[error("invalid `make` list: {0}")]
    Make(#[source] serde_json::Error),

    #[error("`{key}` must name a behavior, found {found}")]
    NotABehaviorName {
        key: &'static str,
        found: &'static str,
    },
}

/// A behavior payload that cannot be turned into a unit.
///
/// Carries no location; the interpreter attaches scenario and step.
#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("{0}")]
    Shape(#[from] serde_json::Error),

    #[error("`{field}` {reason}")]
    Invalid { field: &'static str, reason: String },

    #[error("unknown scenario '{name}'")]
    UnknownScenario { name: String },
}

impl PayloadError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        PayloadError::Invalid {
            field,
            reason: reason.into(),
        }
    }
}
