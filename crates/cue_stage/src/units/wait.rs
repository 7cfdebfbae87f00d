use crate::{Behavior, Directive, FromPayload, StageError, Tick};
use cue_core::math::reached;
use cue_core::EntityStore;
use cue_script::payload;
use cue_script::{PayloadError, ScriptRepository};
use serde_json::Value;

/// Idles until `duration` seconds of tick delta have accumulated.
#[derive(Debug, Clone)]
pub struct Wait {
    duration: f64,
    elapsed: f64,
}

impl Wait {
    pub fn new(duration: f64) -> Self {
        Self {
            duration,
            elapsed: 0.0,
        }
    }

    pub fn remaining(&self) -> f64 {
        self.duration - self.elapsed
    }
}

impl FromPayload for Wait {
    fn from_payload(param: &Value, _scripts: &ScriptRepository) -> Result<Self, PayloadError> {
        let seconds: f64 = payload::decode(param)?;
        Ok(Self::new(payload::non_negative("duration", seconds)?))
    }
}

impl Behavior for Wait {
    fn name(&self) -> &'static str {
        "wait"
    }

    fn update(
        &mut self,
        _store: &mut EntityStore,
        tick: &Tick<'_>,
    ) -> Result<Directive, StageError> {
        self.elapsed += tick.delta;
        if reached(self.elapsed, self.duration) {
            Ok(Directive::Pop)
        } else {
            Ok(Directive::None)
        }
    }
}
