//! Everything a stack needs besides the store: scripts, registry, settings.

use crate::{BehaviorRegistry, ScenarioInterpreter};
use cue_script::{ScriptError, ScriptRepository};
use cue_services::StageSettings;
use tracing::info;

/// Read-only resources shared by every unit for the lifetime of a run.
#[derive(Debug)]
pub struct Playbook {
    pub scripts: ScriptRepository,
    pub registry: BehaviorRegistry,
    pub settings: StageSettings,
}

impl Playbook {
    pub fn new(
        scripts: ScriptRepository,
        registry: BehaviorRegistry,
        settings: StageSettings,
    ) -> Self {
        Self {
            scripts,
            registry,
            settings,
        }
    }

    /// Check every scenario before play.
    ///
    /// Each `push`/`replace` step is resolved through the registry and its
    /// payload built without touching the store, so unknown behaviors, bad
    /// payloads and dangling scenario references all surface here with their
    /// scenario name and step index.
    pub fn validate(&self) -> Result<(), ScriptError> {
        self.scripts.scenario(&self.settings.entry_scenario)?;

        let mut checked = 0;
        for name in self.scripts.names() {
            let scenario = self.scripts.scenario(name)?;
            for (index, step) in scenario.steps().iter().enumerate() {
                if let Some(invocation) = step.invocation() {
                    self.registry
                        .resolve(name, index, invocation, &self.scripts)?;
                    checked += 1;
                }
            }
        }
        info!(
            scenarios = self.scripts.len(),
            invocations = checked,
            "script validated"
        );
        Ok(())
    }

    /// Interpreter bound to the entry scenario.
    pub fn entry(&self) -> Result<ScenarioInterpreter, ScriptError> {
        ScenarioInterpreter::load(&self.scripts, &self.settings.entry_scenario)
    }
}
