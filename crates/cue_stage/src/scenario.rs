//! Scenario interpreter
//!
//! A behavior unit that walks a scenario one step per update. `make` steps
//! populate the store directly; `push`/`replace` steps are resolved through the
//! registry and handed back to the stack as directives. Every entity a
//! scenario declares is owned by it and removed when it leaves the stack.

use crate::{Behavior, Directive, FromPayload, StageError, Tick};
use cue_core::EntityStore;
use cue_script::payload;
use cue_script::{EntityDecl, PayloadError, Scenario, ScriptError, ScriptRepository, Step};
use serde_json::Value;
use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::{debug, info};

#[derive(Debug)]
pub struct ScenarioInterpreter {
    scenario: Arc<Scenario>,
    /// Index of the next step to run.
    cursor: usize,
    /// Names declared by this scenario's `make` steps.
    owned: BTreeSet<String>,
}

impl ScenarioInterpreter {
    pub fn new(scenario: Arc<Scenario>) -> Self {
        Self {
            scenario,
            cursor: 0,
            owned: BTreeSet::new(),
        }
    }

    /// Bind to a cached scenario by name.
    pub fn load(scripts: &ScriptRepository, name: &str) -> Result<Self, ScriptError> {
        Ok(Self::new(scripts.scenario(name)?))
    }

    pub fn scenario(&self) -> &Scenario {
        &self.scenario
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Entities this scenario will remove on exit, in name order.
    pub fn owned(&self) -> impl Iterator<Item = &str> {
        self.owned.iter().map(String::as_str)
    }

    fn make(&mut self, store: &mut EntityStore, decls: &[EntityDecl]) {
        for decl in decls {
            store.spawn(decl.name.clone());
            if let Some(position) = decl.position() {
                store.set_position(decl.name.clone(), position);
            }
            if let Some(sprite) = decl.sprite() {
                store.set_sprite(decl.name.clone(), sprite);
            }
            if let Some(text) = decl.text() {
                store.set_text(decl.name.clone(), text);
            }
            self.owned.insert(decl.name.clone());
        }
        debug!(
            scenario = self.scenario.name(),
            count = decls.len(),
            "declared entities"
        );
    }
}

impl FromPayload for ScenarioInterpreter {
    fn from_payload(param: &Value, scripts: &ScriptRepository) -> Result<Self, PayloadError> {
        let name: String = payload::decode(param)?;
        let scenario = scripts
            .scenario(&name)
            .map_err(|_| PayloadError::UnknownScenario { name })?;
        Ok(Self::new(scenario))
    }
}

impl Behavior for ScenarioInterpreter {
    fn name(&self) -> &'static str {
        "scenario"
    }

    fn detail(&self) -> Option<&str> {
        Some(self.scenario.name())
    }

    fn on_enter(&mut self, _store: &mut EntityStore, _tick: &Tick<'_>) -> Result<(), StageError> {
        info!(scenario = self.scenario.name(), steps = self.scenario.len(), "scenario started");
        Ok(())
    }

    fn update(
        &mut self,
        store: &mut EntityStore,
        tick: &Tick<'_>,
    ) -> Result<Directive, StageError> {
        let scenario = Arc::clone(&self.scenario);
        let index = self.cursor;
        let Some(step) = scenario.step(index) else {
            return Ok(Directive::Pop);
        };
        self.cursor += 1;

        let playbook = tick.playbook;
        match step {
            Step::Make(decls) => {
                self.make(store, decls);
                Ok(Directive::None)
            }
            Step::Push(invocation) => {
                let unit = playbook.registry.resolve(
                    scenario.name(),
                    index,
                    invocation,
                    &playbook.scripts,
                )?;
                Ok(Directive::Push(unit))
            }
            Step::Replace(invocation) => {
                let unit = playbook.registry.resolve(
                    scenario.name(),
                    index,
                    invocation,
                    &playbook.scripts,
                )?;
                Ok(Directive::Replace(unit))
            }
        }
    }

    fn on_exit(&mut self, store: &mut EntityStore) {
        for name in &self.owned {
            store.remove(name);
        }
        info!(
            scenario = self.scenario.name(),
            removed = self.owned.len(),
            "scenario finished"
        );
        self.owned.clear();
    }
}
