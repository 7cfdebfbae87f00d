//! Behavior stack
//!
//! Owns the stacked units and drives only the top one. Each `update` runs
//! exactly one unit's `update` and applies the directive it returns. A pushed
//! unit's `on_enter` runs immediately, but its first `update` waits for the
//! next tick. Units below the top are frozen until everything above them pops.

use crate::{Behavior, Directive, Playbook, StageError, Tick};
use cue_core::EntityStore;
use cue_services::MissingEntityPolicy;
use tracing::{debug, error, warn};

#[derive(Debug)]
pub struct BehaviorStack {
    // Only the last element is ever updated; lower units are untouched until exposed.
    units: Vec<Box<dyn Behavior>>,
    policy: MissingEntityPolicy,
}

impl BehaviorStack {
    /// Create an empty stack.
    pub fn new(policy: MissingEntityPolicy) -> Self {
        Self {
            units: Vec::new(),
            policy,
        }
    }

    /// Create a stack holding an interpreter for the configured entry scenario.
    pub fn with_entry(
        playbook: &Playbook,
        store: &mut EntityStore,
        tick: &Tick<'_>,
    ) -> Result<Self, StageError> {
        let mut stack = Self::new(playbook.settings.missing_entity);
        let entry = playbook.entry()?;
        stack.push(store, tick, Box::new(entry))?;
        Ok(stack)
    }

    pub fn policy(&self) -> MissingEntityPolicy {
        self.policy
    }

    pub fn depth(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    pub fn top(&self) -> Option<&dyn Behavior> {
        self.units.last().map(|unit| &**unit)
    }

    /// Units from bottom to top.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Behavior> {
        self.units.iter().map(|unit| &**unit)
    }

    /// Run one tick: update the top unit and apply its directive.
    ///
    /// An empty stack is a no-op.
    pub fn update(&mut self, store: &mut EntityStore, tick: &Tick<'_>) -> Result<(), StageError> {
        let Some(top) = self.units.last_mut() else {
            return Ok(());
        };

        let directive = match top.update(store, tick) {
            Ok(directive) => directive,
            Err(err) => return self.recover(store, err),
        };
        self.apply(store, tick, directive)
    }

    fn apply(
        &mut self,
        store: &mut EntityStore,
        tick: &Tick<'_>,
        directive: Directive,
    ) -> Result<(), StageError> {
        match directive {
            Directive::None => Ok(()),
            Directive::Pop => {
                self.pop(store);
                Ok(())
            }
            Directive::Push(unit) => self.push(store, tick, unit),
            Directive::Replace(unit) => {
                self.clear(store);
                self.push(store, tick, unit)
            }
        }
    }

    /// Take ownership of `unit`, stack it and run its `on_enter`.
    pub fn push(
        &mut self,
        store: &mut EntityStore,
        tick: &Tick<'_>,
        unit: Box<dyn Behavior>,
    ) -> Result<(), StageError> {
        debug!(
            behavior = unit.name(),
            detail = unit.detail(),
            depth = self.units.len() + 1,
            "push"
        );
        self.units.push(unit);
        let Some(top) = self.units.last_mut() else {
            return Ok(());
        };
        match top.on_enter(store, tick) {
            Ok(()) => Ok(()),
            Err(err) => self.recover(store, err),
        }
    }

    /// Remove the top unit, running its `on_exit`.
    pub fn pop(&mut self, store: &mut EntityStore) {
        if let Some(mut unit) = self.units.pop() {
            debug!(
                behavior = unit.name(),
                detail = unit.detail(),
                depth = self.units.len(),
                "pop"
            );
            unit.on_exit(store);
        }
    }

    /// Pop every unit, top to bottom.
    pub fn clear(&mut self, store: &mut EntityStore) {
        while !self.units.is_empty() {
            self.pop(store);
        }
    }

    /// Handle a failure raised by the top unit.
    fn recover(&mut self, store: &mut EntityStore, err: StageError) -> Result<(), StageError> {
        if let (Some(entity), MissingEntityPolicy::Skip) = (err.missing_entity(), self.policy) {
            warn!(
                behavior = self.top().map(|unit| unit.name()),
                entity,
                error = %err,
                "skipping unit"
            );
            self.pop(store);
            return Ok(());
        }

        error!(error = %err, depth = self.units.len(), "aborting behavior stack");
        self.clear(store);
        Err(err)
    }
}
