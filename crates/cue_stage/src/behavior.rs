//! Behavior units and the directives they hand back to the stack.

use crate::{Playbook, StageError};
use cue_core::EntityStore;
use cue_services::InputState;
use std::fmt;

/// Per-tick inputs shared by every unit call within one frame.
#[derive(Clone, Copy)]
pub struct Tick<'a> {
    /// Seconds since the previous tick.
    pub delta: f64,
    pub input: InputState,
    pub playbook: &'a Playbook,
}

impl<'a> Tick<'a> {
    pub fn new(playbook: &'a Playbook, delta: f64, input: InputState) -> Self {
        Self {
            delta,
            input,
            playbook,
        }
    }
}

impl fmt::Debug for Tick<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tick")
            .field("delta", &self.delta)
            .field("input", &self.input)
            .finish_non_exhaustive()
    }
}

/// A stack-managed piece of timed or interactive logic.
///
/// Units hold entities by name only. Lookups go through the store on every
/// call, so a unit sees removals made by anyone else.
pub trait Behavior: fmt::Debug {
    /// Script-level type name, used in logs.
    fn name(&self) -> &'static str;

    /// Extra context for logs (target entity, scenario name).
    fn detail(&self) -> Option<&str> {
        None
    }

    /// Runs once, in the same tick as the push that stacked this unit.
    fn on_enter(&mut self, _store: &mut EntityStore, _tick: &Tick<'_>) -> Result<(), StageError> {
        Ok(())
    }

    /// Runs once per tick while this unit is on top, starting the tick after `on_enter`.
    fn update(&mut self, store: &mut EntityStore, tick: &Tick<'_>) -> Result<Directive, StageError>;

    /// Runs when the unit leaves the stack, by pop or by replace.
    fn on_exit(&mut self, _store: &mut EntityStore) {}
}

/// Stack operation requested by the top unit's `update`.
#[derive(Debug)]
pub enum Directive {
    /// Stay on top; resume next tick.
    None,
    /// Leave the stack.
    Pop,
    /// Stack a new unit above this one.
    Push(Box<dyn Behavior>),
    /// Unwind every stacked unit top to bottom, then stack exactly this one.
    Replace(Box<dyn Behavior>),
}

impl Directive {
    pub fn push(unit: impl Behavior + 'static) -> Self {
        Directive::Push(Box::new(unit))
    }

    pub fn replace(unit: impl Behavior + 'static) -> Self {
        Directive::Replace(Box::new(unit))
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Directive::None => "none",
            Directive::Pop => "pop",
            Directive::Push(_) => "push",
            Directive::Replace(_) => "replace",
        }
    }
}
