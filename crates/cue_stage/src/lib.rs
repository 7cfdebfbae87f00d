//! Cue Stage
//!
//! The behavior-stack scheduler and the units it drives.
//!
//! ## Architecture
//!
//! - **Behavior:** a unit of timed or interactive logic with an
//!   enter/update/exit lifecycle, returning a [`Directive`] each tick
//! - **BehaviorStack:** owns the units and drives only the top one
//! - **BehaviorRegistry:** maps script type names to unit factories
//! - **ScenarioInterpreter:** the unit that turns a scenario into directives
//!
//! A host frame is: build a [`Tick`], call [`BehaviorStack::update`] once,
//! then render from the store.

mod behavior;
mod error;
mod playbook;
mod registry;
mod scenario;
mod stack;
pub mod units;

pub use behavior::{Behavior, Directive, Tick};
pub use error::{RegistryError, StageError};
pub use playbook::Playbook;
pub use registry::{factory_of, BehaviorRegistry, Factory, FromPayload, RegistryBuilder};
pub use scenario::ScenarioInterpreter;
pub use stack::BehaviorStack;

#[cfg(test)]
mod testing;
