//! Dispatch registry: script type name -> unit factory.
//!
//! Assembled once at startup and immutable afterwards.

use crate::units::{Adventure, Anim, Speak, Wait, Walk};
use crate::{Behavior, RegistryError, ScenarioInterpreter};
use cue_script::{Invocation, PayloadError, ScriptError, ScriptRepository};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;

/// Builds a unit from its payload. Factories must not touch the store, so the
/// validation pass can call them ahead of play.
pub type Factory = fn(&Value, &ScriptRepository) -> Result<Box<dyn Behavior>, PayloadError>;

/// Units that can be constructed from a script payload.
pub trait FromPayload: Sized {
    fn from_payload(param: &Value, scripts: &ScriptRepository) -> Result<Self, PayloadError>;
}

/// Factory for any `FromPayload` unit.
pub fn factory_of<T>(
    param: &Value,
    scripts: &ScriptRepository,
) -> Result<Box<dyn Behavior>, PayloadError>
where
    T: FromPayload + Behavior + 'static,
{
    Ok(Box::new(T::from_payload(param, scripts)?))
}

#[derive(Clone)]
pub struct BehaviorRegistry {
    factories: HashMap<String, Factory>,
}

impl BehaviorRegistry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// Registry holding every built-in unit.
    pub fn builtin() -> Self {
        RegistryBuilder::default().with_builtins().build()
    }

    pub fn get(&self, name: &str) -> Option<Factory> {
        self.factories.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Registered type names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.factories.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Construct the unit for a `push`/`replace` step, attributing any
    /// failure to `scenario` and `step`.
    pub fn resolve(
        &self,
        scenario: &str,
        step: usize,
        invocation: &Invocation,
        scripts: &ScriptRepository,
    ) -> Result<Box<dyn Behavior>, ScriptError> {
        let factory = self
            .get(&invocation.behavior)
            .ok_or_else(|| ScriptError::UnknownBehavior {
                scenario: scenario.to_string(),
                step,
                behavior: invocation.behavior.clone(),
            })?;

        factory(&invocation.param, scripts).map_err(|source| ScriptError::InvalidPayload {
            scenario: scenario.to_string(),
            step,
            behavior: invocation.behavior.clone(),
            source,
        })
    }
}

impl fmt::Debug for BehaviorRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BehaviorRegistry")
            .field("behaviors", &self.names())
            .finish()
    }
}

impl Default for BehaviorRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

#[derive(Default)]
pub struct RegistryBuilder {
    factories: HashMap<String, Factory>,
}

impl RegistryBuilder {
    pub fn register(
        mut self,
        name: impl Into<String>,
        factory: Factory,
    ) -> Result<Self, RegistryError> {
        let name = name.into();
        if self.factories.contains_key(&name) {
            return Err(RegistryError::DuplicateBehavior { name });
        }
        self.factories.insert(name, factory);
        Ok(self)
    }

    /// Add the built-in units. Names already registered are kept.
    pub fn with_builtins(mut self) -> Self {
        let builtins: [(&str, Factory); 6] = [
            ("wait", factory_of::<Wait>),
            ("speak", factory_of::<Speak>),
            ("walk", factory_of::<Walk>),
            ("anim", factory_of::<Anim>),
            ("adventure", factory_of::<Adventure>),
            ("scenario", factory_of::<ScenarioInterpreter>),
        ];
        for (name, factory) in builtins {
            self.factories.entry(name.to_string()).or_insert(factory);
        }
        self
    }

    pub fn build(self) -> BehaviorRegistry {
        BehaviorRegistry {
            factories: self.factories,
        }
    }
}
