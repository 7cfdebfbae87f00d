//! Entity-component store
//!
//! Entities have no representation of their own: an entity is a unique name in
//! the name set, and it "has" a component when that component's table holds an
//! entry under the same name. Tables are only reachable through the store, so
//! a table can never hold a name the name set does not.

mod component;
mod error;

pub use component::{FontHandle, ImageHandle, Position, Sprite, Text};
pub use error::StoreError;

use std::collections::{HashMap, HashSet};
use tracing::trace;

mod private {
    use super::EntityStore;
    use std::collections::HashMap;

    /// Table access, sealed so only the store can touch raw tables.
    pub trait Table: Sized {
        fn table(store: &EntityStore) -> &HashMap<String, Self>;
        fn table_mut(store: &mut EntityStore) -> &mut HashMap<String, Self>;
    }
}

/// A kind of data the store keeps per entity.
pub trait Component: private::Table + 'static {
    /// Human-readable name for diagnostics.
    const NAME: &'static str;
}

macro_rules! define_component {
    ($ty:ty, $field:ident, $name:expr) => {
        impl private::Table for $ty {
            fn table(store: &EntityStore) -> &HashMap<String, Self> {
                &store.$field
            }

            fn table_mut(store: &mut EntityStore) -> &mut HashMap<String, Self> {
                &mut store.$field
            }
        }

        impl Component for $ty {
            const NAME: &'static str = $name;
        }
    };
}

define_component!(Position, positions, "Position");
define_component!(Sprite, sprites, "Sprite");
define_component!(Text, texts, "Text");

/// Name set plus one sparse table per component.
#[derive(Debug, Default)]
pub struct EntityStore {
    names: HashSet<String>,
    positions: HashMap<String, Position>,
    sprites: HashMap<String, Sprite>,
    texts: HashMap<String, Text>,
}

impl EntityStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset to an empty store.
    pub fn init(&mut self) {
        self.names.clear();
        self.positions.clear();
        self.sprites.clear();
        self.texts.clear();
    }

    /// Register a name without attaching any component.
    ///
    /// Returns `false` if the name was already live.
    pub fn spawn(&mut self, name: impl Into<String>) -> bool {
        self.names.insert(name.into())
    }

    /// Attach (or overwrite) a component, creating the entity if needed.
    pub fn set<C: Component>(&mut self, name: impl Into<String>, value: C) {
        let name = name.into();
        if !self.names.contains(&name) {
            self.names.insert(name.clone());
        }
        C::table_mut(self).insert(name, value);
    }

    pub fn set_position(&mut self, name: impl Into<String>, value: Position) {
        self.set(name, value);
    }

    pub fn set_sprite(&mut self, name: impl Into<String>, value: Sprite) {
        self.set(name, value);
    }

    pub fn set_text(&mut self, name: impl Into<String>, value: Text) {
        self.set(name, value);
    }

    /// Remove an entity from the name set and from every table.
    ///
    /// Returns `false` if the name was not live.
    pub fn remove(&mut self, name: &str) -> bool {
        let existed = self.names.remove(name);
        self.positions.remove(name);
        self.sprites.remove(name);
        self.texts.remove(name);
        if existed {
            trace!(entity = name, "removed entity");
        }
        existed
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn has<C: Component>(&self, name: &str) -> bool {
        C::table(self).contains_key(name)
    }

    /// Borrow a component, failing if the entity or the component is absent.
    pub fn get<C: Component>(&self, name: &str) -> Result<&C, StoreError> {
        match C::table(self).get(name) {
            Some(value) => Ok(value),
            None => Err(self.missing::<C>(name)),
        }
    }

    /// Mutably borrow a component, failing if the entity or the component is absent.
    pub fn get_mut<C: Component>(&mut self, name: &str) -> Result<&mut C, StoreError> {
        if !C::table(self).contains_key(name) {
            return Err(self.missing::<C>(name));
        }
        C::table_mut(self)
            .get_mut(name)
            .ok_or_else(|| StoreError::MissingComponent {
                name: name.to_string(),
                component: C::NAME,
            })
    }

    fn missing<C: Component>(&self, name: &str) -> StoreError {
        if self.names.contains(name) {
            StoreError::MissingComponent {
                name: name.to_string(),
                component: C::NAME,
            }
        } else {
            StoreError::MissingEntity {
                name: name.to_string(),
            }
        }
    }

    /// All live names, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Number of live entities.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Names of every positioned entity, sorted by ascending depth, ties by name.
    pub fn draw_order(&self) -> Vec<&str> {
        let mut order: Vec<(&str, f64)> = self
            .positions
            .iter()
            .map(|(name, pos)| (name.as_str(), pos.z))
            .collect();
        order.sort_by(|(a_name, a_z), (b_name, b_z)| {
            a_z.total_cmp(b_z).then_with(|| a_name.cmp(b_name))
        });
        order.into_iter().map(|(name, _)| name).collect()
    }
}
