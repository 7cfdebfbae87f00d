//! Cue Core
//!
//! Contains the data every behavior unit operates on:
//! - Name-keyed entity-component store
//! - Simulation time (per-tick delta)
//! - Math helpers

pub mod math;
pub mod store;
pub mod time;

pub use glam;
pub use store::{
    Component, EntityStore, FontHandle, ImageHandle, Position, Sprite, StoreError, Text,
};

/// Engine version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
