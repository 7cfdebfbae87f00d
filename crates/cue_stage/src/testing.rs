//! Fixtures shared by unit tests.

use crate::{BehaviorRegistry, Playbook, Tick};
use cue_core::glam::{IVec2, UVec2};
use cue_core::{EntityStore, ImageHandle, Position, Sprite};
use cue_script::ScriptRepository;
use cue_services::{InputState, StageSettings};
use serde_json::Value;

pub fn playbook(document: Value) -> Playbook {
    playbook_with(document, StageSettings::default())
}

pub fn playbook_with(document: Value, settings: StageSettings) -> Playbook {
    let scripts = ScriptRepository::from_value(&document).expect("test script should parse");
    Playbook::new(scripts, BehaviorRegistry::builtin(), settings)
}

pub fn tick(playbook: &Playbook, delta: f64) -> Tick<'_> {
    Tick::new(playbook, delta, InputState::default())
}

pub fn tick_with(playbook: &Playbook, delta: f64, input: InputState) -> Tick<'_> {
    Tick::new(playbook, delta, input)
}

/// Positioned entity with a sprite, at depth 0.
pub fn sprite_entity(store: &mut EntityStore, name: &str, x: f64) {
    store.set_position(name, Position::new(x, 0.0, 0.0));
    store.set_sprite(
        name,
        Sprite::new(ImageHandle::new("sheet.png"), UVec2::new(16, 16), IVec2::ZERO),
    );
}
