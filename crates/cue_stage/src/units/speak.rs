use crate::{Behavior, Directive, FromPayload, StageError, Tick};
use cue_core::{EntityStore, FontHandle, Position, Text};
use cue_script::payload::{self, Offset};
use cue_script::{PayloadError, ScriptRepository};
use serde::Deserialize;
use serde_json::Value;

/// Depth of the speech bubble; draws above the stage at depth 0.
const BUBBLE_DEPTH: f64 = 1.0;
const BUBBLE_FONT_SIZE: u32 = 20;

/// Shows a line of text next to an entity until confirm is pressed.
///
/// The bubble is a transient entity named `<entity>_speak`, owned by this
/// unit: created on enter, removed on exit.
#[derive(Debug, Clone)]
pub struct Speak {
    entity: String,
    bubble: String,
    text: String,
    offset: Offset,
}

#[derive(Deserialize)]
struct SpeakParam {
    entity: String,
    text: String,
    #[serde(default)]
    offset: Offset,
}

impl Speak {
    pub fn new(entity: impl Into<String>, text: impl Into<String>, offset: Offset) -> Self {
        let entity = entity.into();
        Self {
            bubble: bubble_name(&entity),
            entity,
            text: text.into(),
            offset,
        }
    }
}

pub(crate) fn bubble_name(entity: &str) -> String {
    format!("{entity}_speak")
}

impl FromPayload for Speak {
    fn from_payload(param: &Value, _scripts: &ScriptRepository) -> Result<Self, PayloadError> {
        let param: SpeakParam = payload::decode(param)?;
        Ok(Self::new(param.entity, param.text, param.offset))
    }
}

impl Behavior for Speak {
    fn name(&self) -> &'static str {
        "speak"
    }

    fn detail(&self) -> Option<&str> {
        Some(&self.entity)
    }

    fn on_enter(&mut self, store: &mut EntityStore, _tick: &Tick<'_>) -> Result<(), StageError> {
        let speaker = *store.get::<Position>(&self.entity)?;
        store.set_position(
            self.bubble.clone(),
            Position::new(
                speaker.x + self.offset.x,
                speaker.y + self.offset.y,
                BUBBLE_DEPTH,
            ),
        );
        store.set_text(
            self.bubble.clone(),
            Text::new(self.text.clone(), FontHandle::new(BUBBLE_FONT_SIZE)),
        );
        Ok(())
    }

    fn update(
        &mut self,
        _store: &mut EntityStore,
        tick: &Tick<'_>,
    ) -> Result<Directive, StageError> {
        if tick.input.confirm_pressed() {
            return Ok(Directive::Pop);
        }
        Ok(Directive::None)
    }

    fn on_exit(&mut self, store: &mut EntityStore) {
        store.remove(&self.bubble);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{playbook, tick, tick_with};
    use cue_services::InputState;
    use serde_json::json;

    #[test]
    fn bubble_lives_between_enter_and_exit() {
        let playbook = playbook(json!({}));
        let mut store = EntityStore::new();
        store.set_position("alice", Position::new(100.0, 200.0, 0.0));

        let mut speak = Speak::from_payload(
            &json!({ "entity": "alice", "text": "Hello", "offset": { "y": -40.0 } }),
            &playbook.scripts,
        )
        .unwrap();

        for _ in 0..3 {
            speak.on_enter(&mut store, &tick(&playbook, 0.0)).unwrap();
            assert_eq!(store.len(), 2);
            assert_eq!(
                *store.get::<Position>("alice_speak").unwrap(),
                Position::new(100.0, 160.0, BUBBLE_DEPTH)
            );
            assert_eq!(store.get::<Text>("alice_speak").unwrap().text, "Hello");

            speak.on_exit(&mut store);
            assert_eq!(store.len(), 1);
            assert!(!store.contains("alice_speak"));
            assert!(store.contains("alice"));
        }
    }

    #[test]
    fn pops_only_on_confirm() {
        let playbook = playbook(json!({}));
        let mut store = EntityStore::new();
        let mut speak = Speak::new("alice", "Hi", Offset::default());

        let idle = speak.update(&mut store, &tick(&playbook, 0.1)).unwrap();
        assert!(matches!(idle, Directive::None));
        let moving = speak
            .update(&mut store, &tick_with(&playbook, 0.1, InputState::right()))
            .unwrap();
        assert!(matches!(moving, Directive::None));
        let confirmed = speak
            .update(&mut store, &tick_with(&playbook, 0.1, InputState::confirm()))
            .unwrap();
        assert!(matches!(confirmed, Directive::Pop));
    }

    #[test]
    fn missing_speaker_fails_without_creating_bubble() {
        let playbook = playbook(json!({}));
        let mut store = EntityStore::new();
        let mut speak = Speak::new("nobody", "...", Offset::default());

        assert!(speak.on_enter(&mut store, &tick(&playbook, 0.0)).is_err());
        assert!(store.is_empty());
    }
}
