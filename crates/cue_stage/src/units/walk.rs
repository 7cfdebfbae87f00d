use super::{FACING_LEFT, FACING_RIGHT};
use crate::{Behavior, Directive, FromPayload, StageError, Tick};
use cue_core::math::{lerp, progress};
use cue_core::{EntityStore, Position, Sprite};
use cue_script::payload;
use cue_script::{PayloadError, ScriptRepository};
use serde::Deserialize;
use serde_json::Value;

/// Moves an entity horizontally to `to` at constant `speed`.
///
/// The start point is sampled on enter; x is interpolated from elapsed time
/// so the final position is exactly `to`.
#[derive(Debug, Clone)]
pub struct Walk {
    entity: String,
    to: f64,
    speed: f64,
    from: f64,
    duration: f64,
    elapsed: f64,
}

#[derive(Deserialize)]
struct WalkParam {
    entity: String,
    to: f64,
    speed: f64,
}

impl Walk {
    pub fn new(entity: impl Into<String>, to: f64, speed: f64) -> Self {
        Self {
            entity: entity.into(),
            to,
            speed,
            from: 0.0,
            duration: 0.0,
            elapsed: 0.0,
        }
    }

    /// Travel time computed on enter.
    pub fn duration(&self) -> f64 {
        self.duration
    }
}

impl FromPayload for Walk {
    fn from_payload(param: &Value, _scripts: &ScriptRepository) -> Result<Self, PayloadError> {
        let param: WalkParam = payload::decode(param)?;
        if !param.to.is_finite() {
            return Err(PayloadError::invalid("to", "must be finite"));
        }
        let speed = payload::positive("speed", param.speed)?;
        Ok(Self::new(param.entity, param.to, speed))
    }
}

impl Behavior for Walk {
    fn name(&self) -> &'static str {
        "walk"
    }

    fn detail(&self) -> Option<&str> {
        Some(&self.entity)
    }

    fn on_enter(&mut self, store: &mut EntityStore, _tick: &Tick<'_>) -> Result<(), StageError> {
        self.from = store.get::<Position>(&self.entity)?.x;
        self.duration = (self.to - self.from).abs() / self.speed;
        self.elapsed = 0.0;

        let sprite = store.get_mut::<Sprite>(&self.entity)?;
        if self.to < self.from {
            sprite.frame.x = FACING_LEFT;
        } else if self.from < self.to {
            sprite.frame.x = FACING_RIGHT;
        }
        Ok(())
    }

    fn update(
        &mut self,
        store: &mut EntityStore,
        tick: &Tick<'_>,
    ) -> Result<Directive, StageError> {
        self.elapsed += tick.delta;
        let t = progress(self.elapsed, self.duration);

        let position = store.get_mut::<Position>(&self.entity)?;
        position.x = lerp(self.from, self.to, t);

        if t >= 1.0 {
            Ok(Directive::Pop)
        } else {
            Ok(Directive::None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{playbook, sprite_entity, tick};
    use serde_json::json;

    #[test]
    fn reaches_target_exactly() {
        let playbook = playbook(json!({}));
        let mut store = EntityStore::new();
        sprite_entity(&mut store, "hero", 0.0);

        let mut walk = Walk::from_payload(
            &json!({ "entity": "hero", "to": 100.0, "speed": 50.0 }),
            &playbook.scripts,
        )
        .unwrap();
        walk.on_enter(&mut store, &tick(&playbook, 0.0)).unwrap();
        assert_eq!(walk.duration(), 2.0);
        assert_eq!(store.get::<Sprite>("hero").unwrap().frame.x, FACING_RIGHT);

        let step = tick(&playbook, 0.5);
        assert!(matches!(walk.update(&mut store, &step).unwrap(), Directive::None));
        assert!(matches!(walk.update(&mut store, &step).unwrap(), Directive::None));
        assert_eq!(store.get::<Position>("hero").unwrap().x, 50.0);

        assert!(matches!(walk.update(&mut store, &step).unwrap(), Directive::None));
        assert!(matches!(walk.update(&mut store, &step).unwrap(), Directive::Pop));
        assert_eq!(store.get::<Position>("hero").unwrap().x, 100.0);
    }

    #[test]
    fn overshooting_tick_clamps_to_target() {
        let playbook = playbook(json!({}));
        let mut store = EntityStore::new();
        sprite_entity(&mut store, "hero", 300.0);

        let mut walk = Walk::new("hero", 250.0, 100.0);
        walk.on_enter(&mut store, &tick(&playbook, 0.0)).unwrap();
        assert_eq!(store.get::<Sprite>("hero").unwrap().frame.x, FACING_LEFT);

        assert!(matches!(
            walk.update(&mut store, &tick(&playbook, 5.0)).unwrap(),
            Directive::Pop
        ));
        assert_eq!(store.get::<Position>("hero").unwrap().x, 250.0);
    }

    #[test]
    fn two_seconds_at_sixty_hz_is_one_hundred_twenty_ticks() {
        let playbook = playbook(json!({}));
        let mut store = EntityStore::new();
        sprite_entity(&mut store, "hero", 0.0);

        let mut walk = Walk::new("hero", 100.0, 50.0);
        walk.on_enter(&mut store, &tick(&playbook, 0.0)).unwrap();
        let step = tick(&playbook, 1.0 / 60.0);
        let popped_at = (1..=240).find(|_| {
            matches!(walk.update(&mut store, &step).unwrap(), Directive::Pop)
        });

        assert_eq!(popped_at, Some(120));
        assert_eq!(store.get::<Position>("hero").unwrap().x, 100.0);
    }

    #[test]
    fn zero_distance_pops_immediately_and_keeps_facing() {
        let playbook = playbook(json!({}));
        let mut store = EntityStore::new();
        sprite_entity(&mut store, "hero", 40.0);
        store.get_mut::<Sprite>("hero").unwrap().frame.x = 7;

        let mut walk = Walk::new("hero", 40.0, 10.0);
        walk.on_enter(&mut store, &tick(&playbook, 0.0)).unwrap();
        assert_eq!(store.get::<Sprite>("hero").unwrap().frame.x, 7);
        assert!(matches!(
            walk.update(&mut store, &tick(&playbook, 0.0)).unwrap(),
            Directive::Pop
        ));
    }

    #[test]
    fn rejects_non_positive_speed() {
        let scripts = ScriptRepository::new();
        let err = Walk::from_payload(&json!({ "entity": "a", "to": 1.0, "speed": 0.0 }), &scripts)
            .unwrap_err();
        assert!(err.to_string().contains("speed"));
    }

    #[test]
    fn walking_needs_a_sprite() {
        let playbook = playbook(json!({}));
        let mut store = EntityStore::new();
        store.set_position("marker", Position::default());
        let mut walk = Walk::new("marker", 10.0, 1.0);
        assert!(walk.on_enter(&mut store, &tick(&playbook, 0.0)).is_err());
    }
}
