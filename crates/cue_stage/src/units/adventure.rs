use super::{FACING_LEFT, FACING_RIGHT};
use crate::{Behavior, Directive, FromPayload, ScenarioInterpreter, StageError, Tick};
use cue_core::{EntityStore, Position, Sprite};
use cue_script::payload;
use cue_script::{PayloadError, ScriptRepository};
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// Player-controlled exploration.
///
/// Moves the controlled entity along x from input. When it stands near a
/// linked entity and confirm is pressed, the linked scenario is pushed on
/// top; this unit resumes once that scenario pops.
#[derive(Debug, Clone)]
pub struct Adventure {
    entity: String,
    /// Linked entity name -> scenario name. Ordered so the first match is stable.
    links: BTreeMap<String, String>,
}

#[derive(Deserialize)]
struct AdventureParam {
    entity: String,
    #[serde(default)]
    link: BTreeMap<String, String>,
}

impl Adventure {
    pub fn new(entity: impl Into<String>, links: BTreeMap<String, String>) -> Self {
        Self {
            entity: entity.into(),
            links,
        }
    }
}

impl FromPayload for Adventure {
    fn from_payload(param: &Value, scripts: &ScriptRepository) -> Result<Self, PayloadError> {
        let param: AdventureParam = payload::decode(param)?;
        if let Some(missing) = param.link.values().find(|name| !scripts.contains(name)) {
            return Err(PayloadError::UnknownScenario {
                name: missing.clone(),
            });
        }
        Ok(Self::new(param.entity, param.link))
    }
}

impl Behavior for Adventure {
    fn name(&self) -> &'static str {
        "adventure"
    }

    fn detail(&self) -> Option<&str> {
        Some(&self.entity)
    }

    fn update(
        &mut self,
        store: &mut EntityStore,
        tick: &Tick<'_>,
    ) -> Result<Directive, StageError> {
        let settings = &tick.playbook.settings.adventure;
        let step = settings.speed * tick.delta;
        let (direction, facing) = if tick.input.move_x < 0.0 {
            (-1.0, Some(FACING_LEFT))
        } else if tick.input.move_x > 0.0 {
            (1.0, Some(FACING_RIGHT))
        } else {
            (0.0, None)
        };

        let x = {
            let position = store.get_mut::<Position>(&self.entity)?;
            position.x = (position.x + direction * step)
                .max(settings.min_x)
                .min(settings.max_x);
            position.x
        };
        let sprite = store.get_mut::<Sprite>(&self.entity)?;
        if let Some(column) = facing {
            sprite.frame.x = column;
        }

        for (target, scenario) in &self.links {
            let target_x = store.get::<Position>(target)?.x;
            if (x - target_x).abs() < settings.link_distance && tick.input.confirm_pressed() {
                let interpreter = ScenarioInterpreter::load(&tick.playbook.scripts, scenario)?;
                return Ok(Directive::push(interpreter));
            }
        }
        Ok(Directive::None)
    }
}
