use crate::{Behavior, Directive, FromPayload, StageError, Tick};
use cue_core::glam::IVec2;
use cue_core::{EntityStore, Sprite};
use cue_script::payload::{self, Cell};
use cue_script::{PayloadError, ScriptRepository};
use serde::Deserialize;
use serde_json::Value;

/// Switches an entity's sprite cell and visibility, then pops on its first update.
#[derive(Debug, Clone)]
pub struct Anim {
    entity: String,
    frame: IVec2,
    hidden: bool,
}

#[derive(Deserialize)]
struct AnimParam {
    entity: String,
    #[serde(rename = "imagePos")]
    image_pos: Cell,
    #[serde(default, rename = "isHidden")]
    is_hidden: bool,
}

impl Anim {
    pub fn new(entity: impl Into<String>, frame: IVec2, hidden: bool) -> Self {
        Self {
            entity: entity.into(),
            frame,
            hidden,
        }
    }
}

impl FromPayload for Anim {
    fn from_payload(param: &Value, _scripts: &ScriptRepository) -> Result<Self, PayloadError> {
        let param: AnimParam = payload::decode(param)?;
        Ok(Self::new(
            param.entity,
            IVec2::new(param.image_pos.x, param.image_pos.y),
            param.is_hidden,
        ))
    }
}

impl Behavior for Anim {
    fn name(&self) -> &'static str {
        "anim"
    }

    fn detail(&self) -> Option<&str> {
        Some(&self.entity)
    }

    fn on_enter(&mut self, store: &mut EntityStore, _tick: &Tick<'_>) -> Result<(), StageError> {
        let sprite = store.get_mut::<Sprite>(&self.entity)?;
        sprite.frame = self.frame;
        sprite.hidden = self.hidden;
        Ok(())
    }

    fn update(
        &mut self,
        _store: &mut EntityStore,
        _tick: &Tick<'_>,
    ) -> Result<Directive, StageError> {
        Ok(Directive::Pop)
    }
}
