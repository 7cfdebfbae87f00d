//! Typed script steps

use crate::payload::Cell;
use crate::StepError;
use cue_core::glam::{IVec2, UVec2};
use cue_core::{FontHandle, ImageHandle, Position, Sprite, Text};
use serde::Deserialize;
use serde_json::Value;

/// One step of a scenario.
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    /// Create (or overwrite) a batch of entities.
    Make(Vec<EntityDecl>),
    /// Stack a new behavior on top of the interpreter.
    Push(Invocation),
    /// Unwind the whole stack, then stack a new behavior.
    Replace(Invocation),
}

/// A behavior type name plus its raw payload.
#[derive(Debug, Clone, PartialEq)]
pub struct Invocation {
    pub behavior: String,
    pub param: Value,
}

const STEP_KEYS: [&str; 3] = ["make", "push", "replace"];

impl Step {
    /// Parse a single step object.
    pub fn parse(value: &Value) -> Result<Self, StepError> {
        let Some(object) = value.as_object() else {
            return Err(StepError::NotAnObject {
                found: kind_of(value),
            });
        };

        let present: Vec<&'static str> = STEP_KEYS
            .iter()
            .copied()
            .filter(|key| object.contains_key(*key))
            .collect();
        match present.len() {
            0 => return Err(StepError::NoAction),
            1 => {}
            _ => return Err(StepError::ManyActions { actions: present }),
        }

        if let Some(make) = object.get("make") {
            let decls = Vec::<EntityDecl>::deserialize(make).map_err(StepError::Make)?;
            return Ok(Step::Make(decls));
        }

        let param = object.get("param").cloned().unwrap_or(Value::Null);
        if let Some(push) = object.get("push") {
            return Ok(Step::Push(Invocation::parse("push", push, param)?));
        }
        let replace = object.get("replace").unwrap_or(&Value::Null);
        Ok(Step::Replace(Invocation::parse("replace", replace, param)?))
    }

    /// The invocation carried by a `push`/`replace` step.
    pub fn invocation(&self) -> Option<&Invocation> {
        match self {
            Step::Make(_) => None,
            Step::Push(invocation) | Step::Replace(invocation) => Some(invocation),
        }
    }
}

impl Invocation {
    fn parse(key: &'static str, name: &Value, param: Value) -> Result<Self, StepError> {
        match name.as_str() {
            Some(behavior) => Ok(Self {
                behavior: behavior.to_string(),
                param,
            }),
            None => Err(StepError::NotABehaviorName {
                key,
                found: kind_of(name),
            }),
        }
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Entity declaration inside a `make` step. Each component block is optional.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EntityDecl {
    pub name: String,
    #[serde(default)]
    pub pos: Option<PosDecl>,
    #[serde(default)]
    pub image: Option<ImageDecl>,
    #[serde(default)]
    pub text: Option<TextDecl>,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct PosDecl {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ImageDecl {
    pub path: String,
    /// Cell size inside the sheet.
    pub size: SizeDecl,
    /// Initial cell.
    pub pos: Cell,
    #[serde(default, rename = "isHidden")]
    pub is_hidden: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct SizeDecl {
    pub x: u32,
    pub y: u32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TextDecl {
    pub text: String,
    pub font: FontDecl,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct FontDecl {
    pub size: u32,
}

impl EntityDecl {
    pub fn position(&self) -> Option<Position> {
        self.pos.map(|pos| Position::new(pos.x, pos.y, pos.z))
    }

    pub fn sprite(&self) -> Option<Sprite> {
        self.image.as_ref().map(|image| Sprite {
            image: ImageHandle::new(&image.path),
            cell_size: UVec2::new(image.size.x, image.size.y),
            frame: IVec2::new(image.pos.x, image.pos.y),
            hidden: image.is_hidden,
        })
    }

    pub fn text(&self) -> Option<Text> {
        self.text
            .as_ref()
            .map(|text| Text::new(text.text.clone(), FontHandle::new(text.font.size)))
    }
}
