//! Cue Scripting
//!
//! Scenario scripts arrive as a generic structured-value tree
//! (`serde_json::Value`): a mapping from scenario name to an ordered list of
//! steps. This crate turns that tree into typed steps once, caches each
//! scenario by name, and decodes behavior payloads.
//!
//! ## Step shapes
//!
//! - `{ "make": [entityDecl, ...] }` declares entities
//! - `{ "push": typeName, "param": payload }` stacks a behavior
//! - `{ "replace": typeName, "param": payload }` clears the stack, then stacks a behavior

pub mod error;
pub mod payload;
pub mod repository;
pub mod step;

pub use error::{PayloadError, ScriptError, StepError};
pub use repository::{Scenario, ScriptRepository};
pub use step::{EntityDecl, Invocation, Step};

pub use serde_json::Value;
