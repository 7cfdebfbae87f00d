//! Script repository
//!
//! Parses a script document once and caches every scenario by name for the
//! lifetime of the repository. Interpreters share scenarios through `Arc`.

use crate::{ScriptError, Step};
use serde_json::Value;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

/// An ordered, already-parsed list of steps.
#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    name: String,
    steps: Vec<Step>,
}

impl Scenario {
    pub fn new(name: impl Into<String>, steps: Vec<Step>) -> Self {
        Self {
            name: name.into(),
            steps,
        }
    }

    /// Parse a step list, reporting the first malformed step by index.
    pub fn parse(name: &str, value: &Value) -> Result<Self, ScriptError> {
        let Some(items) = value.as_array() else {
            return Err(ScriptError::InvalidDocument {
                reason: format!("scenario '{name}' must be a list of steps"),
            });
        };

        let steps = items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                Step::parse(item).map_err(|source| ScriptError::Malformed {
                    scenario: name.to_string(),
                    step: index,
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::new(name, steps))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn step(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

/// Every scenario known to the host, keyed by name.
#[derive(Debug, Default)]
pub struct ScriptRepository {
    scenarios: HashMap<String, Arc<Scenario>>,
}

impl ScriptRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read and parse a JSON script document.
    pub fn load(path: &Path) -> Result<Self, ScriptError> {
        let source = std::fs::read_to_string(path)?;
        let repository = Self::from_json(&source)?;
        debug!(
            path = %path.display(),
            scenarios = repository.len(),
            "loaded script document"
        );
        Ok(repository)
    }

    pub fn from_json(source: &str) -> Result<Self, ScriptError> {
        let value: Value = serde_json::from_str(source)?;
        Self::from_value(&value)
    }

    /// Build from an already-parsed value tree (any front-end format).
    pub fn from_value(value: &Value) -> Result<Self, ScriptError> {
        let mut repository = Self::new();
        repository.extend_from_value(value)?;
        Ok(repository)
    }

    /// Add every scenario in `value`. Later documents shadow earlier ones.
    pub fn extend_from_value(&mut self, value: &Value) -> Result<(), ScriptError> {
        let Some(document) = value.as_object() else {
            return Err(ScriptError::InvalidDocument {
                reason: "expected a mapping from scenario name to steps".to_string(),
            });
        };

        for (name, steps) in document {
            let scenario = Scenario::parse(name, steps)?;
            self.insert(scenario);
        }
        Ok(())
    }

    pub fn insert(&mut self, scenario: Scenario) {
        self.scenarios
            .insert(scenario.name().to_string(), Arc::new(scenario));
    }

    /// Look up a cached scenario.
    pub fn scenario(&self, name: &str) -> Result<Arc<Scenario>, ScriptError> {
        self.scenarios
            .get(name)
            .cloned()
            .ok_or_else(|| ScriptError::UnknownScenario {
                name: name.to_string(),
            })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.scenarios.contains_key(name)
    }

    /// Scenario names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.scenarios.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn caches_scenarios_by_name() {
        let repository = ScriptRepository::from_value(&json!({
            "init": [ { "push": "wait", "param": 1.0 } ],
            "talk": []
        }))
        .unwrap();

        assert_eq!(repository.names(), vec!["init", "talk"]);
        let first = repository.scenario("init").unwrap();
        let second = repository.scenario("init").unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(first.len(), 1);
        assert!(repository.scenario("talk").unwrap().is_empty());
    }

    #[test]
    fn unknown_scenario_is_an_error() {
        let repository = ScriptRepository::new();
        assert!(matches!(
            repository.scenario("nope"),
            Err(ScriptError::UnknownScenario { name }) if name == "nope"
        ));
    }

    #[test]
    fn malformed_step_reports_scenario_and_index() {
        let err = ScriptRepository::from_json(
            r#"{ "init": [ { "push": "wait", "param": 1 }, { "jump": "x" } ] }"#,
        )
        .unwrap_err();

        match err {
            ScriptError::Malformed { scenario, step, .. } => {
                assert_eq!(scenario, "init");
                assert_eq!(step, 1);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn rejects_non_mapping_documents() {
        assert!(matches!(
            ScriptRepository::from_value(&json!([1, 2])),
            Err(ScriptError::InvalidDocument { .. })
        ));
        assert!(matches!(
            ScriptRepository::from_value(&json!({ "init": { "push": "wait" } })),
            Err(ScriptError::InvalidDocument { .. })
        ));
        assert!(matches!(
            ScriptRepository::from_json("{ not json"),
            Err(ScriptError::Parse(_))
        ));
    }

    #[test]
    fn later_documents_shadow_earlier_ones() {
        let mut repository = ScriptRepository::from_value(&json!({ "init": [] })).unwrap();
        repository
            .extend_from_value(&json!({ "init": [ { "make": [] } ] }))
            .unwrap();
        assert_eq!(repository.scenario("init").unwrap().len(), 1);
    }
}
