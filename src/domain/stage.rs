use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::domain::RecorderError;

/// A named pipeline phase with its expected duration in business days.
#[derive(Debug, Clone, Deserialize)]
pub struct Stage {
    pub name: String,
    pub expected_time: i64,
}

/// Ordered stage definitions loaded from a YAML file. Lookup is by exact
/// name; a miss fails the card being processed, never the whole table.
#[derive(Debug, Clone)]
pub struct StageTable {
    stages: Vec<Stage>,
}

impl StageTable {
    pub fn load(path: &Path) -> Result<Self, RecorderError> {
        let raw = fs::read_to_string(path)?;
        let stages: Vec<Stage> = serde_yaml::from_str(&raw)?;
        Ok(Self { stages })
    }

    pub fn from_stages(stages: Vec<Stage>) -> Self {
        Self { stages }
    }

    pub fn expected_days(&self, name: &str) -> Result<i64, RecorderError> {
        self.stages
            .iter()
            .find(|stage| stage.name == name)
            .map(|stage| stage.expected_time)
            .ok_or_else(|| RecorderError::StageNotFound(name.to_string()))
    }

    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }
}
