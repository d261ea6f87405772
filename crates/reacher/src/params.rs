//! Named scalar parameters read by agents at episode boundaries.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::AgentError;

/// Read-only source of named episode parameters.
pub trait EnvironmentParameters {
    /// Value for `key`, or `default` when the key is not set.
    fn get_with_default(&self, key: &str, default: f32) -> f32;
}

/// In-memory parameter table.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParameterStore {
    values: HashMap<String, f32>,
}

impl ParameterStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a flat JSON object of numbers, e.g. `{"goal_size": 3.0}`.
    ///
    /// # Errors
    ///
    /// Returns [`AgentError::Config`] if the text is not such an object.
    pub fn from_json(json: &str) -> Result<Self, AgentError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn set(&mut self, key: impl Into<String>, value: f32) {
        self.values.insert(key.into(), value);
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<f32> {
        self.values.get(key).copied()
    }

    /// Apply a `key=value` override.
    ///
    /// # Errors
    ///
    /// Returns [`AgentError::InvalidParameter`] if the text has no `=`, an
    /// empty key, or a value that is not a number.
    pub fn apply_override(&mut self, pair: &str) -> Result<(), AgentError> {
        let (key, value) = pair
            .split_once('=')
            .ok_or_else(|| AgentError::InvalidParameter(format!("expected key=value, got `{pair}`")))?;
        let key = key.trim();
        if key.is_empty() {
            return Err(AgentError::InvalidParameter(format!("empty key in `{pair}`")));
        }
        let value: f32 = value
            .trim()
            .parse()
            .map_err(|_| AgentError::InvalidParameter(format!("`{value}` is not a number")))?;
        self.set(key, value);
        Ok(())
    }

    /// Copy every entry of `other` over this table.
    pub fn merge(&mut self, other: &ParameterStore) {
        for (key, value) in &other.values {
            self.values.insert(key.clone(), *value);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl EnvironmentParameters for ParameterStore {
    fn get_with_default(&self, key: &str, default: f32) -> f32 {
        self.get(key).unwrap_or(default)
    }
}
