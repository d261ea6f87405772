//! Runtime configuration.
//!
//! Values come from, in increasing priority: built-in defaults, the JSON
//! config file, a separate JSON parameter file, and command-line flags.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use reacher::{ArenaConfig, ParameterStore, PolicyKind};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    pub episodes: u32,
    pub policy: PolicyKind,
    pub policy_seed: u64,
    pub arena: ArenaConfig,
    /// Episode parameters read by the agent on every reset.
    pub parameters: ParameterStore,
    pub stats_out: Option<PathBuf>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            episodes: 1,
            policy: PolicyKind::Random,
            policy_seed: 0,
            arena: ArenaConfig::default(),
            parameters: ParameterStore::new(),
            stats_out: None,
        }
    }
}

impl RuntimeConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("invalid runtime config")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).with_context(|| format!("cannot read {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("in {}", path.display()))
    }
}

/// Episode parameters: config table, then the parameter file, then `key=value` overrides.
pub fn resolve_parameters(
    base: &ParameterStore,
    params_file: Option<&Path>,
    overrides: &[String],
) -> Result<ParameterStore> {
    let mut params = base.clone();
    if let Some(path) = params_file {
        let text = fs::read_to_string(path).with_context(|| format!("cannot read {}", path.display()))?;
        let file = ParameterStore::from_json(&text).with_context(|| format!("in {}", path.display()))?;
        params.merge(&file);
    }
    for pair in overrides {
        params.apply_override(pair)?;
    }
    Ok(params)
}

/// Re-read the parameter layers after the parameter file changed.
///
/// Returns `None` when the new file cannot be used; the caller keeps running
/// with the parameters it already has.
pub fn reload_parameters(base: &ParameterStore, params_file: &Path, overrides: &[String]) -> Option<ParameterStore> {
    match resolve_parameters(base, Some(params_file), overrides) {
        Ok(params) => {
            tracing::info!("Parameter file changed, reloading.");
            Some(params)
        }
        Err(e) => {
            tracing::error!("Keeping previous parameters: {e:#}");
            None
        }
    }
}
