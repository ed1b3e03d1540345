//! Project configuration: `restamp.config.json`.
//!
//! The config is the adapter between a host build and the render step: it
//! carries the ordered resource-root list, the engine choice, and any extra
//! variables the build wants bound for every invocation.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{RestampError, Result};

/// File name of the project configuration.
pub const CONFIG_FILE: &str = "restamp.config.json";

/// Host-build configuration consumed by the render step.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Project name.
    pub name: String,
    /// Engine identifier: "handlebars" or "minijinja".
    pub engine: String,
    /// Ordered resource roots to process, relative to the project directory
    /// unless absolute.
    pub resources: Vec<PathBuf>,
    /// Extra variables bound for every invocation. A sorted map, so
    /// repeated runs bind in a stable order.
    #[serde(default)]
    pub variables: BTreeMap<String, Value>,
}

impl ProjectConfig {
    /// Default configuration for a fresh project.
    pub fn default_for_engine(name: &str, engine: &str) -> Self {
        Self {
            name: name.into(),
            engine: engine.into(),
            resources: vec![PathBuf::from("resources")],
            variables: BTreeMap::new(),
        }
    }

    /// Load a configuration from `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| RestampError::ConfigNotFound {
                path: path.to_path_buf(),
                source: e,
            })?;
        serde_json::from_str(&contents).map_err(|e| RestampError::ConfigParse {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Save the configuration to `path` as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(|e| RestampError::ConfigParse {
            path: path.to_path_buf(),
            source: e,
        })?;
        std::fs::write(path, json)?;
        Ok(())
    }
}
