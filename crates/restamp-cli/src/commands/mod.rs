//! CLI command implementations for restamp.
//!
//! Each module corresponds to a subcommand (`restamp <command>`).

pub mod init;
pub mod inspect;
pub mod run;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use restamp_core::engine::TemplateEngine;
use restamp_core::enumerate::ResourceRoot;
use restamp_core::error::{RestampError, Result};
use restamp_core::project;

/// Engine used when neither the config nor the command line names one.
pub const DEFAULT_ENGINE: &str = "handlebars";

/// Create the engine registered under `name`.
pub fn create_engine(name: &str) -> Result<Box<dyn TemplateEngine>> {
    match name {
        "handlebars" => Ok(Box::new(restamp_handlebars::HandlebarsEngine::new())),
        "minijinja" => Ok(Box::new(restamp_minijinja::MiniJinjaEngine::new())),
        other => Err(RestampError::UnknownEngine(other.to_string())),
    }
}

/// Inputs a processing command works with.
pub struct RunInputs {
    pub engine: String,
    pub roots: Vec<ResourceRoot>,
    pub variables: BTreeMap<String, serde_json::Value>,
}

/// Resolve the engine, root list, and extra variables for a command.
///
/// Roots given on the command line are taken as-is, in argument order
/// (direct host-build invocation). Otherwise the project config next to
/// `config_path` supplies the ordered root list, with relative roots
/// resolved against the project directory.
pub fn resolve_inputs(config_path: &Path, cli_roots: &[PathBuf]) -> Result<RunInputs> {
    let project_dir = config_path.parent().unwrap_or(Path::new(".")).to_path_buf();

    if !cli_roots.is_empty() {
        // Engine and variables still come from a config when one is
        // present; explicit roots only replace the root list.
        let (engine, variables) = match project::load_project(&project_dir) {
            Ok(config) => (config.engine, config.variables),
            Err(_) => (DEFAULT_ENGINE.to_string(), BTreeMap::new()),
        };
        return Ok(RunInputs {
            engine,
            roots: cli_roots.iter().cloned().map(ResourceRoot::new).collect(),
            variables,
        });
    }

    let config = project::load_project(&project_dir)?;

    let roots = config
        .resources
        .iter()
        .map(|r| {
            if r.is_absolute() {
                ResourceRoot::new(r.clone())
            } else {
                ResourceRoot::new(project_dir.join(r))
            }
        })
        .collect();

    Ok(RunInputs {
        engine: config.engine,
        roots,
        variables: config.variables,
    })
}
