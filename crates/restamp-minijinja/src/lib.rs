//! MiniJinja engine for restamp.
//!
//! Runs templates with **strict undefined behavior**: referencing a
//! variable missing from the bindings fails the render instead of
//! expanding to nothing.
//!
//! Load paths back the template loader. A name referenced from
//! `{% import %}` or `{% include %}` is looked up against the load paths
//! in order, first match wins, so templates can pull in the bundled macro
//! modules (`form.j2`, `view.j2`) or a root's own helper bundle.

mod embedded;

use std::path::PathBuf;
use std::sync::{Arc, RwLock};

use minijinja::{Environment, UndefinedBehavior};
use serde_json::{Map, Value};

use restamp_core::assets;
use restamp_core::engine::{TemplateEngine, DEFAULT_ENTRY, RESOURCES_VAR};
use restamp_core::error::{RestampError, Result};
use restamp_core::expand::expand_root;

/// Template suffix recognized by this engine.
pub const TEMPLATE_SUFFIX: &str = "j2";

/// MiniJinja-backed [`TemplateEngine`].
pub struct MiniJinjaEngine {
    env: Environment<'static>,
    /// Shared with the environment's loader closure.
    load_paths: Arc<RwLock<Vec<PathBuf>>>,
    bindings: Map<String, Value>,
}

impl MiniJinjaEngine {
    /// Create a new engine with strict undefined behavior.
    pub fn new() -> Self {
        let load_paths: Arc<RwLock<Vec<PathBuf>>> = Arc::default();

        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);

        let loader_paths = Arc::clone(&load_paths);
        env.set_loader(move |name| {
            let paths = loader_paths.read().unwrap_or_else(|e| e.into_inner());
            for dir in paths.iter() {
                let candidate = dir.join(name);
                match std::fs::read_to_string(&candidate) {
                    Ok(source) => return Ok(Some(source)),
                    Err(e) if e.kind() == std::io::ErrorKind::NotFound => continue,
                    Err(e) => {
                        return Err(minijinja::Error::new(
                            minijinja::ErrorKind::InvalidOperation,
                            format!("failed to read {}: {e}", candidate.display()),
                        ))
                    }
                }
            }
            Ok(None)
        });

        Self {
            env,
            load_paths,
            bindings: Map::new(),
        }
    }
}

impl Default for MiniJinjaEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateEngine for MiniJinjaEngine {
    fn name(&self) -> &'static str {
        "minijinja"
    }

    fn template_suffix(&self) -> &'static str {
        TEMPLATE_SUFFIX
    }

    fn support_load_paths(&self) -> Result<Vec<PathBuf>> {
        Ok(vec![assets::resolve_support_dir(self.name(), embedded::FILES)?])
    }

    fn configure_load_paths(&mut self, paths: Vec<PathBuf>) {
        *self
            .load_paths
            .write()
            .unwrap_or_else(|e| e.into_inner()) = paths;
    }

    fn bind(&mut self, name: &str, value: Value) {
        self.bindings.insert(name.to_string(), value);
    }

    fn invoke(&mut self, entry: &str) -> Result<usize> {
        if entry != DEFAULT_ENTRY {
            return Err(RestampError::UnknownEntryPoint(entry.to_string()));
        }
        let root = match self.bindings.get(RESOURCES_VAR).and_then(Value::as_str) {
            Some(root) => PathBuf::from(root),
            None => return Err(RestampError::MissingBinding(RESOURCES_VAR.to_string())),
        };

        // Drop templates cached by the loader during the previous root's
        // invocation; its helper bundle must not shadow this root's.
        self.env.clear_templates();

        let context = minijinja::Value::from_serialize(&self.bindings);
        let env = &self.env;
        expand_root(&root, TEMPLATE_SUFFIX, &mut |path, source| {
            env.render_str(source, &context)
                .map_err(|e| RestampError::Render {
                    template: path.to_path_buf(),
                    message: e.to_string(),
                })
        })
    }
}
