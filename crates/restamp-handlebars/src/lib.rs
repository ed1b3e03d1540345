//! Handlebars engine for restamp.
//!
//! Runs templates in **strict mode**: a `{{variable}}` missing from the
//! bindings fails the render instead of expanding to nothing. Rendered
//! output usually feeds later build steps, and a silently empty value
//! would surface there as a much more confusing failure.
//!
//! Load paths supply partials. Every `*.hbs` file under a load path is
//! registered under its file stem, so `form/textbox.hbs` on a load path is
//! usable as `{{> textbox name="directory"}}`. Paths are searched in order
//! and the first file claiming a stem wins; a root's helper bundle can
//! therefore add partials but not shadow the bundled support library.
//!
//! The bundled library ships XML view helpers: `view` wraps content in the
//! namespaced `<j:jelly>` root element (block partial), and the `form/*`
//! files provide `<f:...>` widget partials (`entry`, `textbox`, `textarea`,
//! `checkbox`, `section`, `advanced`, `submit`, `validate_button`) bound to
//! `${instance.<name>}` expressions.

mod embedded;

use std::path::PathBuf;

use handlebars::Handlebars;
use serde_json::{Map, Value};

use restamp_core::assets;
use restamp_core::engine::{TemplateEngine, DEFAULT_ENTRY, RESOURCES_VAR};
use restamp_core::error::{RestampError, Result};
use restamp_core::expand::expand_root;

/// Template suffix recognized by this engine.
pub const TEMPLATE_SUFFIX: &str = "hbs";

/// Handlebars-backed [`TemplateEngine`].
pub struct HandlebarsEngine {
    hbs: Handlebars<'static>,
    load_paths: Vec<PathBuf>,
    bindings: Map<String, Value>,
}

impl HandlebarsEngine {
    /// Create a new engine with strict mode enabled.
    pub fn new() -> Self {
        let mut hbs = Handlebars::new();
        hbs.set_strict_mode(true);
        Self {
            hbs,
            load_paths: Vec::new(),
            bindings: Map::new(),
        }
    }

    /// Register partials from the configured load paths.
    ///
    /// Previously registered partials are cleared first: helpers from one
    /// root's bundle must not leak into the next root's invocation.
    fn register_partials(&mut self) -> Result<()> {
        self.hbs.clear_templates();

        let dotted = format!(".{TEMPLATE_SUFFIX}");
        for dir in &self.load_paths {
            if !dir.is_dir() {
                tracing::warn!("load path {} is not a directory, skipping", dir.display());
                continue;
            }
            for entry in walkdir::WalkDir::new(dir).sort_by_file_name() {
                let entry = entry.map_err(std::io::Error::from)?;
                if !entry.file_type().is_file() {
                    continue;
                }
                let Some(file_name) = entry.file_name().to_str() else {
                    continue;
                };
                let Some(stem) = file_name.strip_suffix(&dotted) else {
                    continue;
                };
                if stem.is_empty() || self.hbs.get_templates().contains_key(stem) {
                    continue;
                }

                let contents = std::fs::read_to_string(entry.path())?;
                self.hbs
                    .register_template_string(stem, contents)
                    .map_err(|e| RestampError::Render {
                        template: entry.path().to_path_buf(),
                        message: e.to_string(),
                    })?;
                tracing::debug!("registered partial {stem} from {}", entry.path().display());
            }
        }

        Ok(())
    }
}

impl Default for HandlebarsEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateEngine for HandlebarsEngine {
    fn name(&self) -> &'static str {
        "handlebars"
    }

    fn template_suffix(&self) -> &'static str {
        TEMPLATE_SUFFIX
    }

    fn support_load_paths(&self) -> Result<Vec<PathBuf>> {
        Ok(vec![assets::resolve_support_dir(self.name(), embedded::FILES)?])
    }

    fn configure_load_paths(&mut self, paths: Vec<PathBuf>) {
        self.load_paths = paths;
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

        self.register_partials()?;

        let context = Value::Object(self.bindings.clone());
        let hbs = &self.hbs;
        expand_root(&root, TEMPLATE_SUFFIX, &mut |path, source| {
            hbs.render_template(source, &context)
                .map_err(|e| RestampError::Render {
                    template: path.to_path_buf(),
                    message: e.to_string(),
                })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;

    fn engine_for(root: &Path, load_paths: Vec<PathBuf>) -> HandlebarsEngine {
        let mut engine = HandlebarsEngine::new();
        engine.configure_load_paths(load_paths);
        engine.bind(
            RESOURCES_VAR,
            Value::String(root.display().to_string()),
        );
        engine
    }

    #[test]
    fn test_render_bound_variable() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("greeting.xml.hbs"), "Hello {{who}}").unwrap();

        let mut engine = engine_for(dir.path(), vec![]);
        engine.bind("who", Value::String("World".into()));
        let rendered = engine.invoke(DEFAULT_ENTRY).unwrap();

        assert_eq!(rendered, 1);
        let out = fs::read_to_string(dir.path().join("greeting.xml")).unwrap();
        assert_eq!(out, "Hello World");
    }

    #[test]
    fn test_strict_mode_rejects_missing_variable() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("bad.xml.hbs"), "{{never_bound}}").unwrap();

        let mut engine = engine_for(dir.path(), vec![]);
        let result = engine.invoke(DEFAULT_ENTRY);
        assert!(matches!(result, Err(RestampError::Render { .. })));
        assert!(!dir.path().join("bad.xml").exists());
    }

    #[test]
    fn test_partial_resolves_from_load_path() {
        let root = tempfile::tempdir().unwrap();
        let helpers = tempfile::tempdir().unwrap();
        fs::write(helpers.path().join("banner.hbs"), "[{{who}}]").unwrap();
        fs::write(root.path().join("page.xml.hbs"), "{{> banner}}").unwrap();

        let mut engine = engine_for(root.path(), vec![helpers.path().to_path_buf()]);
        engine.bind("who", Value::String("demo".into()));
        engine.invoke(DEFAULT_ENTRY).unwrap();

        let out = fs::read_to_string(root.path().join("page.xml")).unwrap();
        assert_eq!(out, "[demo]");
    }

    #[test]
    fn test_first_load_path_wins() {
        let root = tempfile::tempdir().unwrap();
        let first = tempfile::tempdir().unwrap();
        let second = tempfile::tempdir().unwrap();
        fs::write(first.path().join("banner.hbs"), "first").unwrap();
        fs::write(second.path().join("banner.hbs"), "second").unwrap();
        fs::write(root.path().join("page.xml.hbs"), "{{> banner}}").unwrap();

        let mut engine = engine_for(
            root.path(),
            vec![first.path().to_path_buf(), second.path().to_path_buf()],
        );
        engine.invoke(DEFAULT_ENTRY).unwrap();

        let out = fs::read_to_string(root.path().join("page.xml")).unwrap();
        assert_eq!(out, "first");
    }

    #[test]
    fn test_partials_do_not_leak_across_invocations() {
        let root_a = tempfile::tempdir().unwrap();
        let root_b = tempfile::tempdir().unwrap();
        let helpers = tempfile::tempdir().unwrap();
        fs::write(helpers.path().join("banner.hbs"), "aux").unwrap();
        fs::write(root_a.path().join("a.xml.hbs"), "{{> banner}}").unwrap();
        fs::write(root_b.path().join("b.xml.hbs"), "{{> banner}}").unwrap();

        let mut engine = engine_for(root_a.path(), vec![helpers.path().to_path_buf()]);
        engine.invoke(DEFAULT_ENTRY).unwrap();

        // Second root has no helper bundle; the partial must be gone.
        engine.configure_load_paths(vec![]);
        engine.bind(
            RESOURCES_VAR,
            Value::String(root_b.path().display().to_string()),
        );
        let result = engine.invoke(DEFAULT_ENTRY);
        assert!(matches!(result, Err(RestampError::Render { .. })));
    }

    #[test]
    fn test_support_library_textbox_partial() {
        let root = tempfile::tempdir().unwrap();
        fs::write(
            root.path().join("form.xml.hbs"),
            r#"{{> textbox name="directory"}}"#,
        )
        .unwrap();

        let mut engine = engine_for(root.path(), vec![]);
        let support = engine.support_load_paths().unwrap();
        engine.configure_load_paths(support);
        engine.invoke(DEFAULT_ENTRY).unwrap();

        let out = fs::read_to_string(root.path().join("form.xml")).unwrap();
        assert!(out.contains(r#"<f:textbox name="directory" value="${instance.directory}"/>"#));
    }

    #[test]
    fn test_support_library_view_block_partial() {
        let root = tempfile::tempdir().unwrap();
        fs::write(
            root.path().join("view.xml.hbs"),
            "{{#> view}}<h1>body</h1>{{/view}}",
        )
        .unwrap();

        let mut engine = engine_for(root.path(), vec![]);
        let support = engine.support_load_paths().unwrap();
        engine.configure_load_paths(support);
        engine.invoke(DEFAULT_ENTRY).unwrap();

        let out = fs::read_to_string(root.path().join("view.xml")).unwrap();
        assert!(out.contains(r#"<j:jelly xmlns:j="jelly:core""#));
        assert!(out.contains("<h1>body</h1>"));
        assert!(out.contains("</j:jelly>"));
    }

    #[test]
    fn test_unknown_entry_point() {
        let mut engine = HandlebarsEngine::new();
        engine.bind(RESOURCES_VAR, Value::String("/tmp".into()));
        let result = engine.invoke("compile");
        assert!(matches!(result, Err(RestampError::UnknownEntryPoint(_))));
    }

    #[test]
    fn test_missing_resources_binding() {
        let mut engine = HandlebarsEngine::new();
        let result = engine.invoke(DEFAULT_ENTRY);
        assert!(matches!(result, Err(RestampError::MissingBinding(_))));
    }

    #[test]
    fn test_step_renders_two_roots() {
        use restamp_core::enumerate::{enumerate, ResourceRoot};
        use restamp_core::step;
        use std::collections::BTreeMap;

        let a = tempfile::tempdir().unwrap();
        let b = tempfile::tempdir().unwrap();
        fs::write(a.path().join("a.xml.hbs"), "alpha").unwrap();
        fs::write(b.path().join("b.xml.hbs"), "beta").unwrap();

        let roots = vec![ResourceRoot::new(a.path()), ResourceRoot::new(b.path())];
        let plans = enumerate(&roots);
        let report = step::run(
            &plans,
            || Ok(Box::new(HandlebarsEngine::new()) as Box<dyn TemplateEngine>),
            &BTreeMap::new(),
        )
        .unwrap();

        assert_eq!(report.roots, 2);
        assert_eq!(report.files, 2);
        assert_eq!(fs::read_to_string(a.path().join("a.xml")).unwrap(), "alpha");
        assert_eq!(fs::read_to_string(b.path().join("b.xml")).unwrap(), "beta");
    }

    #[test]
    fn test_step_helper_bundle_scoped_per_root() {
        use restamp_core::enumerate::{enumerate, ResourceRoot, AUX_BUNDLE_DIR};
        use restamp_core::step;
        use std::collections::BTreeMap;

        // Root a carries a helper bundle; root b references the same partial
        // without one and must fail, after a has already rendered.
        let a = tempfile::tempdir().unwrap();
        let b = tempfile::tempdir().unwrap();
        let bundle = a.path().join(AUX_BUNDLE_DIR);
        fs::create_dir(&bundle).unwrap();
        fs::write(bundle.join("banner.hbs"), "from-bundle").unwrap();
        fs::write(a.path().join("a.xml.hbs"), "{{> banner}}").unwrap();
        fs::write(b.path().join("b.xml.hbs"), "{{> banner}}").unwrap();

        let roots = vec![ResourceRoot::new(a.path()), ResourceRoot::new(b.path())];
        let plans = enumerate(&roots);
        let result = step::run(
            &plans,
            || Ok(Box::new(HandlebarsEngine::new()) as Box<dyn TemplateEngine>),
            &BTreeMap::new(),
        );

        match result {
            Err(RestampError::TemplateExecution { root, .. }) => {
                assert_eq!(root, b.path());
            }
            other => panic!("expected TemplateExecution for second root, got {other:?}"),
        }
        assert_eq!(
            fs::read_to_string(a.path().join("a.xml")).unwrap(),
            "from-bundle"
        );
        assert!(!b.path().join("b.xml").exists());
    }

    #[test]
    fn test_helper_bundle_files_not_expanded() {
        let root = tempfile::tempdir().unwrap();
        let bundle = root.path().join("restamp");
        fs::create_dir(&bundle).unwrap();
        fs::write(bundle.join("banner.hbs"), "helper {{who}}").unwrap();
        fs::write(root.path().join("page.xml.hbs"), "{{> banner}}").unwrap();

        let mut engine = engine_for(root.path(), vec![bundle.clone()]);
        engine.bind("who", Value::String("x".into()));
        let rendered = engine.invoke(DEFAULT_ENTRY).unwrap();

        // Only the page itself is an output; the helper stays a library.
        assert_eq!(rendered, 1);
        assert!(!bundle.join("banner").exists());
        assert_eq!(
            fs::read_to_string(root.path().join("page.xml")).unwrap(),
            "helper x"
        );
    }
}
