//! The template-engine seam.
//!
//! Any concrete templating library is substitutable behind
//! [`TemplateEngine`]: configure load paths, bind variables, invoke an entry
//! point. The render step drives the trait; engine crates implement it.

use std::path::PathBuf;

use serde_json::Value;

use crate::error::Result;

/// Name of the entry point every engine ships: walk the bound resources
/// root and expand template-suffixed files in place.
pub const DEFAULT_ENTRY: &str = "expand";

/// Well-known binding holding the current resource root's directory path.
/// Templates and the entry point read it to know where files live.
pub const RESOURCES_VAR: &str = "resources";

/// A templating engine capable of evaluating embedded-logic template text
/// against bound variables and load paths.
///
/// One engine value serves one logical thread of control: it is reused and
/// reconfigured between roots, and must never be driven from two threads at
/// once. Concurrent build units each construct their own engine.
pub trait TemplateEngine {
    /// Engine identifier, e.g. `"handlebars"`.
    fn name(&self) -> &'static str;

    /// File-name suffix marking a template, without the leading dot.
    fn template_suffix(&self) -> &'static str;

    /// Load paths of the support library bundled with the engine. Resolved
    /// once per step and prepended to every invocation's load paths.
    fn support_load_paths(&self) -> Result<Vec<PathBuf>>;

    /// Replace the load paths used by the next invocation. Earlier paths
    /// win when two paths provide the same helper name.
    fn configure_load_paths(&mut self, paths: Vec<PathBuf>);

    /// Bind a variable for the next invocation.
    fn bind(&mut self, name: &str, value: Value);

    /// Run the named entry point against the current bindings and load
    /// paths. Returns the number of files rendered.
    fn invoke(&mut self, entry: &str) -> Result<usize>;
}
