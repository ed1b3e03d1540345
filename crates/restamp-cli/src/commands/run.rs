use std::path::{Path, PathBuf};

use anyhow::Result;

use restamp_core::enumerate::enumerate;
use restamp_core::step;

use crate::output;
use crate::EngineChoice;

/// Expand templates under every resource root.
///
/// Roots given on the command line are processed as-is, in argument order;
/// otherwise the ordered list from the project config is used. Roots are
/// processed sequentially with one engine instance, and the first failing
/// root stops the run.
pub fn run(
    config_path: &Path,
    cli_roots: &[PathBuf],
    engine_override: Option<EngineChoice>,
) -> Result<()> {
    output::print_header("restamp run");

    let mut inputs = super::resolve_inputs(config_path, cli_roots)?;
    if let Some(choice) = engine_override {
        inputs.engine = choice.as_str().to_string();
    }

    output::print_key_value("Engine", &inputs.engine);
    output::print_key_value("Roots", &inputs.roots.len().to_string());

    output::print_step(1, 2, "Enumerating resource roots...");
    let plans = enumerate(&inputs.roots);

    output::print_step(2, 2, "Rendering templates...");
    let engine_name = inputs.engine.clone();
    let report = step::run(
        &plans,
        || super::create_engine(&engine_name),
        &inputs.variables,
    )?;

    output::print_success(&format!(
        "Rendered {} file(s) across {} root(s)",
        report.files, report.roots
    ));

    Ok(())
}
