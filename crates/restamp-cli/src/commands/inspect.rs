use std::path::{Path, PathBuf};

use anyhow::Result;

use restamp_core::enumerate::enumerate;

use crate::output;

/// Show the roots and helper bundles that `run` would process, in order,
/// without rendering anything.
pub fn run(config_path: &Path, cli_roots: &[PathBuf]) -> Result<()> {
    output::print_header("restamp inspect");

    let inputs = super::resolve_inputs(config_path, cli_roots)?;

    if inputs.roots.is_empty() {
        output::print_warning("No resource roots configured");
        return Ok(());
    }

    output::print_key_value("Engine", &inputs.engine);

    let plans = enumerate(&inputs.roots);
    for (i, plan) in plans.iter().enumerate() {
        output::print_key_value(
            &format!("Root {}", i + 1),
            &plan.root.directory.display().to_string(),
        );
        if plan.aux_paths.is_empty() {
            output::print_list_item("no helper bundle");
        }
        for aux in &plan.aux_paths {
            output::print_list_item(&format!("helper bundle: {}", aux.display()));
        }
    }

    Ok(())
}
