//! The template render step: one engine, one root at a time, in order.
//!
//! The step owns the engine lifecycle described by the build contract:
//! construct once, resolve the bundled support load paths once, then loop
//! over the enumerated roots binding and invoking. The first failing root
//! aborts the remainder; nothing is retried and nothing already written is
//! rolled back.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::engine::{TemplateEngine, DEFAULT_ENTRY, RESOURCES_VAR};
use crate::enumerate::RootPlan;
use crate::error::{RestampError, Result};

/// Counters reported by a completed render step.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunReport {
    /// Resource roots processed.
    pub roots: usize,
    /// Template files rendered across all roots.
    pub files: usize,
}

/// Run the render step over enumerated resource roots.
///
/// The engine is constructed once via `factory` and reused across roots;
/// a construction or support-asset failure is fatal before any root is
/// processed. With an empty plan list the factory is never called.
///
/// For each plan, in input order: the load paths are replaced with the
/// support library plus that root's helper bundles, `extra_bindings` and
/// the `resources` variable are bound, and the default entry point is
/// invoked. A failure is wrapped with the root being processed and stops
/// the sequence.
pub fn run<F>(
    plans: &[RootPlan],
    factory: F,
    extra_bindings: &BTreeMap<String, Value>,
) -> Result<RunReport>
where
    F: FnOnce() -> Result<Box<dyn TemplateEngine>>,
{
    if plans.is_empty() {
        return Ok(RunReport::default());
    }

    let mut engine = factory().map_err(init_error)?;
    let support = engine.support_load_paths().map_err(init_error)?;

    let mut report = RunReport::default();

    for plan in plans {
        let mut load_paths = support.clone();
        load_paths.extend(plan.aux_paths.iter().cloned());
        engine.configure_load_paths(load_paths);

        for (name, value) in extra_bindings {
            engine.bind(name, value.clone());
        }
        engine.bind(
            RESOURCES_VAR,
            Value::String(plan.root.directory.display().to_string()),
        );

        tracing::info!("rendering resource root {}", plan.root.directory.display());
        let files = engine
            .invoke(DEFAULT_ENTRY)
            .map_err(|e| RestampError::TemplateExecution {
                root: plan.root.directory.clone(),
                source: Box::new(e),
            })?;

        report.roots += 1;
        report.files += files;
    }

    Ok(report)
}

fn init_error(e: RestampError) -> RestampError {
    match e {
        already @ RestampError::EngineInit(_) => already,
        other => RestampError::EngineInit(other.to_string()),
    }
}
