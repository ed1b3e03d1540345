use std::path::Path;

use anyhow::Result;
use dialoguer::Select;

use restamp_core::config::ProjectConfig;
use restamp_core::enumerate::AUX_BUNDLE_DIR;
use restamp_core::project;

use crate::output;
use crate::EngineChoice;

const SAMPLE_TEMPLATE_HBS: &str = include_str!("../../../../support/samples/config.xml.hbs");
const SAMPLE_HELPER_HBS: &str = include_str!("../../../../support/samples/banner.hbs");
const SAMPLE_TEMPLATE_J2: &str = include_str!("../../../../support/samples/config.xml.j2");
const SAMPLE_HELPER_J2: &str = include_str!("../../../../support/samples/banner.j2");

/// Initialize a new restamp project.
///
/// Creates the project directory with a starter resource root and helper
/// bundle, writes the configuration, and drops in a sample template so the
/// first `restamp run` has something to expand. If no engine is specified,
/// prompts interactively.
pub fn run(name: &str, engine: Option<EngineChoice>) -> Result<()> {
    output::print_header(&format!("restamp init: {name}"));

    // Select engine (interactive if not provided)
    let engine_name = match engine {
        Some(e) => e.as_str().to_string(),
        None => {
            let options = &["handlebars", "minijinja"];
            let descriptions = &[
                "Handlebars - partial-based helpers, strict variables",
                "MiniJinja - Jinja2 syntax, importable macro modules",
            ];

            let selection = Select::new()
                .with_prompt("Select template engine")
                .items(descriptions)
                .default(0)
                .interact()?;

            options[selection].to_string()
        }
    };

    let project_dir = Path::new(name);
    output::print_step(1, 3, &format!("Creating project directory: {name}/"));
    project::create_project_dirs(project_dir)?;

    output::print_step(2, 3, "Writing configuration");
    let config = ProjectConfig::default_for_engine(name, &engine_name);
    project::write_config(project_dir, &config)?;

    output::print_step(3, 3, "Writing sample resources");
    let resources = project_dir.join("resources");
    let suffix = super::create_engine(&engine_name)?.template_suffix();
    let (template, helper) = match engine_name.as_str() {
        "minijinja" => (SAMPLE_TEMPLATE_J2, SAMPLE_HELPER_J2),
        _ => (SAMPLE_TEMPLATE_HBS, SAMPLE_HELPER_HBS),
    };
    std::fs::write(resources.join(format!("config.xml.{suffix}")), template)?;
    std::fs::write(
        resources.join(AUX_BUNDLE_DIR).join(format!("banner.{suffix}")),
        helper,
    )?;

    output::print_success(&format!(
        "Project '{name}' created with the {engine_name} engine"
    ));
    println!();
    println!("  Next steps:");
    println!("    cd {name}");
    println!("    restamp run");
    println!();

    Ok(())
}
