//! Project directory creation and config I/O.
//!
//! Helpers for the `init` command to scaffold a new project directory, and
//! for other commands to load an existing project's configuration.
//!
//! ## Directory layout
//!
//! ```text
//! <project>/
//! ├── restamp.config.json    # ProjectConfig
//! └── resources/             # starter resource root
//!     └── restamp/           # helper bundle, loadable by this root only
//! ```

use std::path::Path;

use crate::config::{ProjectConfig, CONFIG_FILE};
use crate::enumerate::AUX_BUNDLE_DIR;
use crate::error::{RestampError, Result};

/// Create the base project directory structure.
pub fn create_project_dirs(project_dir: &Path) -> Result<()> {
    if project_dir.exists() {
        return Err(RestampError::ProjectExists(project_dir.to_path_buf()));
    }

    std::fs::create_dir_all(project_dir.join("resources").join(AUX_BUNDLE_DIR))?;
    Ok(())
}

/// Write the config file to the project directory.
pub fn write_config(project_dir: &Path, config: &ProjectConfig) -> Result<()> {
    config.save(&project_dir.join(CONFIG_FILE))
}

/// Load the config from an existing project directory.
pub fn load_project(project_dir: &Path) -> Result<ProjectConfig> {
    let config_path = project_dir.join(CONFIG_FILE);
    if !config_path.exists() {
        return Err(RestampError::NotAProject);
    }
    ProjectConfig::load(&config_path)
}
