//! Unified error types for the restamp toolkit.

use std::path::PathBuf;
use thiserror::Error;

/// All errors that can occur during restamp operations.
#[derive(Error, Debug)]
pub enum RestampError {
    // --- Configuration ---

    /// The configuration file (`restamp.config.json`) was not found.
    #[error("config file not found at {path}")]
    ConfigNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file exists but contains invalid JSON.
    #[error("failed to parse config at {path}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The specified engine name is not one of: `handlebars`, `minijinja`.
    #[error("unknown engine: {0} (supported: handlebars, minijinja)")]
    UnknownEngine(String),

    // --- Engine ---

    /// The engine could not be constructed, or its bundled support assets
    /// could not be resolved. Fatal before any root is processed.
    #[error("engine initialization failed: {0}")]
    EngineInit(String),

    /// The invoked entry point is not one the engine provides.
    #[error("unknown entry point: {0}")]
    UnknownEntryPoint(String),

    /// The entry point was invoked without a variable it requires.
    #[error("missing binding: {0}")]
    MissingBinding(String),

    // --- Rendering ---

    /// A single template failed to render (syntax error, missing variable).
    #[error("failed to render {template}: {message}")]
    Render { template: PathBuf, message: String },

    /// Processing a resource root failed; remaining roots are not processed.
    #[error("template expansion failed for resource root {root}")]
    TemplateExecution {
        root: PathBuf,
        #[source]
        source: Box<RestampError>,
    },

    // --- Project ---

    /// Attempted to create a project in a directory that already exists.
    #[error("project directory already exists: {0}")]
    ProjectExists(PathBuf),

    /// The current directory is not a restamp project (missing config file).
    #[error("not a restamp project (missing restamp.config.json)")]
    NotAProject,

    // --- General ---

    /// A filesystem I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A catch-all for errors from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Alias for `Result<T, RestampError>`.
pub type Result<T> = std::result::Result<T, RestampError>;
