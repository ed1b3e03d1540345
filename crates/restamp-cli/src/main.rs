//! restamp CLI: the template-expansion step for project resource trees.
//!
//! Provides three commands covering the preprocessing lifecycle: `init`
//! scaffolds a project, `run` expands the templates under every configured
//! resource root, and `inspect` shows what `run` would process.
//!
//! Rendering is delegated to a template engine crate selected via
//! [`commands::create_engine`].

mod commands;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "restamp",
    about = "Resource template preprocessor: expand embedded-logic templates in place",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to restamp.config.json (default: ./restamp.config.json)
    #[arg(long, global = true, default_value = "restamp.config.json")]
    config: PathBuf,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new restamp project
    Init {
        /// Project name (creates a directory with this name)
        name: String,

        /// Template engine to use
        #[arg(long, value_enum)]
        engine: Option<EngineChoice>,
    },

    /// Expand templates under every resource root
    Run {
        /// Resource roots to process, in order (default: roots from config)
        roots: Vec<PathBuf>,

        /// Override the configured engine
        #[arg(long, value_enum)]
        engine: Option<EngineChoice>,
    },

    /// Show the roots and helper bundles that run would process
    Inspect {
        /// Resource roots to inspect (default: roots from config)
        roots: Vec<PathBuf>,
    },
}

#[derive(ValueEnum, Clone, Debug)]
pub enum EngineChoice {
    Handlebars,
    Minijinja,
}

impl EngineChoice {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Handlebars => "handlebars",
            Self::Minijinja => "minijinja",
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    match cli.command {
        Commands::Init { name, engine } => {
            commands::init::run(&name, engine)?;
        }
        Commands::Run { roots, engine } => {
            commands::run::run(&cli.config, &roots, engine)?;
        }
        Commands::Inspect { roots } => {
            commands::inspect::run(&cli.config, &roots)?;
        }
    }

    Ok(())
}
