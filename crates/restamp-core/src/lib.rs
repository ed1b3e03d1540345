//! Core library for the restamp resource preprocessor.
//!
//! Provides the [`engine::TemplateEngine`] trait that all template engines
//! implement, along with shared infrastructure: resource enumeration, the
//! per-root render step, bundled-asset resolution, configuration loading,
//! and project scaffolding.
//!
//! This crate is engine-agnostic. Concrete engines live in their own crates:
//! - [`restamp_handlebars`](https://docs.rs/restamp-handlebars): strict-mode Handlebars with a partial library
//! - [`restamp_minijinja`](https://docs.rs/restamp-minijinja): strict-undefined MiniJinja with a macro library

pub mod assets;
pub mod config;
pub mod engine;
pub mod enumerate;
pub mod error;
pub mod expand;
pub mod project;
pub mod step;
