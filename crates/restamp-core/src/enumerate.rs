//! Resource enumeration: which roots to process, and which helper bundles
//! each of them carries.
//!
//! The enumerator performs a single-level listing of every resource root,
//! looking for a subdirectory named exactly [`AUX_BUNDLE_DIR`]. Matches
//! become auxiliary load paths for that root's render invocation only.
//! Enumeration is read-only and never fails: a root that does not exist or
//! cannot be listed simply has no helper bundles, and any real problem under
//! it surfaces later, in the render step.

use std::path::{Path, PathBuf};

/// Name of the helper-bundle directory recognized directly under a resource
/// root. Templates inside it are loadable by the engine but are never
/// rendered as outputs themselves.
pub const AUX_BUNDLE_DIR: &str = "restamp";

/// A directory the host build designates as holding processable resources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRoot {
    /// Directory path as configured by the host build.
    pub directory: PathBuf,
}

impl ResourceRoot {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }
}

/// One resource root paired with the helper directories discovered under it.
#[derive(Debug, Clone)]
pub struct RootPlan {
    pub root: ResourceRoot,
    /// Absolute paths of discovered helper bundles. Listing order; in
    /// practice zero or one entries, since the bundle name is fixed.
    pub aux_paths: Vec<PathBuf>,
}

/// Enumerate resource roots in input order, discovering helper bundles
/// under each.
pub fn enumerate(roots: &[ResourceRoot]) -> Vec<RootPlan> {
    roots
        .iter()
        .map(|root| RootPlan {
            root: root.clone(),
            aux_paths: discover_aux(&root.directory),
        })
        .collect()
}

fn discover_aux(dir: &Path) -> Vec<PathBuf> {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::warn!(
                "resource root {} is not listable ({e}), assuming no helper bundles",
                dir.display()
            );
            return Vec::new();
        }
    };

    let mut aux = Vec::new();
    for entry in entries.flatten() {
        let path = entry.path();
        if entry.file_name() == AUX_BUNDLE_DIR && path.is_dir() {
            aux.push(absolute(&path));
        }
    }
    aux
}

fn absolute(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}
