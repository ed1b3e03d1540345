//! Resolution of bundled template-support assets.
//!
//! Engines ship their default support libraries inside the binary, but at
//! run time they need those files as a plain directory on disk to use as a
//! load path. This module is the adapter between the two: it resolves an
//! unpacked support tree when one is present, and otherwise materializes
//! the embedded copies. Whatever the source, the resolved location is a
//! plain filesystem path with any archive-scheme prefix stripped.

use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::{RestampError, Result};

static MATERIALIZE_SEQ: AtomicU64 = AtomicU64::new(0);

/// Environment variable pointing at an unpacked support-asset tree. The
/// engine's bundle is expected at `$RESTAMP_SUPPORT_DIR/<engine>`.
pub const SUPPORT_DIR_ENV: &str = "RESTAMP_SUPPORT_DIR";

/// Strip an archive-scheme prefix from a resource location.
///
/// Packaged installs can hand out locations like `jar:file:///opt/x` or
/// `file:///opt/x`; engines expect a plain filesystem-style path.
pub fn strip_archive_prefix(raw: &str) -> &str {
    let rest = raw
        .strip_prefix("jar:")
        .or_else(|| raw.strip_prefix("bundle:"))
        .unwrap_or(raw);
    rest.strip_prefix("file://").unwrap_or(rest)
}

/// Resolve the on-disk support directory for an engine.
///
/// Resolution order:
/// 1. `$RESTAMP_SUPPORT_DIR/<engine>` when the variable is set;
/// 2. `support/<engine>` next to the running executable (unpacked install);
/// 3. the embedded copies in `files`, materialized under the system temp
///    directory (packaged binary).
///
/// `files` pairs bundle-relative paths with embedded contents. The returned
/// path never carries an archive-scheme prefix.
pub fn resolve_support_dir(engine: &str, files: &[(&str, &str)]) -> Result<PathBuf> {
    if let Ok(raw) = std::env::var(SUPPORT_DIR_ENV) {
        let base = PathBuf::from(strip_archive_prefix(&raw));
        let dir = base.join(engine);
        if dir.is_dir() {
            return Ok(dir);
        }
        return Err(RestampError::EngineInit(format!(
            "{SUPPORT_DIR_ENV} points at {}, which has no {engine} bundle",
            base.display()
        )));
    }

    if let Some(dir) = exe_adjacent_support(engine) {
        return Ok(dir);
    }

    materialize(engine, files)
}

fn exe_adjacent_support(engine: &str) -> Option<PathBuf> {
    let exe = std::env::current_exe().ok()?;
    let dir = exe.parent()?.join("support").join(engine);
    dir.is_dir().then_some(dir)
}

/// Write the embedded support files under the system temp directory and
/// return the bundle path. The location is stable per crate version, so a
/// re-run reuses it; contents are rewritten unconditionally so stale copies
/// from an older run never win.
fn materialize(engine: &str, files: &[(&str, &str)]) -> Result<PathBuf> {
    if files.is_empty() {
        return Err(RestampError::EngineInit(format!(
            "engine {engine} ships no support assets"
        )));
    }

    let dir = std::env::temp_dir().join(format!(
        "restamp-support-{}-{engine}",
        env!("CARGO_PKG_VERSION")
    ));

    for (rel, contents) in files {
        let target = dir.join(rel);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        // Write-then-rename: concurrent build units share this directory
        // and must never observe a half-written asset.
        let seq = MATERIALIZE_SEQ.fetch_add(1, Ordering::Relaxed);
        let tmp = dir.join(format!(".restamp-{}-{seq}.tmp", std::process::id()));
        fs::write(&tmp, contents)?;
        fs::rename(&tmp, &target)?;
    }

    tracing::debug!(
        "materialized {} support asset(s) for {engine} at {}",
        files.len(),
        dir.display()
    );
    Ok(dir)
}
