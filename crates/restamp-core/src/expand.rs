//! The bundled rendering entry point.
//!
//! Walks a resource root, renders every file carrying the engine's template
//! suffix, and writes the output next to the source with the suffix
//! stripped: `views/config.xml.hbs` becomes `views/config.xml`. Engine
//! crates call into this from their `invoke` implementation, supplying
//! their own renderer closure.

use std::fs;
use std::path::Path;

use walkdir::WalkDir;

use crate::enumerate::AUX_BUNDLE_DIR;
use crate::error::Result;

/// Render every `*.<suffix>` file under `root` in place.
///
/// The walk is depth-first in sorted order, so repeated runs touch files in
/// the same sequence. Directories named [`AUX_BUNDLE_DIR`] are skipped:
/// their contents are helper libraries loaded by other templates, not
/// outputs. A nonexistent root renders nothing.
///
/// `render` receives the template's path (for error reporting) and its
/// source text, and returns the rendered output. Existing output files are
/// overwritten; unchanged sources and bindings therefore produce
/// byte-identical output on every run.
pub fn expand_root(
    root: &Path,
    suffix: &str,
    render: &mut dyn FnMut(&Path, &str) -> Result<String>,
) -> Result<usize> {
    if !root.is_dir() {
        tracing::warn!(
            "resource root {} does not exist, nothing to render",
            root.display()
        );
        return Ok(0);
    }

    let dotted = format!(".{suffix}");
    let mut rendered = 0usize;

    // depth > 0: a root that is itself named like the bundle still renders.
    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| {
            !(e.depth() > 0 && e.file_type().is_dir() && e.file_name() == AUX_BUNDLE_DIR)
        });

    for entry in walker {
        let entry = entry.map_err(std::io::Error::from)?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        // A file named exactly `.hbs` has no output name to strip to.
        if !name.ends_with(&dotted) || name.len() == dotted.len() {
            continue;
        }

        let source = fs::read_to_string(path)?;
        let output = render(path, &source)?;

        let target = path.with_file_name(&name[..name.len() - dotted.len()]);
        fs::write(&target, output)?;
        tracing::debug!("rendered {} -> {}", path.display(), target.display());
        rendered += 1;
    }

    Ok(rendered)
}
