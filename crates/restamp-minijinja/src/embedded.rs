//! Compile-time embedded support library for the MiniJinja engine.
//!
//! Each entry pairs a bundle-relative path with file contents loaded from
//! `support/minijinja/` at the workspace root via [`include_str!`]. The
//! asset resolver materializes these when the binary runs without an
//! unpacked support tree.

/// Bundle-relative path and contents of every shipped support file.
pub const FILES: &[(&str, &str)] = &[
    ("form.j2", include_str!("../../../support/minijinja/form.j2")),
    ("view.j2", include_str!("../../../support/minijinja/view.j2")),
];
