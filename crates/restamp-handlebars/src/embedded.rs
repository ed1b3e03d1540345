//! Compile-time embedded support library for the Handlebars engine.
//!
//! Each entry pairs a bundle-relative path with file contents loaded from
//! `support/handlebars/` at the workspace root via [`include_str!`]. The
//! asset resolver materializes these when the binary runs without an
//! unpacked support tree.
//!
//! ## Adding a support partial
//!
//! 1. Place the `.hbs` file under `support/handlebars/`
//! 2. Add its entry here with the matching relative path
//! 3. Partials register under their file stem: `form/textbox.hbs` is used
//!    as `{{> textbox name="..."}}`

/// Bundle-relative path and contents of every shipped support file.
pub const FILES: &[(&str, &str)] = &[
    ("view.hbs", include_str!("../../../support/handlebars/view.hbs")),
    (
        "form/advanced.hbs",
        include_str!("../../../support/handlebars/form/advanced.hbs"),
    ),
    (
        "form/checkbox.hbs",
        include_str!("../../../support/handlebars/form/checkbox.hbs"),
    ),
    (
        "form/entry.hbs",
        include_str!("../../../support/handlebars/form/entry.hbs"),
    ),
    (
        "form/section.hbs",
        include_str!("../../../support/handlebars/form/section.hbs"),
    ),
    (
        "form/submit.hbs",
        include_str!("../../../support/handlebars/form/submit.hbs"),
    ),
    (
        "form/textarea.hbs",
        include_str!("../../../support/handlebars/form/textarea.hbs"),
    ),
    (
        "form/textbox.hbs",
        include_str!("../../../support/handlebars/form/textbox.hbs"),
    ),
    (
        "form/validate_button.hbs",
        include_str!("../../../support/handlebars/form/validate_button.hbs"),
    ),
];
