//! Mandatory declaration-section insertion.
//!
//! The downstream layout tool expects each declaration section to exist even
//! when empty. Missing defaults are prepended at the front of the store, in
//! forward pair order, so the inserted block ends up in reverse pair order —
//! a deliberate, user-visible contract of the output format.

use crate::store::LineStore;

/// Marker prefix and the default line inserted when no line starts with it.
/// Every marker matches its own default, which makes the pass idempotent.
/// The bipolar marker is the shared `*.BIPOLA` stem so that it also matches
/// authored `*.BIPOLAR` sections.
const SECTION_DEFAULTS: [(&str, &str); 8] = [
    (".PARAM", ".PARAM"),
    ("*.MEGA", "*.MEGA"),
    ("*.EQUATION", "*.EQUATION"),
    ("*.DIOAREA", "*.DIOAREA"),
    ("*.DIOPERI", "*.DIOPERI"),
    ("*.CAPVAL", "*.CAPVAL"),
    ("*.RESVAL", "*.RESVAL"),
    ("*.BIPOLA", "*.BIPOLA"),
];

/// Prepend a default for every section marker absent from the store.
/// Returns the number of lines inserted.
pub fn insert_missing_sections(store: &mut LineStore) -> usize {
    let mut inserted = 0;
    for (marker, default) in SECTION_DEFAULTS {
        if !store.iter().any(|line| line.starts_with(marker)) {
            tracing::debug!(section = default, "inserting missing declaration section");
            store.prepend(default);
            inserted += 1;
        }
    }
    inserted
}
