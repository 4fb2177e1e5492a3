//! Geometric parameter derivation.
//!
//! Two independent, per-line derivations:
//! 1. `w` and `l` present → append the effective finger width
//!    `fw = w / fingers` (fingers defaults to 1).
//! 2. `area` and `pj` present → recover `w` and `l` for a rectangle with the
//!    given area and half-perimeter `pj/2`, and append both.
//!
//! Lines where no consistent derivation exists are left byte-for-byte
//! unmodified; that is a legitimate outcome, not an error.

use crate::parser::attr;
use crate::si;
use crate::store::LineStore;

#[derive(Debug, Clone, Copy, Default)]
pub struct GeometryCounts {
    /// Lines that gained an ` fw=` attribute.
    pub fw_derived: usize,
    /// Lines that gained a ` w= l=` pair.
    pub wl_derived: usize,
}

/// Run both derivations over every line. A line can gain both attribute
/// groups when it carries `w`/`l` as well as `area`/`pj`.
pub fn derive_geometry(store: &mut LineStore) -> GeometryCounts {
    let mut counts = GeometryCounts::default();

    for idx in 0..store.len() {
        let mut line = store.line(idx).to_string();
        let mut changed = false;

        let w = attr::find_attr(&line, "w").map(si::parse);
        let l = attr::find_attr(&line, "l").map(si::parse);
        if let (Some(w), Some(_l)) = (w, l) {
            let fw = match attr::find_attr_bare(&line, "fingers").map(si::parse) {
                Some(fingers) => w / fingers,
                None => w,
            };
            line.push_str(&format!(" fw={}", si::format(fw)));
            tracing::debug!(line = idx, fw, "derived effective finger width");
            counts.fw_derived += 1;
            changed = true;
        }

        // area/pj are looked up after the fw append, matching the legacy
        // pass order.
        let area = attr::find_attr(&line, "area").map(si::parse);
        let pj = attr::find_attr(&line, "pj").map(si::parse);
        if let (Some(area), Some(pj)) = (area, pj) {
            if let Some((w, l)) = solve_rectangle(area, pj) {
                line.push_str(&format!(" w={} l={}", si::format(w), si::format(l)));
                tracing::debug!(line = idx, w, l, "recovered w/l from area/pj");
                counts.wl_derived += 1;
                changed = true;
            }
        }

        if changed {
            store.replace(idx, line);
        }
    }

    counts
}

/// Solve `w * l = area`, `w + l = pj/2` and return `(w, l)` with `l` the
/// larger dimension by convention. Returns `None` when the discriminant is
/// negative or no candidate length is positive.
fn solve_rectangle(area: f64, pj: f64) -> Option<(f64, f64)> {
    let half = pj / 2.0;
    let disc = half * half - 4.0 * area;
    if disc < 0.0 {
        return None;
    }
    let root = disc.sqrt();
    let l1 = (half + root) / 2.0;
    let l2 = (half - root) / 2.0;
    if l1 <= 0.0 && l2 <= 0.0 {
        return None;
    }
    // A zero-length candidate would divide by zero; fall through to the
    // other root instead.
    let candidate = |l: f64| (l > 0.0).then(|| (area / l, l));
    candidate(l1)
        .filter(|&(w, l)| l >= w)
        .or_else(|| candidate(l2))
        .or_else(|| candidate(l1))
}
