//! Attribute-key case normalization.
//!
//! Legacy CDL emitters write attribute keys upper-case (` W=`); the layout
//! tool wants them lower-case. This is a pure literal substitution over a
//! fixed token set, all occurrences per line. No word boundaries: a token
//! embedded in unrelated text will also be rewritten, an accepted limitation
//! of the legacy format this targets.

use crate::store::LineStore;

const CASE_TOKENS: [(&str, &str); 9] = [
    (" W=", " w="),
    (" L=", " l="),
    (" AREA=", " area="),
    (" PJ=", " pj="),
    (" M=", " m="),
    (" FW=", " fw="),
    (" C=", " c="),
    (" R=", " r="),
    (" FINGERS=", " fingers="),
];

/// Lower-case every known attribute-key token. Returns the number of lines
/// changed.
pub fn normalize_case(store: &mut LineStore) -> usize {
    let mut changed = 0;
    for idx in 0..store.len() {
        let line = store.line(idx);
        if !CASE_TOKENS.iter().any(|(upper, _)| line.contains(upper)) {
            continue;
        }
        let rewritten = CASE_TOKENS
            .iter()
            .fold(line.to_string(), |acc, (upper, lower)| {
                acc.replace(upper, lower)
            });
        store.replace(idx, rewritten);
        changed += 1;
    }
    changed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowers_all_tokens_on_a_line() {
        let mut store = LineStore::from_text("M1 d g s b nch W=2u L=180n M=2 FINGERS=4\n");
        assert_eq!(normalize_case(&mut store), 1);
        assert_eq!(store.line(0), "M1 d g s b nch w=2u l=180n m=2 fingers=4");
    }

    #[test]
    fn untouched_line_stays_identical() {
        let text = "X1 a b sub w=2u l=1u\n";
        let mut store = LineStore::from_text(text);
        assert_eq!(normalize_case(&mut store), 0);
        assert_eq!(store.to_text(), text);
    }

    #[test]
    fn applied_twice_is_idempotent() {
        let mut store = LineStore::from_text("C1 a b C=1p AREA=4p PJ=8u\n");
        normalize_case(&mut store);
        let once = store.to_text();
        assert_eq!(normalize_case(&mut store), 0);
        assert_eq!(store.to_text(), once);
    }

    #[test]
    fn leading_token_without_space_is_left_alone() {
        let mut store = LineStore::from_text("W=2u reference\n");
        assert_eq!(normalize_case(&mut store), 0);
        assert_eq!(store.line(0), "W=2u reference");
    }
}
