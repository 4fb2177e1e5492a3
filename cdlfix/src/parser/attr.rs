//! Positional attribute extraction.
//!
//! Finds the first `key=<numeral+unit>` occurrence on a line. This is a plain
//! substring scan, not a token parse: asking for `w` will match inside `fw=`
//! when that comes first, which is the legacy-compatible behavior the
//! downstream tool expects.

/// Extract the value of `key=` where the numeral must carry a unit suffix of
/// one or more letters (`w=2u`, not `w=2`).
pub fn find_attr<'a>(line: &'a str, key: &str) -> Option<&'a str> {
    find(line, key, true)
}

/// Extract the value of `key=` where the unit suffix is optional; used for
/// `fingers`, which is legal as a bare integer.
pub fn find_attr_bare<'a>(line: &'a str, key: &str) -> Option<&'a str> {
    find(line, key, false)
}

fn find<'a>(line: &'a str, key: &str, unit_required: bool) -> Option<&'a str> {
    let needle = format!("{}=", key);
    let mut from = 0;
    while let Some(pos) = line[from..].find(&needle) {
        let start = from + pos + needle.len();
        if let Some(len) = match_value(&line[start..], unit_required) {
            return Some(&line[start..start + len]);
        }
        from = from + pos + needle.len();
    }
    None
}

/// Match one-or-more digits, an optional decimal point with more digits, then
/// the unit letters. Returns the matched length.
fn match_value(s: &str, unit_required: bool) -> Option<usize> {
    let bytes = s.as_bytes();
    let mut i = 0;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    if i == 0 {
        return None;
    }
    if i < bytes.len() && bytes[i] == b'.' {
        i += 1;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
    }
    let unit_start = i;
    while i < bytes.len() && bytes[i].is_ascii_alphabetic() {
        i += 1;
    }
    if unit_required && i == unit_start {
        return None;
    }
    Some(i)
}
