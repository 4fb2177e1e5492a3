//! SI metric-prefix numeric codec.
//!
//! CDL attribute values carry metric prefixes (`2.5u`, `10k`). This module
//! converts between those strings and `f64`, using the full prefix table from
//! yocto (1e-24) to yotta (1e24), including the centi/deci/deca/hecto entries
//! the format allows even though device attributes rarely use them.

/// Prefix table in descending divisor order. `format` scans this top-down;
/// `parse` does an exact suffix lookup. There is deliberately no 1e0 entry.
const UNITS: [(&str, f64); 20] = [
    ("Y", 1e24),
    ("Z", 1e21),
    ("E", 1e18),
    ("P", 1e15),
    ("T", 1e12),
    ("G", 1e9),
    ("M", 1e6),
    ("k", 1e3),
    ("h", 1e2),
    ("da", 1e1),
    ("d", 1e-1),
    ("c", 1e-2),
    ("m", 1e-3),
    ("u", 1e-6),
    ("n", 1e-9),
    ("p", 1e-12),
    ("f", 1e-15),
    ("a", 1e-18),
    ("z", 1e-21),
    ("y", 1e-24),
];

/// Parse a leading floating-point literal with an optional metric suffix.
///
/// Returns `f64::NAN` when no leading numeral is present; callers must check
/// with `is_nan` before using the value. A suffix that is not in the prefix
/// table leaves the literal unscaled (stray unit text is ignored, not
/// rejected).
pub fn parse(text: &str) -> f64 {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let mut i = 0;

    if i < bytes.len() && (bytes[i] == b'+' || bytes[i] == b'-') {
        i += 1;
    }
    let mut digits = 0;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
        digits += 1;
    }
    if i < bytes.len() && bytes[i] == b'.' {
        i += 1;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
            digits += 1;
        }
    }
    if digits == 0 {
        return f64::NAN;
    }
    // Optional exponent; only consumed when at least one digit follows.
    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        let mut j = i + 1;
        if j < bytes.len() && (bytes[j] == b'+' || bytes[j] == b'-') {
            j += 1;
        }
        let exp_digits = j;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_digits {
            i = j;
        }
    }

    let value: f64 = match s[..i].parse() {
        Ok(v) => v,
        Err(_) => return f64::NAN,
    };

    let unit = s[i..].split_whitespace().next().unwrap_or("");
    for (suffix, multiplier) in UNITS {
        if unit == suffix {
            return value * multiplier;
        }
    }
    value
}

/// Format a value with the largest prefix whose divisor does not exceed its
/// magnitude, preferring the larger prefix on power-of-ten ties. Values below
/// the smallest divisor (including zero) are rendered plain.
pub fn format(value: f64) -> String {
    for (suffix, divisor) in UNITS {
        if value.abs() >= divisor {
            return format!("{}{}", format_g(value / divisor), suffix);
        }
    }
    format_g(value)
}

/// C `printf` `%g`-style rendering: 6 significant digits, trailing zeros
/// stripped, scientific notation outside [1e-4, 1e6).
fn format_g(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if !value.is_finite() {
        return value.to_string();
    }
    // {:.5e} rounds to 6 significant digits and carries into the exponent
    // when rounding crosses a decade.
    let sci = format!("{:.5e}", value);
    let (mantissa, exp_str) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let exp: i32 = exp_str.parse().unwrap_or(0);
    if (-4..6).contains(&exp) {
        let precision = (5 - exp).max(0) as usize;
        trim_trailing_zeros(format!("{:.*}", precision, value))
    } else {
        let mantissa = trim_trailing_zeros(mantissa.to_string());
        format!(
            "{}e{}{:02}",
            mantissa,
            if exp < 0 { '-' } else { '+' },
            exp.abs()
        )
    }
}

fn trim_trailing_zeros(mut s: String) -> String {
    if s.contains('.') {
        while s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
    }
    s
}
