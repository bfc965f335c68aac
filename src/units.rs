//! CSS value normalization.
//!
//! Panel inputs arrive as free-form strings: `"16"`, `"1.5rem"`, `"auto"`,
//! `"-4"`. [`normalize`] turns them into valid CSS value strings and never
//! fails — malformed input degrades to an empty string or passes through
//! untouched so the editor stays usable mid-edit.

/// Unit suffixes accepted as already-valid CSS lengths.
const CSS_UNITS: &[&str] = &[
    "px", "rem", "em", "%", "vh", "vw", "vmin", "vmax", "ch", "ex",
];

/// Keywords accepted by default for length-like fields.
pub const DEFAULT_KEYWORDS: &[&str] = &["auto", "inherit", "initial", "unset"];

/// Keywords accepted for sizing fields (width/height).
pub const SIZE_KEYWORDS: &[&str] = &["auto", "fit-content", "max-content", "min-content"];

/// Normalize a raw input value into a CSS value string.
///
/// - empty input → empty string (field is "unset")
/// - an allowed keyword → returned verbatim, lower-cased
/// - a value already carrying a recognized unit → returned verbatim
/// - a bare number (optionally negative/decimal) → number + `default_unit`
/// - no numeric token at all → input passed through unchanged
/// - a numeric token that fails to parse → empty string
pub fn normalize(raw: &str, default_unit: &str, allowed_keywords: &[&str]) -> String {
    let s = raw.trim().to_lowercase();
    if s.is_empty() {
        return String::new();
    }

    if allowed_keywords.iter().any(|k| *k == s) {
        return s;
    }

    if CSS_UNITS.iter().any(|u| s.ends_with(u)) {
        return s;
    }

    let Some(token) = leading_number(&s) else {
        // No numeric token at all: pass the input through unchanged.
        return s;
    };

    match token.parse::<f64>() {
        Ok(n) => format!("{n}{default_unit}"),
        Err(_) => String::new(),
    }
}

/// [`normalize`] with `px` and the default keyword set.
pub fn normalize_px(raw: &str) -> String {
    normalize(raw, "px", DEFAULT_KEYWORDS)
}

/// Extract the leading numeric token: optional `-`, digits, at most one `.`.
/// Stops at the second dot so `"1.2.3"` yields `"1.2"`.
fn leading_number(s: &str) -> Option<&str> {
    let bytes = s.as_bytes();
    let mut end = 0;
    if bytes.first() == Some(&b'-') {
        end = 1;
    }
    let start = end;
    let mut seen_dot = false;
    while end < bytes.len() {
        match bytes[end] {
            b'0'..=b'9' => end += 1,
            b'.' if !seen_dot => {
                seen_dot = true;
                end += 1;
            }
            _ => break,
        }
    }
    if end == start {
        return None;
    }
    Some(&s[..end])
}
