//! Token extraction from declaration values.
//!
//! Each declaration value contributes at most one hex token and at most one
//! `rgb()` token: only the first match of each kind is taken. A value like
//! `linear-gradient(#fff, #000)` therefore yields `#fff` alone. This is the
//! documented behavior, not an oversight; extraction never rewrites anything.

use std::sync::LazyLock;

use indexmap::IndexSet;
use regex::Regex;
use stylesheet::Stylesheet;

use crate::token::RawColorToken;

/// `#` plus three or six hex digits, ending on an ASCII word boundary.
static HEX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"#(?:[0-9a-fA-F]{3}){1,2}(?-u:\b)").expect("hex color pattern compiles")
});

/// `rgb(` + three integers separated by commas, whitespace tolerated.
static RGB_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"rgb\(\s*([0-9]+)\s*,\s*([0-9]+)\s*,\s*([0-9]+)\s*\)")
        .expect("rgb color pattern compiles")
});

/// Distinct color tokens in first-seen order.
pub type TokenSet = IndexSet<RawColorToken>;

/// Collect every distinct color token referenced by a declaration value,
/// in document order.
pub fn extract_tokens(sheet: &Stylesheet) -> TokenSet {
    let mut tokens = TokenSet::new();
    sheet.walk_decls(|decl| {
        let (hex, rgb) = extract_from_value(&decl.value);
        tokens.extend(hex);
        tokens.extend(rgb);
    });
    tokens
}

/// First hex token and first `rgb()` token of a single value.
///
/// The `rgb()` token is rebuilt as `rgb(r, g, b)` from the captured integers,
/// so internal spacing is normalized. Channel ranges are not checked here.
pub fn extract_from_value(value: &str) -> (Option<RawColorToken>, Option<RawColorToken>) {
    let hex = HEX_RE
        .find(value)
        .map(|m| RawColorToken::new(m.as_str()));
    let rgb = RGB_RE
        .captures(value)
        .map(|caps| RawColorToken::new(format!("rgb({}, {}, {})", &caps[1], &caps[2], &caps[3])));
    (hex, rgb)
}
