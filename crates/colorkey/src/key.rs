use std::fmt;

use palette::Srgb;
use serde::Serialize;

/// Canonical identity of a color: `#rrggbb`, lowercase, always six digits.
///
/// Two tokens with equal keys are the same color. Keys can only be built from
/// an 8-bit sRGB value, so the format invariant holds by construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct CanonicalColorKey(String);

impl CanonicalColorKey {
    pub fn from_srgb(color: Srgb<u8>) -> Self {
        Self(format!(
            "#{:02x}{:02x}{:02x}",
            color.red, color.green, color.blue
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for CanonicalColorKey {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for CanonicalColorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
