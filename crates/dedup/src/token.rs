use std::borrow::Borrow;
use std::fmt;

use serde::Serialize;

/// A color exactly as written in the stylesheet.
///
/// Identity is the literal string: `#FFF` and `#fff` are different tokens
/// even though they are the same color.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct RawColorToken(String);

impl RawColorToken {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for RawColorToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for RawColorToken {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RawColorToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
