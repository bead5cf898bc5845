//! Color canonicalization for colorvars.
//!
//! Turns a raw color token as written in a stylesheet into a
//! [`CanonicalColorKey`]: a lowercase six-digit sRGB hex string. Two tokens
//! are the same color exactly when their keys are equal; there is no
//! distance threshold.
//!
//! Supported syntaxes are `#rgb`, `#rrggbb` (any case) and opaque `rgb()`.
//! Hex digits go through `palette`; `rgb()` goes through `cssparser`'s color
//! grammar, which clamps channels, so `rgb(300, 0, 0)` is `#ff0000`.
//! Everything else is a [`ColorError`], which callers are expected to report
//! per token and skip.
//!
//! ```
//! use colorkey::{canonicalize, ColorResolver, SrgbResolver};
//!
//! let a = canonicalize("#F00").unwrap();
//! let b = SrgbResolver.resolve("rgb(255, 0, 0)").unwrap();
//! assert_eq!(a, b);
//! assert_eq!(a.as_str(), "#ff0000");
//! ```

mod error;
mod key;
mod resolver;

pub use crate::error::ColorError;
pub use crate::key::CanonicalColorKey;
pub use crate::resolver::{canonicalize, ColorResolver, SrgbResolver};
