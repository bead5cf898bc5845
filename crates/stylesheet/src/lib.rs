//! Stylesheet layer for colorvars.
//!
//! This crate turns stylesheet text into a small mutable tree and back. The
//! color deduplication core only ever sees the tree through declaration walks,
//! so everything about tokenizing, formatting and printing lives here.
//! Tokenizing and rule/declaration splitting come from `cssparser`.
//!
//! ## What we do
//!
//! - Parse rules, at-rules (block and statement), declarations and comments
//! - Split `!important` off declaration values so values compare cleanly
//! - Move comments out of values; only comments between items are kept
//! - Normalize whitespace and comma spacing inside values and selectors
//! - Serialize the tree with a deterministic layout driven by [`FormatConfig`]
//!
//! ## What we don't do
//!
//! - Validate property names or values
//! - Resolve `@import` or CSS nesting (a rule inside a style rule is an error)
//! - Keep original whitespace or quote style; output is always re-printed
//!
//! ## Pure function guarantee
//!
//! No I/O, no global state. The same text and the same config always produce
//! the same tree and the same output bytes.
//!
//! ```
//! use stylesheet::{format, FormatConfig};
//!
//! let cfg = FormatConfig::default();
//! let out = format("a{color:rgb( 255 ,0,0 )}", &cfg).unwrap();
//! assert_eq!(out, "a {\n  color: rgb(255, 0, 0);\n}\n");
//! ```

mod config;
mod error;
mod format;
mod node;
mod parser;
mod serialize;
mod value;

pub use crate::config::FormatConfig;
pub use crate::error::StylesheetError;
pub use crate::format::format;
pub use crate::node::{Declaration, Node, Stylesheet};
pub use crate::parser::{parse, parse_with};
pub use crate::value::normalize_value;
