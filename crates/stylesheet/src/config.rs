//! Configuration for the stylesheet formatter.
//!
//! [`FormatConfig`] replaces a long-lived formatter instance: build one per
//! run, validate it, and pass it to whatever needs to print a tree.
//!
//! # Versioning
//!
//! Any change that alters formatted output must bump `version`. Version 0 is
//! reserved and rejected.
//!
//! ```rust
//! use stylesheet::FormatConfig;
//!
//! let config = FormatConfig::default();
//! assert_eq!(config.version, 1);
//! assert_eq!(config.indent, "  ");
//! assert!(config.normalize_commas);
//! assert!(!config.strip_comments);
//! assert!(!config.sort_declarations);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::StylesheetError;

/// Controls how a parsed stylesheet is normalized and printed.
///
/// Cheap to clone and serializable, so it can be embedded in a YAML run
/// configuration:
///
/// ```yaml
/// version: 1
/// indent: "  "
/// normalize_commas: true
/// blank_line_between_rules: true
/// strip_comments: false
/// sort_declarations: false
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FormatConfig {
    /// Formatter behavior version. Must be >= 1.
    pub version: u32,
    /// Indentation unit for one nesting level. Spaces or tabs only.
    pub indent: String,
    /// Rewrite comma and parenthesis spacing in values and selectors, so
    /// `rgb( 1 ,2,3 )` prints as `rgb(1, 2, 3)`.
    pub normalize_commas: bool,
    /// Emit an empty line between sibling blocks.
    pub blank_line_between_rules: bool,
    /// Drop comment nodes from the output. Comments inside values and
    /// selectors never survive parsing.
    pub strip_comments: bool,
    /// Sort adjacent declarations by property name. Off by default; comments
    /// and nested blocks keep their position.
    pub sort_declarations: bool,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            version: 1,
            indent: "  ".to_string(),
            normalize_commas: true,
            blank_line_between_rules: true,
            strip_comments: false,
            sort_declarations: false,
        }
    }
}

impl FormatConfig {
    /// Check invariants that the printer relies on.
    pub fn validate(&self) -> Result<(), StylesheetError> {
        if self.version == 0 {
            return Err(StylesheetError::InvalidConfig(
                "format version must be >= 1".into(),
            ));
        }
        if !self.indent.chars().all(|c| c == ' ' || c == '\t') {
            return Err(StylesheetError::InvalidConfig(format!(
                "indent must contain only spaces or tabs, got {:?}",
                self.indent
            )));
        }
        Ok(())
    }
}
