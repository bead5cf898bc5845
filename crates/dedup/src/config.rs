use serde::{Deserialize, Serialize};

use crate::error::DedupError;

/// Naming and layout of the generated custom properties.
///
/// With the defaults, group `n` becomes `--color-n` declared inside `:root`,
/// each preceded by a comment listing the literals it replaced.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DedupConfig {
    /// Name stem of generated properties, without the leading `--`.
    pub var_prefix: String,
    /// Selector of the block hosting the generated declarations.
    pub root_selector: String,
    /// Emit a `/* token, token */` comment above every generated declaration.
    pub emit_provenance: bool,
}

impl Default for DedupConfig {
    fn default() -> Self {
        Self {
            var_prefix: "color".to_string(),
            root_selector: ":root".to_string(),
            emit_provenance: true,
        }
    }
}

impl DedupConfig {
    pub fn validate(&self) -> Result<(), DedupError> {
        if self.var_prefix.is_empty() {
            return Err(DedupError::InvalidConfig(
                "var_prefix must not be empty".into(),
            ));
        }
        if self.var_prefix.starts_with('-') {
            return Err(DedupError::InvalidConfig(format!(
                "var_prefix {:?} must not start with '-'; '--' is added automatically",
                self.var_prefix
            )));
        }
        if !self
            .var_prefix
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(DedupError::InvalidConfig(format!(
                "var_prefix {:?} may only contain ASCII letters, digits, '-' and '_'",
                self.var_prefix
            )));
        }
        if self.root_selector.trim().is_empty() {
            return Err(DedupError::InvalidConfig(
                "root_selector must not be empty".into(),
            ));
        }
        Ok(())
    }

    /// Generated property name for the group at `index`.
    pub fn var_name(&self, index: usize) -> String {
        format!("--{}-{}", self.var_prefix, index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_names_match_color_index() {
        let cfg = DedupConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.var_name(0), "--color-0");
        assert_eq!(cfg.var_name(12), "--color-12");
    }

    #[test]
    fn bad_prefixes_rejected() {
        for prefix in ["", "--color", "brand color", "c{lr"] {
            let cfg = DedupConfig {
                var_prefix: prefix.into(),
                ..Default::default()
            };
            assert!(
                matches!(cfg.validate(), Err(DedupError::InvalidConfig(_))),
                "prefix {prefix:?} should be rejected"
            );
        }
    }

    #[test]
    fn blank_root_selector_rejected() {
        let cfg = DedupConfig {
            root_selector: "  ".into(),
            ..Default::default()
        };
        assert!(cfg.validate().is_err());
    }
}
