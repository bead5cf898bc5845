use colorkey::{CanonicalColorKey, ColorError, ColorResolver};
use indexmap::IndexMap;
use serde::Serialize;
use tracing::{debug, warn};

use crate::config::DedupConfig;
use crate::token::RawColorToken;

/// Raw tokens that resolve to the same canonical color, plus the generated
/// property that replaces them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColorGroup {
    /// Position in first-seen order; 0-based and gapless.
    pub index: usize,
    pub key: CanonicalColorKey,
    /// Distinct raw tokens in extraction order.
    pub tokens: Vec<RawColorToken>,
    /// Generated custom property name, e.g. `--color-0`.
    pub var_name: String,
}

impl ColorGroup {
    /// `var(--color-<index>)`, the value written over matching declarations.
    pub fn reference(&self) -> String {
        format!("var({})", self.var_name)
    }

    /// `--color-<index>: <key>;`
    pub fn declaration_line(&self) -> String {
        format!("{}: {};", self.var_name, self.key)
    }

    /// Comma-separated raw tokens, without comment delimiters.
    pub fn provenance(&self) -> String {
        self.tokens
            .iter()
            .map(RawColorToken::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// `/* <token>, <token> */`
    pub fn provenance_comment(&self) -> String {
        format!("/* {} */", self.provenance())
    }
}

/// Output of the group builder.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grouping {
    /// Groups in index order.
    pub groups: Vec<ColorGroup>,
    /// Tokens that failed to resolve, in extraction order. None of them is a
    /// member of any group.
    pub rejected: Vec<ColorError>,
}

impl Grouping {
    /// Group that owns `token`, if any.
    pub fn group_of(&self, token: &str) -> Option<&ColorGroup> {
        self.groups
            .iter()
            .find(|group| group.tokens.iter().any(|t| t.as_str() == token))
    }
}

/// Resolve every token and bucket it by canonical key.
///
/// Group indices follow the order in which keys are first produced while
/// iterating `tokens` in order. A token that fails to resolve is logged,
/// recorded in [`Grouping::rejected`] and otherwise skipped.
pub fn build_groups<'a, I, R>(tokens: I, resolver: &R, cfg: &DedupConfig) -> Grouping
where
    I: IntoIterator<Item = &'a RawColorToken>,
    R: ColorResolver + ?Sized,
{
    let mut buckets: IndexMap<CanonicalColorKey, Vec<RawColorToken>> = IndexMap::new();
    let mut rejected = Vec::new();

    for token in tokens {
        match resolver.resolve(token.as_str()) {
            Ok(key) => {
                let bucket = buckets.entry(key).or_default();
                if !bucket.contains(token) {
                    bucket.push(token.clone());
                }
            }
            Err(err) => {
                warn!(token = %token, error = %err, "color_rejected");
                rejected.push(err);
            }
        }
    }

    let groups: Vec<ColorGroup> = buckets
        .into_iter()
        .enumerate()
        .map(|(index, (key, tokens))| ColorGroup {
            index,
            var_name: cfg.var_name(index),
            key,
            tokens,
        })
        .collect();

    for group in &groups {
        debug!(
            var = %group.var_name,
            key = %group.key,
            tokens = %group.provenance(),
            "color_group_created"
        );
    }

    Grouping { groups, rejected }
}
