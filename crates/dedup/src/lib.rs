//! Color deduplication core for colorvars.
//!
//! Given a parsed stylesheet, this crate finds the literal colors it uses,
//! groups the ones that are the same color, and rewrites declarations to
//! reference generated custom properties instead.
//!
//! ## Stages
//!
//! 1. [`extract_tokens`] collects distinct raw tokens (first hex and first
//!    `rgb()` match per declaration value) in first-seen order.
//! 2. [`build_groups`] resolves each token through a
//!    [`ColorResolver`](colorkey::ColorResolver) and buckets tokens by
//!    canonical key. Tokens that fail to resolve are reported and skipped.
//! 3. [`substitute`] rewrites declarations whose whole value is a grouped
//!    token into `var(--color-<n>)`.
//! 4. [`assemble`] prints a root-scope block of generated declarations
//!    followed by the rewritten document.
//!
//! ## Invariants worth knowing
//!
//! - Group indices are assigned in first-seen order, 0-based, without gaps.
//!   Ordering comes from `indexmap`, never from hash iteration.
//! - A raw token belongs to exactly one group.
//! - Only exact, full-value matches are substituted.
//!
//! ```
//! use colorkey::SrgbResolver;
//! use dedup::{assemble, deduplicate, DedupConfig};
//! use stylesheet::{parse, FormatConfig};
//!
//! let mut sheet = parse("a { color: #F00; } b { color: rgb(255, 0, 0); }").unwrap();
//! let cfg = DedupConfig::default();
//! let report = deduplicate(&mut sheet, &SrgbResolver, &cfg).unwrap();
//! assert_eq!(report.grouping.groups.len(), 1);
//! assert_eq!(report.substituted, 2);
//!
//! let css = assemble(&report.grouping.groups, &sheet, &cfg, &FormatConfig::default());
//! assert!(css.starts_with(":root {\n  /* #F00, rgb(255, 0, 0) */\n  --color-0: #ff0000;\n}"));
//! ```

use std::time::Instant;

use colorkey::ColorResolver;
use stylesheet::Stylesheet;
use tracing::{info, Level};

mod assemble;
mod config;
mod error;
mod extract;
mod group;
mod substitute;
mod token;

pub use crate::assemble::{assemble, root_rule};
pub use crate::config::DedupConfig;
pub use crate::error::DedupError;
pub use crate::extract::{extract_from_value, extract_tokens, TokenSet};
pub use crate::group::{build_groups, ColorGroup, Grouping};
pub use crate::substitute::substitute;
pub use crate::token::RawColorToken;

/// Summary of one in-place deduplication pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DedupReport {
    /// Distinct raw tokens found by extraction.
    pub tokens: TokenSet,
    pub grouping: Grouping,
    /// Declarations rewritten to a `var()` reference.
    pub substituted: usize,
}

/// Extract, group and substitute in one call. `sheet` is rewritten in place;
/// print it with [`assemble`] afterwards.
pub fn deduplicate<R>(
    sheet: &mut Stylesheet,
    resolver: &R,
    cfg: &DedupConfig,
) -> Result<DedupReport, DedupError>
where
    R: ColorResolver + ?Sized,
{
    cfg.validate()?;
    let start = Instant::now();
    let span = tracing::span!(Level::INFO, "dedup.deduplicate", prefix = %cfg.var_prefix);
    let _guard = span.enter();

    let tokens = extract_tokens(sheet);
    info!(tokens = tokens.len(), "extract_complete");

    let grouping = build_groups(&tokens, resolver, cfg);
    let substituted = substitute(sheet, &grouping.groups);
    info!(substituted, "substitution_complete");

    info!(
        tokens = tokens.len(),
        groups = grouping.groups.len(),
        rejected = grouping.rejected.len(),
        substituted,
        elapsed_micros = start.elapsed().as_micros(),
        "dedup_complete"
    );

    Ok(DedupReport {
        tokens,
        grouping,
        substituted,
    })
}
