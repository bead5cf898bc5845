use thiserror::Error;

/// Errors that stop a deduplication run.
///
/// Per-token color failures are not here; they are collected in
/// [`Grouping::rejected`](crate::Grouping::rejected) and never abort a run.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DedupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
