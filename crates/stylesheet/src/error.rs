use thiserror::Error;

/// Errors produced while parsing or formatting a stylesheet.
///
/// Positions are 1-based line and column numbers into the source text.
/// Unclosed blocks, strings and comments are not errors: the end of input
/// closes them.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum StylesheetError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("invalid rule at {line}:{column}: {text:?}")]
    InvalidRule {
        line: usize,
        column: usize,
        text: String,
    },
    #[error("invalid declaration at {line}:{column}: {text:?}")]
    InvalidDeclaration {
        line: usize,
        column: usize,
        text: String,
    },
    #[error("string broken by a newline at {line}:{column}")]
    UnterminatedString { line: usize, column: usize },
    #[error("malformed url() at {line}:{column}")]
    InvalidUrl { line: usize, column: usize },
}
