//! Workspace umbrella crate for colorvars.
//!
//! This crate stitches the stylesheet formatter, the color resolver and the
//! deduplication core into one pipeline, and owns the file edges: reading the
//! source stylesheet and writing the result without ever overwriting an
//! existing file.
//!
//! ```
//! use colorvars::{process_stylesheet, ColorVarsConfig};
//!
//! let css = "a{color:#FF0000}\nb{background:rgb(255,0,0)}\nc{border-color:#ff0000}";
//! let out = process_stylesheet(css, &ColorVarsConfig::default()).unwrap();
//!
//! assert_eq!(out.grouping.groups.len(), 1);
//! assert_eq!(out.substituted, 3);
//! assert!(out.css.starts_with(":root {\n  /* #FF0000, rgb(255, 0, 0), #ff0000 */\n  --color-0: #ff0000;\n}\n"));
//! ```

pub use colorkey::{canonicalize, CanonicalColorKey, ColorError, ColorResolver, SrgbResolver};
pub use dedup::{
    assemble, build_groups, deduplicate, extract_tokens, substitute, ColorGroup, DedupConfig,
    DedupError, DedupReport, Grouping, RawColorToken,
};
pub use stylesheet::{format, parse, parse_with, FormatConfig, Stylesheet, StylesheetError};

mod config;

pub use crate::config::{ColorVarsConfig, ConfigLoadError};

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use thiserror::Error;
use tracing::{info, warn, Level};

/// File name used when no target path is given.
pub const DEFAULT_OUTPUT_FILE: &str = "output.css";

/// Errors that abort a run.
///
/// Colors that fail to resolve are not errors at this level; they are
/// reported through [`ProcessedStylesheet::grouping`].
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("stylesheet failure: {0}")]
    Stylesheet(#[from] StylesheetError),
    #[error("deduplication failure: {0}")]
    Dedup(#[from] DedupError),
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("output file already exists: {}", .0.display())]
    TargetExists(PathBuf),
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Result of running the in-memory pipeline over one stylesheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessedStylesheet {
    /// Final text: root block followed by the rewritten body.
    pub css: String,
    pub grouping: Grouping,
    /// Distinct raw color tokens found.
    pub token_count: usize,
    /// Declarations rewritten to a `var()` reference.
    pub substituted: usize,
}

/// Format `source` with the run's formatter settings.
pub fn format_source(source: &str, cfg: &ColorVarsConfig) -> Result<String, PipelineError> {
    let start = Instant::now();
    let formatted = stylesheet::format(source, &cfg.format)?;
    info!(
        input_len = source.len(),
        formatted_len = formatted.len(),
        elapsed_micros = start.elapsed().as_micros(),
        "format_complete"
    );
    Ok(formatted)
}

/// Run extraction, grouping, substitution and assembly over already
/// formatted text.
pub fn process_formatted<R>(
    formatted: &str,
    cfg: &ColorVarsConfig,
    resolver: &R,
) -> Result<ProcessedStylesheet, PipelineError>
where
    R: ColorResolver + ?Sized,
{
    let mut sheet = stylesheet::parse_with(formatted, cfg.format.normalize_commas)?;
    let report = deduplicate(&mut sheet, resolver, &cfg.dedup)?;
    let css = assemble(&report.grouping.groups, &sheet, &cfg.dedup, &cfg.format);
    Ok(ProcessedStylesheet {
        css,
        token_count: report.tokens.len(),
        grouping: report.grouping,
        substituted: report.substituted,
    })
}

/// Full in-memory pipeline with the default sRGB resolver.
pub fn process_stylesheet(
    source: &str,
    cfg: &ColorVarsConfig,
) -> Result<ProcessedStylesheet, PipelineError> {
    process_stylesheet_with(source, cfg, &SrgbResolver)
}

/// Full in-memory pipeline with a caller-supplied resolver.
pub fn process_stylesheet_with<R>(
    source: &str,
    cfg: &ColorVarsConfig,
    resolver: &R,
) -> Result<ProcessedStylesheet, PipelineError>
where
    R: ColorResolver + ?Sized,
{
    process_observed(source, cfg, resolver, &mut |_| {})
}

/// Progress points reported by [`run_with`].
#[derive(Debug, Clone, Copy)]
pub enum Stage<'a> {
    /// The source has been read and formatting starts.
    Formatting,
    /// Formatting finished; extraction and grouping start.
    Formatted,
    /// A color token failed to resolve. The run continues.
    ColorRejected(&'a ColorError),
    /// The result was written to this path.
    Written(&'a Path),
}

fn process_observed<R>(
    source: &str,
    cfg: &ColorVarsConfig,
    resolver: &R,
    on_stage: &mut dyn FnMut(Stage<'_>),
) -> Result<ProcessedStylesheet, PipelineError>
where
    R: ColorResolver + ?Sized,
{
    let start = Instant::now();
    let span = tracing::span!(Level::INFO, "colorvars.process", input_len = source.len());
    let _guard = span.enter();

    on_stage(Stage::Formatting);
    let result = format_source(source, cfg).and_then(|formatted| {
        on_stage(Stage::Formatted);
        process_formatted(&formatted, cfg, resolver)
    });
    match &result {
        Ok(out) => {
            for err in &out.grouping.rejected {
                on_stage(Stage::ColorRejected(err));
            }
            info!(
                groups = out.grouping.groups.len(),
                rejected = out.grouping.rejected.len(),
                substituted = out.substituted,
                elapsed_micros = start.elapsed().as_micros(),
                "pipeline_success"
            );
        }
        Err(err) => warn!(
            error = %err,
            elapsed_micros = start.elapsed().as_micros(),
            "pipeline_failure"
        ),
    }
    result
}

/// `output.css` in the directory that holds `source`.
pub fn default_target_path(source: &Path) -> PathBuf {
    match source.parent() {
        Some(dir) => dir.join(DEFAULT_OUTPUT_FILE),
        None => PathBuf::from(DEFAULT_OUTPUT_FILE),
    }
}

/// Read the source stylesheet as UTF-8.
pub fn read_source(path: &Path) -> Result<String, PipelineError> {
    fs::read_to_string(path).map_err(|source| PipelineError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Write `css` to `path`, failing if the file already exists.
///
/// The file is created exclusively, so an existing target is never touched.
/// If writing fails after creation, the partial file is removed.
pub fn write_output(path: &Path, css: &str) -> Result<(), PipelineError> {
    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|source| match source.kind() {
            io::ErrorKind::AlreadyExists => PipelineError::TargetExists(path.to_path_buf()),
            _ => PipelineError::Write {
                path: path.to_path_buf(),
                source,
            },
        })?;

    if let Err(source) = file.write_all(css.as_bytes()).and_then(|()| file.sync_all()) {
        drop(file);
        if let Err(cleanup) = fs::remove_file(path) {
            warn!(path = %path.display(), error = %cleanup, "partial_output_cleanup_failed");
        }
        return Err(PipelineError::Write {
            path: path.to_path_buf(),
            source,
        });
    }
    Ok(())
}

/// Where [`run_with`] puts the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination<'a> {
    /// Write to this path, or to `output.css` next to the source.
    File(Option<&'a Path>),
    /// Keep the result in memory only.
    DryRun,
}

/// Outcome of [`run`] and [`run_with`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// The file written, or `None` for a dry run.
    pub target: Option<PathBuf>,
    pub processed: ProcessedStylesheet,
}

/// Read `source`, process it, and write the result to `target` (or the
/// default `output.css` next to the source).
pub fn run(
    source: &Path,
    target: Option<&Path>,
    cfg: &ColorVarsConfig,
) -> Result<RunSummary, PipelineError> {
    run_with(source, Destination::File(target), cfg, |_| {})
}

/// [`run`] with a chosen destination, reporting each [`Stage`] to
/// `on_stage` as it is reached.
pub fn run_with<F>(
    source: &Path,
    destination: Destination<'_>,
    cfg: &ColorVarsConfig,
    mut on_stage: F,
) -> Result<RunSummary, PipelineError>
where
    F: FnMut(Stage<'_>),
{
    let text = read_source(source)?;
    let processed = process_observed(&text, cfg, &SrgbResolver, &mut on_stage)?;
    let target = match destination {
        Destination::DryRun => None,
        Destination::File(target) => {
            let target = target.map_or_else(|| default_target_path(source), Path::to_path_buf);
            write_output(&target, &processed.css)?;
            info!(target = %target.display(), bytes = processed.css.len(), "output_written");
            on_stage(Stage::Written(&target));
            Some(target)
        }
    };
    Ok(RunSummary { target, processed })
}
