//! Export pipeline: resolve a namespace and render its plots to files.

mod render;
mod svg;

use std::fmt;
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;
use tracing::{debug, info};

use crate::catalog::{self, CatalogError};
use crate::config::{COMMENT_NAME, KEY_PLACEHOLDER, RESERVED_NAMES};
use crate::plot::Plot;
use crate::storage::{Container, StorageError};

/// Output formats the exporter can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Vector chart rendering.
    Svg,
    /// The plot object itself, pretty-printed.
    Json,
    /// Flat `series,x,y` rows.
    Csv,
}

impl ExportFormat {
    /// File extension for this format.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Svg => "svg",
            Self::Json => "json",
            Self::Csv => "csv",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "svg" => Ok(Self::Svg),
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            other => Err(ExportError::UnknownFormat(other.to_string())),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Errors that can occur while exporting a namespace.
#[derive(Error, Debug)]
pub enum ExportError {
    /// The requested output format is not supported.
    #[error("Unknown output format: {0}")]
    UnknownFormat(String),

    /// Id resolution or enumeration failure.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// Storage-related errors.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// A stored payload does not deserialize as a plot.
    #[error("Malformed plot object '{name}': {source}")]
    MalformedPlot { name: String, source: serde_json::Error },

    /// Plot encoding failure while writing an output file.
    #[error("Plot encoding error: {0}")]
    Encode(#[from] serde_json::Error),

    /// Output directory or file I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV writing failure.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type alias for export operations.
pub type ExportResult<T> = std::result::Result<T, ExportError>;

/// Options controlling a `get` export.
#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// Formats to render, in order.
    pub formats: Vec<ExportFormat>,
    /// Output directory, or a template containing [`KEY_PLACEHOLDER`].
    pub outdir_template: String,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self { formats: vec![ExportFormat::Svg], outdir_template: KEY_PLACEHOLDER.to_string() }
    }
}

/// Substitutes the namespace key into an output-directory template.
///
/// A template without the placeholder is used literally.
pub fn resolve_outdir(template: &str, key: &str) -> PathBuf {
    PathBuf::from(template.replace(KEY_PLACEHOLDER, key))
}

/// What an export wrote.
#[derive(Debug)]
pub struct ExportReport {
    /// Resolved namespace key.
    pub key: String,
    /// Newest comment; empty if the session was never commented.
    pub comment: String,
    /// Resolved output directory.
    pub outdir: PathBuf,
    /// Files written, in write order.
    pub files: Vec<PathBuf>,
}

/// Exports every plot of the namespace `id` resolves to.
///
/// The newest revision of each non-reserved object is rendered once per
/// requested format, as `<outdir>/<name>.<extension>`. Directory creation
/// happens only after the id resolves, so an invalid id leaves the
/// filesystem untouched.
pub fn export_namespace(
    container: &Container,
    id: &str,
    options: &ExportOptions,
) -> ExportResult<ExportReport> {
    let row = catalog::resolve_id(container, id)?;
    let comment = container.read_latest(row.id, COMMENT_NAME)?.unwrap_or_default();

    let outdir = resolve_outdir(&options.outdir_template, &row.key);
    fs::create_dir_all(&outdir)?;

    let mut files = Vec::new();
    for entry in container.entries(row.id)? {
        if RESERVED_NAMES.contains(&entry.name.as_str()) {
            continue;
        }
        let Some(payload) = container.read_latest(row.id, &entry.name)? else {
            continue;
        };
        let plot: Plot = serde_json::from_str(&payload)
            .map_err(|source| ExportError::MalformedPlot { name: entry.name.clone(), source })?;

        for format in &options.formats {
            let path = outdir.join(format!("{}.{}", entry.name, format.extension()));
            render::render_to_file(&plot, *format, &path)?;
            debug!(path = %path.display(), "wrote plot");
            files.push(path);
        }
    }

    info!(key = %row.key, count = files.len(), "export complete");
    Ok(ExportReport { key: row.key, comment, outdir, files })
}
