//! Get command implementation.

use std::path::Path;

use anyhow::Context;
use colored::Colorize;
use plotvault_core::{Container, ExportFormat, ExportOptions, OpenMode, export_namespace};

/// Execute the get command.
///
/// Resolves the id, then exports the newest revision of every plot in that
/// namespace to the output directory, once per requested format.
pub fn execute(id: &str, file: &Path, types: &[String], outdir: Option<&str>) -> anyhow::Result<()> {
    let container = Container::open(file, OpenMode::ReadOnly)
        .with_context(|| format!("Failed to open container '{}'", file.display()))?;

    let mut options = ExportOptions::default();
    if let Some(template) = outdir {
        options.outdir_template = template.to_string();
    }
    if !types.is_empty() {
        options.formats = parse_formats(types)?;
    }

    let report = export_namespace(&container, id, &options)?;

    println!("Loading plots for {}", report.key.bold());
    if !report.comment.is_empty() {
        println!(" -> {}", report.comment);
    }
    for path in &report.files {
        println!("  {}", path.display());
    }

    Ok(())
}

/// Parses `-t` values into formats. Duplicates are ignored.
fn parse_formats(types: &[String]) -> anyhow::Result<Vec<ExportFormat>> {
    let mut formats = Vec::new();
    for raw in types {
        let format: ExportFormat = raw.parse()?;
        if !formats.contains(&format) {
            formats.push(format);
        }
    }
    Ok(formats)
}
