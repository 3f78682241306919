//! List command implementation.

use std::path::Path;

use anyhow::Context;
use colored::Colorize;
use plotvault_core::{Container, OpenMode, list_namespaces};

/// Execute the list command.
///
/// Prints one line per namespace in container order; tagged namespaces get
/// a `*` marker and their tag message on the following line, even when the
/// message is empty.
pub fn execute(file: &Path, json: bool) -> anyhow::Result<()> {
    let container = Container::open(file, OpenMode::ReadOnly)
        .with_context(|| format!("Failed to open container '{}'", file.display()))?;

    let summaries = list_namespaces(&container)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&summaries)?);
        return Ok(());
    }

    for summary in &summaries {
        let marker = if summary.is_tagged() { "*" } else { " " };
        println!("{:2} {} {} - {}", summary.index, marker, summary.key.bold(), summary.comment);
        if let Some(tag) = &summary.tag {
            println!("      {tag}");
        }
    }

    Ok(())
}
