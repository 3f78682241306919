//! Per-format rendering of a plot to an output file.

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::Path;

use crate::export::{ExportError, ExportFormat, ExportResult, svg};
use crate::plot::Plot;

pub(crate) fn render_to_file(plot: &Plot, format: ExportFormat, path: &Path) -> ExportResult<()> {
    match format {
        ExportFormat::Svg => write_svg(plot, path),
        ExportFormat::Json => write_json(plot, path),
        ExportFormat::Csv => write_csv(plot, path),
    }
}

fn write_svg(plot: &Plot, path: &Path) -> ExportResult<()> {
    fs::write(path, svg::render(plot))?;
    Ok(())
}

fn write_json(plot: &Plot, path: &Path) -> ExportResult<()> {
    let file = File::create(path)?;
    serde_json::to_writer_pretty(BufWriter::new(file), plot).map_err(ExportError::Encode)?;
    Ok(())
}

fn write_csv(plot: &Plot, path: &Path) -> ExportResult<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["series", "x", "y"])?;
    for series in &plot.series {
        for (x, y) in &series.points {
            writer.write_record([series.label.as_str(), &x.to_string(), &y.to_string()])?;
        }
    }
    writer.flush()?;
    Ok(())
}
