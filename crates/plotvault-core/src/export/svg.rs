//! Minimal SVG line-chart rendering.
//!
//! Output is deterministic: the same plot always produces the same bytes.

use crate::plot::{Plot, Series};

const WIDTH: f64 = 800.0;
const HEIGHT: f64 = 600.0;
const MARGIN_LEFT: f64 = 60.0;
const MARGIN_RIGHT: f64 = 20.0;
const MARGIN_TOP: f64 = 50.0;
const MARGIN_BOTTOM: f64 = 50.0;

const PALETTE: [&str; 6] = ["#1f77b4", "#d62728", "#2ca02c", "#9467bd", "#ff7f0e", "#8c564b"];

struct Bounds {
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
}

pub(crate) fn render(plot: &Plot) -> String {
    let bounds = bounds(&plot.series);
    let mut out = String::new();

    out.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 {WIDTH} {HEIGHT}\">\n"
    ));
    out.push_str(&format!(
        "  <rect width=\"{WIDTH}\" height=\"{HEIGHT}\" fill=\"white\"/>\n"
    ));
    out.push_str(&format!(
        "  <text x=\"{:.1}\" y=\"30\" text-anchor=\"middle\" font-size=\"20\">{}</text>\n",
        WIDTH / 2.0,
        escape(&plot.title)
    ));

    // Axes
    let x0 = MARGIN_LEFT;
    let y0 = HEIGHT - MARGIN_BOTTOM;
    let x1 = WIDTH - MARGIN_RIGHT;
    let y1 = MARGIN_TOP;
    out.push_str(&format!(
        "  <line x1=\"{x0:.1}\" y1=\"{y0:.1}\" x2=\"{x1:.1}\" y2=\"{y0:.1}\" stroke=\"black\"/>\n"
    ));
    out.push_str(&format!(
        "  <line x1=\"{x0:.1}\" y1=\"{y0:.1}\" x2=\"{x0:.1}\" y2=\"{y1:.1}\" stroke=\"black\"/>\n"
    ));

    if !plot.x_label.is_empty() {
        out.push_str(&format!(
            "  <text x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"middle\" font-size=\"14\">{}</text>\n",
            (x0 + x1) / 2.0,
            HEIGHT - 10.0,
            escape(&plot.x_label)
        ));
    }
    if !plot.y_label.is_empty() {
        out.push_str(&format!(
            "  <text x=\"15\" y=\"{:.1}\" text-anchor=\"middle\" font-size=\"14\" \
             transform=\"rotate(-90 15 {:.1})\">{}</text>\n",
            (y0 + y1) / 2.0,
            (y0 + y1) / 2.0,
            escape(&plot.y_label)
        ));
    }

    for (i, series) in plot.series.iter().enumerate() {
        let color = PALETTE[i % PALETTE.len()];
        if !series.points.is_empty() {
            out.push_str(&format!(
                "  <polyline fill=\"none\" stroke=\"{color}\" stroke-width=\"2\" points=\"{}\"/>\n",
                polyline_points(series, &bounds)
            ));
        }
        out.push_str(&format!(
            "  <text x=\"{:.1}\" y=\"{:.1}\" font-size=\"12\" fill=\"{color}\">{}</text>\n",
            x1 - 120.0,
            y1 + 16.0 * (i as f64 + 1.0),
            escape(&series.label)
        ));
    }

    out.push_str("</svg>\n");
    out
}

fn polyline_points(series: &Series, bounds: &Bounds) -> String {
    let coords: Vec<String> = series
        .points
        .iter()
        .map(|&(x, y)| format!("{:.1},{:.1}", scale_x(x, bounds), scale_y(y, bounds)))
        .collect();
    coords.join(" ")
}

fn scale_x(x: f64, bounds: &Bounds) -> f64 {
    let span = WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
    MARGIN_LEFT + (x - bounds.x_min) / (bounds.x_max - bounds.x_min) * span
}

fn scale_y(y: f64, bounds: &Bounds) -> f64 {
    let span = HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;
    // SVG y grows downward.
    HEIGHT - MARGIN_BOTTOM - (y - bounds.y_min) / (bounds.y_max - bounds.y_min) * span
}

/// Data bounds across all series, padded so degenerate ranges still scale.
fn bounds(series: &[Series]) -> Bounds {
    let mut x_min = f64::INFINITY;
    let mut x_max = f64::NEG_INFINITY;
    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;

    for series in series {
        for &(x, y) in &series.points {
            x_min = x_min.min(x);
            x_max = x_max.max(x);
            y_min = y_min.min(y);
            y_max = y_max.max(y);
        }
    }

    if !x_min.is_finite() {
        return Bounds { x_min: 0.0, x_max: 1.0, y_min: 0.0, y_max: 1.0 };
    }
    if x_max - x_min < f64::EPSILON {
        x_max = x_min + 1.0;
    }
    if y_max - y_min < f64::EPSILON {
        y_max = y_min + 1.0;
    }
    Bounds { x_min, x_max, y_min, y_max }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}
