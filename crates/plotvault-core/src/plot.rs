//! Plot data model shared by the writer and the exporter.
//!
//! The container itself never inspects payloads; `Plot` is the convention
//! the writer serializes and the exporter renders.

use serde::{Deserialize, Serialize};

/// A single named data series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    /// Legend label.
    pub label: String,
    /// Sample points as `(x, y)` pairs.
    pub points: Vec<(f64, f64)>,
}

impl Series {
    pub fn new(label: impl Into<String>, points: Vec<(f64, f64)>) -> Self {
        Self { label: label.into(), points }
    }

    /// Builds a series from bare y-values, using each value's position as x.
    ///
    /// Convenient for histogram-style data where only bin contents matter.
    pub fn from_values(label: impl Into<String>, values: &[f64]) -> Self {
        let points = values.iter().enumerate().map(|(i, &y)| (i as f64, y)).collect();
        Self { label: label.into(), points }
    }
}

/// A plot artifact: a titled set of series with axis labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plot {
    /// Intrinsic name, used as the default object name on save.
    pub name: String,
    /// Chart title.
    pub title: String,
    /// X-axis label.
    #[serde(default)]
    pub x_label: String,
    /// Y-axis label.
    #[serde(default)]
    pub y_label: String,
    /// Data series, drawn in order.
    pub series: Vec<Series>,
}

impl Plot {
    pub fn new(name: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            x_label: String::new(),
            y_label: String::new(),
            series: Vec::new(),
        }
    }

    pub fn with_labels(mut self, x_label: impl Into<String>, y_label: impl Into<String>) -> Self {
        self.x_label = x_label.into();
        self.y_label = y_label.into();
        self
    }

    pub fn with_series(mut self, series: Series) -> Self {
        self.series.push(series);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_values_uses_positions_as_x() {
        let series = Series::from_values("h1", &[10.0, 9.0, 8.0]);
        assert_eq!(series.points, [(0.0, 10.0), (1.0, 9.0), (2.0, 8.0)]);
    }

    #[test]
    fn test_builder_collects_series_and_labels() {
        let plot = Plot::new("h1", "Counts")
            .with_labels("bin", "entries")
            .with_series(Series::from_values("a", &[1.0]))
            .with_series(Series::from_values("b", &[2.0]));

        assert_eq!(plot.name, "h1");
        assert_eq!(plot.x_label, "bin");
        assert_eq!(plot.series.len(), 2);
    }

    #[test]
    fn test_payload_without_axis_labels_deserializes() {
        // Writers may omit optional fields; readers must tolerate that.
        let payload = r#"{"name":"h1","title":"t","series":[]}"#;
        let plot: Plot = serde_json::from_str(payload).unwrap();
        assert_eq!(plot.x_label, "");
        assert_eq!(plot.y_label, "");
    }
}
