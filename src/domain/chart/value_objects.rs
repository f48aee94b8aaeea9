use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Value Object - Chart type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    #[display(fmt = "Line")]
    Line,
}

/// Declarative chart description handed to a [`ChartEngine`](super::ChartEngine).
///
/// Serialises to the shape Chart.js accepts, which keeps the engine swappable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfiguration {
    #[serde(rename = "type")]
    pub kind: ChartKind,
    pub data: ChartData,
    pub options: ChartOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub label: String,
    pub data: Vec<f64>,
    pub border_color: String,
    pub fill: bool,
    /// Bezier curve tension, 0 draws straight segments
    pub tension: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub responsive: bool,
    /// Width / height used when sizing to the container
    pub aspect_ratio: f64,
    pub scales: Scales,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scales {
    pub y: AxisOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisOptions {
    pub begin_at_zero: bool,
}

/// Look of the single price line; comes from `AppConfig`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartStyle {
    pub border_color: String,
    pub tension: f64,
    pub aspect_ratio: f64,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            border_color: "rgb(75, 192, 192)".to_string(),
            tension: 0.1,
            aspect_ratio: 2.0,
        }
    }
}
