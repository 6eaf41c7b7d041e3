//! Chart-ready output structures.
//!
//! The engine never renders anything: views that present as charts expose
//! a `ChartSpec` — category axis, metric axis, values in presentation
//! order — and the rendering collaborator draws it however it likes.

use serde::Serialize;

/// How the chart's marks are drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Bar,
    HorizontalBar,
    Line,
}

/// A fully-ordered, label-resolved chart description.
#[derive(Debug, Clone, Serialize)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// Category labels in presentation order
    pub categories: Vec<String>,
    /// One metric value per category, same order
    pub values: Vec<f64>,
    /// Fixed metric-axis bounds, when the view pins them
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_range: Option<(f64, f64)>,
}
