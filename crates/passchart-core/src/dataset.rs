// File: crates/passchart-core/src/dataset.rs
// Summary: Line dataset model (one series plus its stroke/point styling) in Chart.js v2 shape.
// Notes:
// - Field names serialize to the Chart.js keys (`borderCapStyle`, `pointHitRadius`, ...).
// - Styling numbers are f64 so they serialize without float32 noise (0.1, not 0.10000000149).

use serde::{Deserialize, Serialize};

use crate::result::Pass;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CapStyle {
    Butt,
    Round,
    Square,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JoinStyle {
    Miter,
    Round,
    Bevel,
}

/// Fixed styling shared by every pass dataset.
pub mod style {
    pub const LINE_TENSION: f64 = 0.1;
    pub const POINT_BACKGROUND: &str = "#fff";
    pub const POINT_BORDER_WIDTH: f64 = 1.0;
    pub const POINT_RADIUS: f64 = 1.0;
    pub const POINT_HOVER_RADIUS: f64 = 5.0;
    pub const POINT_HIT_RADIUS: f64 = 10.0;
    pub const POINT_HOVER_BORDER_COLOR: &str = "rgba(220,220,220,1)";
    pub const POINT_HOVER_BORDER_WIDTH: f64 = 2.0;
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartDataset {
    pub label: String,
    pub fill: bool,
    pub line_tension: f64,
    pub background_color: String,
    pub border_color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_width: Option<f64>,
    pub border_cap_style: CapStyle,
    pub border_dash: Vec<f64>,
    pub border_dash_offset: f64,
    pub border_join_style: JoinStyle,
    pub point_border_color: String,
    pub point_background_color: String,
    pub point_border_width: f64,
    pub point_hover_radius: f64,
    pub point_hover_background_color: String,
    pub point_hover_border_color: String,
    pub point_hover_border_width: f64,
    pub point_radius: f64,
    pub point_hit_radius: f64,
    pub data: Vec<Option<f64>>,
    pub span_gaps: bool,
}

impl ChartDataset {
    /// Dataset for one pass. The pass color drives line, fill, point border
    /// and hover fill; every other field is a fixed constant.
    pub fn from_pass(pass: &Pass) -> Self {
        Self {
            label: pass.name.clone(),
            fill: false,
            line_tension: style::LINE_TENSION,
            background_color: pass.color.clone(),
            border_color: pass.color.clone(),
            border_width: None,
            border_cap_style: CapStyle::Butt,
            border_dash: Vec::new(),
            border_dash_offset: 0.0,
            border_join_style: JoinStyle::Miter,
            point_border_color: pass.color.clone(),
            point_background_color: style::POINT_BACKGROUND.to_string(),
            point_border_width: style::POINT_BORDER_WIDTH,
            point_hover_radius: style::POINT_HOVER_RADIUS,
            point_hover_background_color: pass.color.clone(),
            point_hover_border_color: style::POINT_HOVER_BORDER_COLOR.to_string(),
            point_hover_border_width: style::POINT_HOVER_BORDER_WIDTH,
            point_radius: style::POINT_RADIUS,
            point_hit_radius: style::POINT_HIT_RADIUS,
            data: pass.results.clone(),
            span_gaps: false,
        }
    }

    /// `(index, value)` for every present data point.
    pub fn points(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.data.iter().enumerate().filter_map(|(i, v)| v.map(|v| (i, v)))
    }
}
