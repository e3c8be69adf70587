// File: crates/passchart-core/src/options.rs
// Summary: Chart display options (title, y-axis scale, legend override) in Chart.js v2 shape.

use serde::{Deserialize, Serialize};

use crate::defaults::{GlobalDefaults, LegendPosition};

/// Y axis type used when a result set does not name one.
pub const DEFAULT_AXIS_TYPE: &str = "linear";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScaleKind {
    Linear,
    Log10,
}

impl ScaleKind {
    /// Map an axis type name to a scale; unknown names render linear.
    pub fn from_type_name(name: &str) -> Self {
        match name {
            "logarithmic" => ScaleKind::Log10,
            _ => ScaleKind::Linear,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TitleOptions {
    /// Per-chart override of the page default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display: Option<bool>,
    pub text: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AxisOptions {
    #[serde(rename = "type")]
    pub axis_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
}

impl AxisOptions {
    pub fn kind(&self) -> ScaleKind {
        ScaleKind::from_type_name(&self.axis_type)
    }
}

impl Default for AxisOptions {
    fn default() -> Self {
        Self { axis_type: DEFAULT_AXIS_TYPE.to_string(), max: None }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scales {
    pub y_axes: Vec<AxisOptions>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LegendOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<LegendPosition>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartOptions {
    pub title: TitleOptions,
    pub scales: Scales,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legend: Option<LegendOptions>,
}

impl ChartOptions {
    /// First y axis; a default linear axis when none is configured.
    pub fn y_axis(&self) -> AxisOptions {
        self.scales.y_axes.first().cloned().unwrap_or_default()
    }

    pub fn title_display(&self, defaults: &GlobalDefaults) -> bool {
        self.title.display.unwrap_or(defaults.title_display)
    }

    pub fn legend_display(&self) -> bool {
        self.legend.as_ref().and_then(|l| l.display).unwrap_or(true)
    }

    pub fn legend_position(&self, defaults: &GlobalDefaults) -> LegendPosition {
        self.legend
            .as_ref()
            .and_then(|l| l.position)
            .unwrap_or(defaults.legend_position)
    }
}
