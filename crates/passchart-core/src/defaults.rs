// File: crates/passchart-core/src/defaults.rs
// Summary: Page-wide chart defaults (title display, legend position), built once per page.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LegendPosition {
    Top,
    #[default]
    Bottom,
    Left,
    Right,
}

impl LegendPosition {
    pub fn as_str(&self) -> &'static str {
        match self {
            LegendPosition::Top => "top",
            LegendPosition::Bottom => "bottom",
            LegendPosition::Left => "left",
            LegendPosition::Right => "right",
        }
    }
}

impl std::str::FromStr for LegendPosition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "top" => Ok(Self::Top),
            "bottom" => Ok(Self::Bottom),
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            other => Err(format!("unknown legend position '{other}'")),
        }
    }
}

/// Defaults applied to every chart drawn in a page unless the chart's own
/// options override them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GlobalDefaults {
    pub title_display: bool,
    pub legend_position: LegendPosition,
}

impl Default for GlobalDefaults {
    fn default() -> Self {
        Self { title_display: true, legend_position: LegendPosition::Bottom }
    }
}
