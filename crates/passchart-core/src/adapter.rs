// File: crates/passchart-core/src/adapter.rs
// Summary: ResultSet -> line chart configuration adapter, and the draw request onto a page canvas.
// Notes:
// - The adapter never validates label/result lengths; mismatched data is passed through
//   verbatim. Use `ResultSet::length_mismatches` for diagnostics.

use serde::{Deserialize, Serialize};

use crate::dataset::ChartDataset;
use crate::error::Result;
use crate::options::{AxisOptions, ChartOptions, Scales, TitleOptions, DEFAULT_AXIS_TYPE};
use crate::page::Page;
use crate::result::ResultSet;

/// Labels plus one dataset per pass, in pass order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<ChartDataset>,
}

/// Complete line chart draw request.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LineChartConfig {
    #[serde(rename = "type")]
    pub chart_type: String,
    pub data: ChartData,
    pub options: ChartOptions,
}

pub fn build_chart_data(result: &ResultSet) -> ChartData {
    ChartData {
        labels: result.parameter_labels.clone(),
        datasets: result.passes.iter().map(ChartDataset::from_pass).collect(),
    }
}

pub fn build_chart_options(result: &ResultSet) -> ChartOptions {
    let axis_type = result
        .axis_type
        .clone()
        .unwrap_or_else(|| DEFAULT_AXIS_TYPE.to_string());
    ChartOptions {
        title: TitleOptions { display: None, text: result.test_name.clone() },
        scales: Scales { y_axes: vec![AxisOptions { axis_type, max: result.axis_max }] },
        legend: None,
    }
}

pub fn build_chart_config(result: &ResultSet) -> LineChartConfig {
    LineChartConfig {
        chart_type: "line".to_string(),
        data: build_chart_data(result),
        options: build_chart_options(result),
    }
}

/// Build the chart for `result` and draw it onto the page canvas named by
/// `result.canvas_id`. Each call creates a new chart instance on that canvas.
pub fn render_chart(page: &mut Page, result: &ResultSet) -> Result<()> {
    let config = build_chart_config(result);
    page.draw(&result.canvas_id, config)
}
