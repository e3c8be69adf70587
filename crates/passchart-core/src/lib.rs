// File: crates/passchart-core/src/lib.rs
// Summary: Core library entry point; exports the result-set adapter, page/canvas rendering and emitters.

pub mod adapter;
pub mod chart;
pub mod color;
pub mod config;
pub mod dataset;
pub mod defaults;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod html;
pub mod load;
pub mod options;
pub mod page;
pub mod result;
pub mod scale;
pub mod text;
pub mod theme;
pub mod types;

pub use adapter::{build_chart_config, build_chart_data, build_chart_options, render_chart, ChartData, LineChartConfig};
pub use chart::{LineChart, PointHit, RenderOptions};
pub use config::Config;
pub use dataset::ChartDataset;
pub use defaults::{GlobalDefaults, LegendPosition};
pub use error::{ChartError, Result};
pub use html::HtmlPage;
pub use options::{AxisOptions, ChartOptions, ScaleKind};
pub use page::{Canvas, Page};
pub use result::{Pass, ResultSet};
pub use theme::Theme;
pub use text::TextShaper;
