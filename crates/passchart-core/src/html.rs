// File: crates/passchart-core/src/html.rs
// Summary: Standalone Chart.js results page: one canvas and one Chart.Line call per result set.

use std::fmt::Write as _;
use std::path::Path;

use crate::adapter::build_chart_config;
use crate::defaults::GlobalDefaults;
use crate::error::Result;
use crate::result::ResultSet;

/// Chart.js 2.x, whose `Chart.Line` and `Chart.defaults.global` the page script targets.
pub const CHART_JS_URL: &str = "https://cdn.jsdelivr.net/npm/chart.js@2.9.4/dist/Chart.min.js";

pub struct HtmlPage {
    title: String,
    defaults: GlobalDefaults,
    charts: Vec<(String, String)>,
}

impl HtmlPage {
    pub fn new(title: impl Into<String>, defaults: &GlobalDefaults) -> Self {
        Self { title: title.into(), defaults: *defaults, charts: Vec::new() }
    }

    /// Add a chart for `result`; charts appear in push order.
    pub fn push(&mut self, result: &ResultSet) -> Result<()> {
        let config = serde_json::to_string(&build_chart_config(result))?;
        self.charts.push((result.canvas_id.clone(), config));
        Ok(())
    }

    pub fn len(&self) -> usize { self.charts.len() }

    pub fn is_empty(&self) -> bool { self.charts.is_empty() }

    pub fn render(&self) -> String {
        let mut canvases = String::new();
        let mut calls = String::new();
        for (id, config) in &self.charts {
            let _ = writeln!(
                canvases,
                "    <div class=\"chart\"><canvas id=\"{}\"></canvas></div>",
                escape_html(id)
            );
            let _ = writeln!(
                calls,
                "        Chart.Line(document.getElementById({}), {});",
                script_safe(&json_string(id)),
                script_safe(config)
            );
        }

        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>{title}</title>
    <script src="{src}"></script>
    <style>
        body {{ font-family: sans-serif; margin: 20px; }}
        .chart {{ max-width: 900px; margin-bottom: 30px; }}
    </style>
</head>
<body>
    <h1>{title}</h1>
{canvases}    <script>
        Chart.defaults.global.title.display = {display};
        Chart.defaults.global.legend.position = '{position}';
{calls}    </script>
</body>
</html>
"#,
            title = escape_html(&self.title),
            src = CHART_JS_URL,
            canvases = canvases,
            display = self.defaults.title_display,
            position = self.defaults.legend_position.as_str(),
            calls = calls,
        )
    }

    pub fn write(&self, path: impl AsRef<Path>) -> Result<()> {
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.render())?;
        Ok(())
    }
}

fn json_string(s: &str) -> String {
    serde_json::Value::String(s.to_string()).to_string()
}

/// `</script>` inside a JSON literal would end the script element early.
fn script_safe(json: &str) -> String {
    json.replace("</", "<\\/")
}

pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
