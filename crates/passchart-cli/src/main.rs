// File: crates/passchart-cli/src/main.rs
// Summary: Renders benchmark result files (JSON/CSV) to one PNG per canvas and optionally a Chart.js HTML page.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use passchart_core::load::load_path;
use passchart_core::{render_chart, theme, Config, HtmlPage, LegendPosition, Page, ResultSet};
use tracing::{info, warn};

/// Render benchmark pass results as line charts
#[derive(Parser, Debug)]
#[command(name = "passchart")]
#[command(version)]
struct Args {
    /// Result files (.json with one or many result sets, or .csv with one)
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Directory for the per-canvas PNG files
    #[arg(short, long, default_value = "target/out")]
    out_dir: PathBuf,

    /// Also write a Chart.js HTML page to this path
    #[arg(long)]
    html: Option<PathBuf>,

    /// JSON config with page defaults and canvas settings
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[arg(long)]
    width: Option<i32>,

    #[arg(long)]
    height: Option<i32>,

    /// Theme preset (light, dark, high-contrast-dark)
    #[arg(long)]
    theme: Option<String>,

    /// Legend position (top, bottom, left, right)
    #[arg(long)]
    legend: Option<LegendPosition>,

    /// Hide chart titles by default
    #[arg(long)]
    no_title: bool,

    /// Skip all text (title, legend, ticks)
    #[arg(long)]
    no_labels: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();
    let config = resolve_config(&args)?;

    let mut results: Vec<ResultSet> = Vec::new();
    for input in &args.inputs {
        let sets = load_path(input).with_context(|| format!("failed to load '{}'", input.display()))?;
        info!(file = %input.display(), count = sets.len(), "loaded result sets");
        results.extend(sets);
    }

    for r in &results {
        for (pass, len) in r.length_mismatches() {
            warn!(
                test = %r.test_name,
                pass,
                results = len,
                labels = r.parameter_labels.len(),
                "result count differs from label count"
            );
        }
    }

    let mut page = Page::with_options(config.defaults, config.render_options());
    for r in &results {
        if page.canvas(&r.canvas_id).is_none() {
            page.add_default_canvas(r.canvas_id.clone())?;
        }
        render_chart(&mut page, r).with_context(|| format!("rendering '{}'", r.test_name))?;
    }

    let ids: Vec<String> = page.canvas_ids().map(str::to_string).collect();
    for id in &ids {
        let out = png_path(&args.out_dir, id);
        page.write_png(id, &out).with_context(|| format!("writing {}", out.display()))?;
        info!(canvas = %id, charts = page.chart_count(id), "wrote {}", out.display());
    }

    if let Some(path) = &args.html {
        let mut html = HtmlPage::new("Test Suite", &config.defaults);
        for r in &results {
            html.push(r)?;
        }
        html.write(path).with_context(|| format!("writing {}", path.display()))?;
        info!(charts = html.len(), "wrote {}", path.display());
    }

    Ok(())
}

/// Config file (if any) with command-line flags applied on top.
fn resolve_config(args: &Args) -> Result<Config> {
    let mut config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if let Some(w) = args.width { config.page.width = w; }
    if let Some(h) = args.height { config.page.height = h; }
    if let Some(t) = &args.theme {
        if !theme::presets().iter().any(|p| p.name.eq_ignore_ascii_case(t)) {
            warn!(theme = %t, "unknown theme, using light");
        }
        config.page.theme = t.clone();
    }
    if let Some(pos) = args.legend { config.defaults.legend_position = pos; }
    if args.no_title { config.defaults.title_display = false; }
    if args.no_labels { config.page.draw_labels = false; }
    Ok(config)
}

/// `<out_dir>/<canvas id>.png`, with path-hostile characters replaced.
fn png_path(out_dir: &Path, canvas_id: &str) -> PathBuf {
    let name: String = canvas_id
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.' { c } else { '_' })
        .collect();
    let name = if name.is_empty() { "chart".to_string() } else { name };
    out_dir.join(format!("{name}.png"))
}
