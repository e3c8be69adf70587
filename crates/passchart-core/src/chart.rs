// File: crates/passchart-core/src/chart.rs
// Summary: Line chart instance: layout (title, legend, axes, plot) and Skia drawing of a LineChartConfig.

use skia_safe as skia;

use crate::adapter::LineChartConfig;
use crate::color::parse_or_black;
use crate::dataset::{CapStyle, ChartDataset, JoinStyle};
use crate::defaults::{GlobalDefaults, LegendPosition};
use crate::geometry::{clamp, distance, RectF};
use crate::grid::format_tick;
use crate::scale::{CategoryScale, ValueScale};
use crate::text::TextShaper;
use crate::theme::Theme;
use crate::types::{
    Insets, DEFAULT_BORDER_WIDTH, FONT_SIZE, HEIGHT, LEGEND_BOX_WIDTH, LEGEND_PADDING, TICK_PADDING,
    TITLE_PADDING, WIDTH,
};

#[derive(Clone, Copy, Debug)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    /// Draw title, legend and tick text. Off gives font-independent pixels.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::light(),
            draw_labels: true,
        }
    }
}

/// A data point found under a pixel position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointHit {
    pub dataset_index: usize,
    pub index: usize,
    pub value: f64,
    pub x: f32,
    pub y: f32,
}

#[derive(Clone, Debug)]
pub struct LegendItem {
    pub dataset_index: usize,
    pub swatch: RectF,
    pub text_x: f32,
    pub text_y: f32,
}

#[derive(Clone, Debug)]
pub struct ChartLayout {
    pub title: Option<RectF>,
    pub legend: Vec<LegendItem>,
    pub plot: RectF,
    pub x: CategoryScale,
    pub y: ValueScale,
}

/// One chart instance bound to a canvas.
pub struct LineChart {
    config: LineChartConfig,
    layout: ChartLayout,
}

impl LineChart {
    /// Lay out `config` within a `opts.width` x `opts.height` canvas.
    /// Without a shaper, text widths are estimated from character counts.
    pub fn new(
        config: LineChartConfig,
        defaults: &GlobalDefaults,
        opts: &RenderOptions,
        shaper: Option<&TextShaper>,
    ) -> Self {
        let layout = compute_layout(&config, defaults, opts, shaper);
        Self { config, layout }
    }

    pub fn config(&self) -> &LineChartConfig { &self.config }

    pub fn layout(&self) -> &ChartLayout { &self.layout }

    /// Pixel position of a data point; `None` for gaps, missing indices, and
    /// non-positive values on a log axis.
    pub fn point_position(&self, dataset_index: usize, index: usize) -> Option<(f32, f32)> {
        let ds = self.config.data.datasets.get(dataset_index)?;
        let v = (*ds.data.get(index)?)?;
        let y = self.layout.y.to_px(v)?;
        Some((self.layout.x.to_px(index as f64), y))
    }

    /// Nearest point within its dataset's hit radius. Ties go to the later
    /// dataset, which is drawn on top.
    pub fn hit_test(&self, x: f32, y: f32) -> Option<PointHit> {
        let mut best: Option<(f32, PointHit)> = None;
        for (di, ds) in self.config.data.datasets.iter().enumerate() {
            for (i, v) in ds.points() {
                let Some(p) = self.point_position(di, i) else { continue };
                if !self.layout.plot.contains(p.0, p.1) { continue; }
                let d = distance(p, (x, y));
                if d > ds.point_hit_radius as f32 { continue; }
                if best.as_ref().map_or(true, |(bd, _)| d <= *bd) {
                    best = Some((d, PointHit { dataset_index: di, index: i, value: v, x: p.0, y: p.1 }));
                }
            }
        }
        best.map(|(_, hit)| hit)
    }

    pub fn draw(
        &self,
        canvas: &skia::Canvas,
        opts: &RenderOptions,
        shaper: Option<&TextShaper>,
        hover: Option<&PointHit>,
    ) {
        let layout = &self.layout;
        draw_grid(canvas, layout, &self.config.data.labels, &opts.theme);

        canvas.save();
        canvas.clip_rect(layout.plot.to_skia(), None, None);
        for (di, ds) in self.config.data.datasets.iter().enumerate() {
            draw_dataset_line(canvas, layout, ds, di, self);
        }
        canvas.restore();

        for (di, ds) in self.config.data.datasets.iter().enumerate() {
            let hovered = hover.filter(|h| h.dataset_index == di).map(|h| h.index);
            draw_dataset_points(canvas, ds, di, self, hovered);
        }

        draw_legend_swatches(canvas, layout, &self.config.data.datasets);

        if let Some(shaper) = shaper {
            draw_labels(canvas, layout, &self.config, shaper, &opts.theme);
        }
    }
}

// ---- layout -----------------------------------------------------------------

fn text_width(shaper: Option<&TextShaper>, text: &str, bold: bool) -> f32 {
    match shaper {
        Some(s) => s.measure_width(text, FONT_SIZE, bold),
        None => text.chars().count() as f32 * FONT_SIZE * 0.6,
    }
}

fn compute_layout(
    config: &LineChartConfig,
    defaults: &GlobalDefaults,
    opts: &RenderOptions,
    shaper: Option<&TextShaper>,
) -> ChartLayout {
    let ins = opts.insets;
    let mut area = RectF::from_ltwh(0.0, 0.0, opts.width as f32, opts.height as f32)
        .inset(ins.left as f32, ins.top as f32, ins.right as f32, ins.bottom as f32);
    let options = &config.options;

    let title = if options.title_display(defaults) {
        let band = FONT_SIZE + 2.0 * TITLE_PADDING;
        let rect = RectF::from_ltwh(area.left, area.top, area.width(), band);
        area = area.inset(0.0, band, 0.0, 0.0);
        Some(rect)
    } else {
        None
    };

    let datasets = &config.data.datasets;
    let mut legend = Vec::new();
    if options.legend_display() && !datasets.is_empty() {
        let item_w: Vec<f32> = datasets
            .iter()
            .map(|d| LEGEND_BOX_WIDTH + FONT_SIZE * 0.5 + text_width(shaper, &d.label, false))
            .collect();
        let row_h = FONT_SIZE + LEGEND_PADDING;
        match options.legend_position(defaults) {
            pos @ (LegendPosition::Top | LegendPosition::Bottom) => {
                // wrap items into centered rows
                let mut rows: Vec<Vec<usize>> = vec![Vec::new()];
                let mut row_w = 0.0;
                for (i, w) in item_w.iter().enumerate() {
                    let need = w + LEGEND_PADDING;
                    if row_w + need > area.width() && !rows.last().map_or(true, Vec::is_empty) {
                        rows.push(Vec::new());
                        row_w = 0.0;
                    }
                    row_w += need;
                    if let Some(row) = rows.last_mut() { row.push(i); }
                }
                let band = rows.len() as f32 * row_h + LEGEND_PADDING;
                let top = if pos == LegendPosition::Top { area.top } else { area.bottom - band };
                for (r, row) in rows.iter().enumerate() {
                    let total: f32 = row.iter().map(|&i| item_w[i] + LEGEND_PADDING).sum::<f32>() - LEGEND_PADDING;
                    let mut x = area.center_x() - total * 0.5;
                    let y = top + LEGEND_PADDING + r as f32 * row_h;
                    for &i in row {
                        legend.push(legend_item(i, x, y));
                        x += item_w[i] + LEGEND_PADDING;
                    }
                }
                area = if pos == LegendPosition::Top {
                    area.inset(0.0, band, 0.0, 0.0)
                } else {
                    area.inset(0.0, 0.0, 0.0, band)
                };
            }
            pos @ (LegendPosition::Left | LegendPosition::Right) => {
                let band = item_w.iter().cloned().fold(0.0f32, f32::max) + 2.0 * LEGEND_PADDING;
                let left = if pos == LegendPosition::Left { area.left } else { area.right - band };
                for (i, _) in item_w.iter().enumerate() {
                    legend.push(legend_item(i, left + LEGEND_PADDING, area.top + LEGEND_PADDING + i as f32 * row_h));
                }
                area = if pos == LegendPosition::Left {
                    area.inset(band, 0.0, 0.0, 0.0)
                } else {
                    area.inset(0.0, 0.0, band, 0.0)
                };
            }
        }
    }

    // vertical extent first: it decides the tick set, which decides the label width
    let plot_top = area.top + FONT_SIZE * 0.5;
    let plot_bottom = area.bottom - (FONT_SIZE + TICK_PADDING);
    let y_axis = options.y_axis();
    let values = datasets.iter().flat_map(|d| d.data.iter().flatten().copied());
    let y = ValueScale::fit(y_axis.kind(), plot_top, plot_bottom.max(plot_top + 1.0), values, y_axis.max);

    let tick_w = y
        .labeled_ticks()
        .iter()
        .map(|&t| text_width(shaper, &format_tick(t), false))
        .fold(0.0f32, f32::max);
    let plot_left = area.left + tick_w + TICK_PADDING;
    let last_label_w = config.data.labels.last().map_or(0.0, |l| text_width(shaper, l, false));
    let plot_right = (area.right - last_label_w * 0.5).max(plot_left + 1.0);

    let plot = RectF::from_ltrb(plot_left, y.top_px, plot_right, y.bottom_px);
    let x = CategoryScale::new(plot.left, plot.right, config.data.labels.len());

    ChartLayout { title, legend, plot, x, y }
}

fn legend_item(dataset_index: usize, x: f32, y: f32) -> LegendItem {
    LegendItem {
        dataset_index,
        swatch: RectF::from_ltwh(x, y, LEGEND_BOX_WIDTH, FONT_SIZE),
        text_x: x + LEGEND_BOX_WIDTH + FONT_SIZE * 0.5,
        text_y: y + FONT_SIZE * 0.5,
    }
}

// ---- drawing ----------------------------------------------------------------

fn draw_grid(canvas: &skia::Canvas, layout: &ChartLayout, labels: &[String], theme: &Theme) {
    let plot = &layout.plot;
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.0);

    // horizontals at every tick; the zero line is stronger on linear axes
    for &t in &layout.y.ticks {
        let Some(py) = layout.y.to_px(t) else { continue };
        paint.set_color(if t == 0.0 { theme.zero_line } else { theme.grid });
        canvas.draw_line((plot.left, py), (plot.right, py), &paint);
    }
    // verticals at every label
    paint.set_color(theme.grid);
    for i in 0..labels.len() {
        let px = layout.x.to_px(i as f64);
        canvas.draw_line((px, plot.top), (px, plot.bottom), &paint);
    }
}

/// Chart.js spline control points around `cur`: (incoming, outgoing).
fn spline_controls(prev: (f32, f32), cur: (f32, f32), next: (f32, f32), tension: f32) -> ((f32, f32), (f32, f32)) {
    let d01 = distance(prev, cur);
    let d12 = distance(cur, next);
    let total = d01 + d12;
    let (s01, s12) = if total > 0.0 { (d01 / total, d12 / total) } else { (0.0, 0.0) };
    let fa = tension * s01;
    let fb = tension * s12;
    let (dx, dy) = (next.0 - prev.0, next.1 - prev.1);
    ((cur.0 - fa * dx, cur.1 - fa * dy), (cur.0 + fb * dx, cur.1 + fb * dy))
}

/// Contiguous runs of drawable points. A gap ends a run unless `span_gaps`.
fn point_runs(chart: &LineChart, ds: &ChartDataset, di: usize) -> Vec<Vec<(f32, f32)>> {
    let mut runs: Vec<Vec<(f32, f32)>> = vec![Vec::new()];
    for i in 0..ds.data.len() {
        match chart.point_position(di, i) {
            Some(p) => {
                if let Some(run) = runs.last_mut() { run.push(p); }
            }
            None if !ds.span_gaps => {
                if runs.last().map_or(false, |r| !r.is_empty()) { runs.push(Vec::new()); }
            }
            None => {}
        }
    }
    runs.retain(|r| !r.is_empty());
    runs
}

fn line_path(run: &[(f32, f32)], tension: f32, plot: &RectF) -> skia::Path {
    let mut path = skia::Path::new();
    path.move_to(run[0]);
    if tension <= 0.0 {
        for &p in &run[1..] { path.line_to(p); }
        return path;
    }
    let n = run.len();
    let controls: Vec<((f32, f32), (f32, f32))> = (0..n)
        .map(|i| {
            let prev = run[i.saturating_sub(1)];
            let next = run[(i + 1).min(n - 1)];
            let (a, b) = spline_controls(prev, run[i], next, tension);
            // keep the curve inside the plot so it never overshoots an axis
            let cap = |p: (f32, f32)| (clamp(p.0, plot.left, plot.right), clamp(p.1, plot.top, plot.bottom));
            (cap(a), cap(b))
        })
        .collect();
    for i in 1..n {
        path.cubic_to(controls[i - 1].1, controls[i].0, run[i]);
    }
    path
}

fn draw_dataset_line(canvas: &skia::Canvas, layout: &ChartLayout, ds: &ChartDataset, di: usize, chart: &LineChart) {
    let tension = ds.line_tension as f32;
    let border = parse_or_black(&ds.border_color);

    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(ds.border_width.map_or(DEFAULT_BORDER_WIDTH, |w| w as f32));
    stroke.set_color(border);
    stroke.set_stroke_cap(match ds.border_cap_style {
        CapStyle::Butt => skia::paint::Cap::Butt,
        CapStyle::Round => skia::paint::Cap::Round,
        CapStyle::Square => skia::paint::Cap::Square,
    });
    stroke.set_stroke_join(match ds.border_join_style {
        JoinStyle::Miter => skia::paint::Join::Miter,
        JoinStyle::Round => skia::paint::Join::Round,
        JoinStyle::Bevel => skia::paint::Join::Bevel,
    });
    if !ds.border_dash.is_empty() {
        let intervals: Vec<f32> = ds.border_dash.iter().map(|&d| d as f32).collect();
        stroke.set_path_effect(skia::PathEffect::dash(&intervals, ds.border_dash_offset as f32));
    }

    for run in point_runs(chart, ds, di) {
        let path = line_path(&run, tension, &layout.plot);
        if ds.fill {
            let mut area = path.clone();
            if let (Some(first), Some(last)) = (run.first(), run.last()) {
                area.line_to((last.0, layout.plot.bottom));
                area.line_to((first.0, layout.plot.bottom));
                area.close();
            }
            let mut fill = skia::Paint::default();
            fill.set_anti_alias(true);
            fill.set_style(skia::paint::Style::Fill);
            fill.set_color(parse_or_black(&ds.background_color));
            canvas.draw_path(&area, &fill);
        }
        if run.len() >= 2 {
            canvas.draw_path(&path, &stroke);
        }
    }
}

fn draw_dataset_points(canvas: &skia::Canvas, ds: &ChartDataset, di: usize, chart: &LineChart, hovered: Option<usize>) {
    let plot = &chart.layout.plot;
    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_style(skia::paint::Style::Fill);
    let mut ring = skia::Paint::default();
    ring.set_anti_alias(true);
    ring.set_style(skia::paint::Style::Stroke);

    let normal = (
        parse_or_black(&ds.point_background_color),
        parse_or_black(&ds.point_border_color),
        ds.point_border_width as f32,
        ds.point_radius as f32,
    );
    let hover = (
        parse_or_black(&ds.point_hover_background_color),
        parse_or_black(&ds.point_hover_border_color),
        ds.point_hover_border_width as f32,
        ds.point_hover_radius as f32,
    );

    for (i, _) in ds.points() {
        let Some(p) = chart.point_position(di, i) else { continue };
        if !plot.contains(p.0, p.1) { continue; }
        let (bg, border, border_w, radius) = if hovered == Some(i) { hover } else { normal };
        if radius <= 0.0 { continue; }
        fill.set_color(bg);
        canvas.draw_circle(p, radius, &fill);
        if border_w > 0.0 {
            ring.set_color(border);
            ring.set_stroke_width(border_w);
            canvas.draw_circle(p, radius, &ring);
        }
    }
}

fn draw_legend_swatches(canvas: &skia::Canvas, layout: &ChartLayout, datasets: &[ChartDataset]) {
    let mut fill = skia::Paint::default();
    fill.set_style(skia::paint::Style::Fill);
    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);

    for item in &layout.legend {
        let Some(ds) = datasets.get(item.dataset_index) else { continue };
        fill.set_color(parse_or_black(&ds.background_color));
        canvas.draw_rect(item.swatch.to_skia(), &fill);
        stroke.set_color(parse_or_black(&ds.border_color));
        stroke.set_stroke_width(ds.border_width.map_or(DEFAULT_BORDER_WIDTH, |w| w as f32));
        canvas.draw_rect(item.swatch.to_skia(), &stroke);
    }
}

fn draw_labels(canvas: &skia::Canvas, layout: &ChartLayout, config: &LineChartConfig, shaper: &TextShaper, theme: &Theme) {
    let plot = &layout.plot;

    if let Some(title) = &layout.title {
        let cy = title.top + title.height() * 0.5;
        shaper.draw_centered(canvas, &config.options.title.text, title.center_x(), cy, FONT_SIZE, theme.title, true);
    }

    for item in &layout.legend {
        if let Some(ds) = config.data.datasets.get(item.dataset_index) {
            shaper.draw_left(canvas, &ds.label, item.text_x, item.text_y, FONT_SIZE, theme.legend_label, false);
        }
    }

    for t in layout.y.labeled_ticks() {
        let Some(py) = layout.y.to_px(t) else { continue };
        shaper.draw_right(canvas, &format_tick(t), plot.left - TICK_PADDING, py, FONT_SIZE, theme.tick_label, false);
    }

    // skip labels that would overlap their neighbours
    let labels = &config.data.labels;
    let widest = labels.iter().map(|l| shaper.measure_width(l, FONT_SIZE, false)).fold(0.0f32, f32::max);
    let step_px = if labels.len() > 1 { layout.x.to_px(1.0) - layout.x.to_px(0.0) } else { f32::MAX };
    let every = ((widest + 4.0) / step_px.max(1.0)).ceil().max(1.0) as usize;
    let y = plot.bottom + TICK_PADDING + FONT_SIZE * 0.5;
    for (i, label) in labels.iter().enumerate().step_by(every) {
        shaper.draw_centered(canvas, label, layout.x.to_px(i as f64), y, FONT_SIZE, theme.tick_label, false);
    }
}
