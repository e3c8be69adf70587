// File: crates/passchart-core/src/page.rs
// Summary: Page of named raster canvases that charts are drawn onto, with PNG/RGBA export.
// Notes:
// - Global defaults are fixed when the page is built and apply to every chart drawn on it.
// - Drawing never clears a canvas; a second chart on the same canvas paints over the first.

use std::path::Path;

use skia_safe as skia;
use tracing::debug;

use crate::adapter::LineChartConfig;
use crate::chart::{LineChart, PointHit, RenderOptions};
use crate::defaults::GlobalDefaults;
use crate::error::{ChartError, Result};
use crate::text::TextShaper;

/// A named drawable surface and the chart instances created on it.
pub struct Canvas {
    id: String,
    width: i32,
    height: i32,
    surface: skia::Surface,
    charts: Vec<LineChart>,
}

impl Canvas {
    pub fn id(&self) -> &str { &self.id }
    pub fn width(&self) -> i32 { self.width }
    pub fn height(&self) -> i32 { self.height }
    pub fn charts(&self) -> &[LineChart] { &self.charts }
}

pub struct Page {
    defaults: GlobalDefaults,
    options: RenderOptions,
    shaper: TextShaper,
    canvases: Vec<Canvas>,
}

impl Page {
    pub fn new(defaults: GlobalDefaults) -> Self {
        Self::with_options(defaults, RenderOptions::default())
    }

    pub fn with_options(defaults: GlobalDefaults, options: RenderOptions) -> Self {
        Self { defaults, options, shaper: TextShaper::new(), canvases: Vec::new() }
    }

    pub fn defaults(&self) -> &GlobalDefaults { &self.defaults }

    pub fn options(&self) -> &RenderOptions { &self.options }

    /// Add a canvas using the page's default size.
    pub fn add_default_canvas(&mut self, id: impl Into<String>) -> Result<()> {
        self.add_canvas(id, self.options.width, self.options.height)
    }

    /// Add a canvas cleared to the theme background.
    pub fn add_canvas(&mut self, id: impl Into<String>, width: i32, height: i32) -> Result<()> {
        let id = id.into();
        if self.canvases.iter().any(|c| c.id == id) {
            return Err(ChartError::DuplicateCanvas(id));
        }
        let mut surface = skia::surfaces::raster_n32_premul((width, height))
            .ok_or(ChartError::Surface { width, height })?;
        surface.canvas().clear(self.options.theme.background);
        debug!(canvas = %id, width, height, "canvas created");
        self.canvases.push(Canvas { id, width, height, surface, charts: Vec::new() });
        Ok(())
    }

    pub fn canvas(&self, id: &str) -> Option<&Canvas> {
        self.canvases.iter().find(|c| c.id == id)
    }

    pub fn canvas_ids(&self) -> impl Iterator<Item = &str> {
        self.canvases.iter().map(|c| c.id.as_str())
    }

    /// Number of chart instances created on a canvas (0 for unknown ids).
    pub fn chart_count(&self, id: &str) -> usize {
        self.canvas(id).map_or(0, |c| c.charts.len())
    }

    fn canvas_mut(canvases: &mut [Canvas], id: &str) -> Result<&mut Canvas> {
        canvases
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| ChartError::CanvasNotFound(id.to_string()))
    }

    /// Create a chart instance from `config` on canvas `id` and draw it.
    pub fn draw(&mut self, id: &str, config: LineChartConfig) -> Result<()> {
        let base = self.options;
        let shaper = base.draw_labels.then_some(&self.shaper);
        let canvas = Self::canvas_mut(&mut self.canvases, id)?;
        let opts = RenderOptions { width: canvas.width, height: canvas.height, ..base };

        let chart = LineChart::new(config, &self.defaults, &opts, shaper);
        chart.draw(canvas.surface.canvas(), &opts, shaper, None);
        debug!(
            canvas = id,
            title = %chart.config().options.title.text,
            datasets = chart.config().data.datasets.len(),
            "chart drawn"
        );
        canvas.charts.push(chart);
        Ok(())
    }

    /// Data point under `(x, y)`, searching the most recently created chart first.
    pub fn hit_test(&self, id: &str, x: f32, y: f32) -> Result<Option<PointHit>> {
        let canvas = self.canvas(id).ok_or_else(|| ChartError::CanvasNotFound(id.to_string()))?;
        Ok(canvas.charts.iter().rev().find_map(|c| c.hit_test(x, y)))
    }

    /// Redraw canvas `id` with the point under `(x, y)` in its hover style.
    pub fn hover(&mut self, id: &str, x: f32, y: f32) -> Result<Option<PointHit>> {
        let base = self.options;
        let shaper = base.draw_labels.then_some(&self.shaper);
        let canvas = Self::canvas_mut(&mut self.canvases, id)?;
        let opts = RenderOptions { width: canvas.width, height: canvas.height, ..base };

        let hit = canvas
            .charts
            .iter()
            .enumerate()
            .rev()
            .find_map(|(ci, c)| c.hit_test(x, y).map(|h| (ci, h)));

        let sk = canvas.surface.canvas();
        sk.clear(opts.theme.background);
        for (ci, chart) in canvas.charts.iter().enumerate() {
            let hover = hit.as_ref().filter(|(hc, _)| *hc == ci).map(|(_, h)| h);
            chart.draw(sk, &opts, shaper, hover);
        }
        Ok(hit.map(|(_, h)| h))
    }

    /// Encode canvas `id` as PNG bytes.
    pub fn to_png_bytes(&mut self, id: &str) -> Result<Vec<u8>> {
        let canvas = Self::canvas_mut(&mut self.canvases, id)?;
        let image = canvas.surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or(ChartError::Encode)?;
        Ok(data.as_bytes().to_vec())
    }

    /// Write canvas `id` as a PNG file, creating parent directories.
    pub fn write_png(&mut self, id: &str, path: impl AsRef<Path>) -> Result<()> {
        let bytes = self.to_png_bytes(id)?;
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, bytes)?;
        Ok(())
    }

    /// Canvas pixels as unpremultiplied RGBA8: `(pixels, width, height, stride)`.
    pub fn to_rgba8(&mut self, id: &str) -> Result<(Vec<u8>, i32, i32, usize)> {
        let canvas = Self::canvas_mut(&mut self.canvases, id)?;
        let (w, h) = (canvas.width, canvas.height);
        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let stride = w as usize * 4;
        let mut pixels = vec![0u8; stride * h as usize];
        if !canvas.surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            return Err(ChartError::ReadPixels(id.to_string()));
        }
        Ok((pixels, w, h, stride))
    }
}
