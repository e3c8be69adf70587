// File: crates/passchart-core/src/scale.rs
// Summary: Category (X) and Value (Y) scale transforms for line charts.

use crate::grid::{is_major_log_tick, linear_ticks, log_ticks};
use crate::options::ScaleKind;

/// Label index on X.
pub type Logical = f64;
/// Data value on Y.
pub type Value = f64;

const LOG_FLOOR: f64 = 1e-12;

/// Horizontal category scale: label `i` sits at `left + i * width / (n - 1)`.
#[derive(Clone, Copy, Debug)]
pub struct CategoryScale {
    pub left_px: f32,
    pub right_px: f32,
    pub count: usize,
}

impl CategoryScale {
    pub fn new(left_px: f32, right_px: f32, count: usize) -> Self {
        Self { left_px, right_px, count }
    }

    #[inline]
    fn step(&self) -> f32 {
        let slots = self.count.saturating_sub(1).max(1) as f32;
        (self.right_px - self.left_px) / slots
    }

    /// Pixel X for an index; indices past the label count continue past the right edge.
    #[inline]
    pub fn to_px(&self, index: Logical) -> f32 {
        self.left_px + index as f32 * self.step()
    }

    /// Nearest label index for a pixel X.
    pub fn from_px(&self, px: f32) -> Logical {
        ((px - self.left_px) / self.step()).round().max(0.0) as f64
    }
}

/// Vertical value scale mapping a data range to [top, bottom] pixels.
#[derive(Clone, Debug)]
pub struct ValueScale {
    pub top_px: f32,
    pub bottom_px: f32,
    pub vmin: Value,
    pub vmax: Value,
    pub kind: ScaleKind,
    pub ticks: Vec<Value>,
    // cached log endpoints when kind is Log10
    log_min: f64,
    log_max: f64,
}

impl ValueScale {
    /// Fit a scale to `values`. `fixed_max` pins the top of the axis.
    pub fn fit(
        kind: ScaleKind,
        top_px: f32,
        bottom_px: f32,
        values: impl IntoIterator<Item = Value>,
        fixed_max: Option<Value>,
    ) -> Self {
        let max_ticks = (((bottom_px - top_px) / 40.0).ceil() as usize).clamp(2, 11);
        let (min, max) = match kind {
            ScaleKind::Linear => data_range(values.into_iter().filter(|v| v.is_finite())),
            ScaleKind::Log10 => data_range(values.into_iter().filter(|v| v.is_finite() && *v > 0.0)),
        };
        match kind {
            ScaleKind::Linear => Self::new_linear(top_px, bottom_px, min, max, fixed_max, max_ticks),
            ScaleKind::Log10 => Self::new_log10(top_px, bottom_px, min, max, fixed_max),
        }
    }

    fn new_linear(
        top_px: f32,
        bottom_px: f32,
        min: Option<f64>,
        max: Option<f64>,
        fixed_max: Option<f64>,
        max_ticks: usize,
    ) -> Self {
        let (mut vmin, mut vmax) = match (min, max) {
            (Some(a), Some(b)) => (a, b),
            _ => (0.0, 1.0),
        };
        if let Some(m) = fixed_max { vmax = m; }
        if vmin >= vmax {
            // flat data: open a unit band around it, like Chart.js does
            if fixed_max.is_some() { vmin = vmax - 1.0; } else { vmin -= 1.0; vmax += 1.0; }
        }
        let ticks = linear_ticks(vmin, vmax, max_ticks, fixed_max);
        let lo = ticks.first().copied().unwrap_or(vmin).min(vmin);
        let hi = ticks.last().copied().unwrap_or(vmax);
        Self { top_px, bottom_px, vmin: lo, vmax: hi, kind: ScaleKind::Linear, ticks, log_min: 0.0, log_max: 0.0 }
    }

    fn new_log10(top_px: f32, bottom_px: f32, min: Option<f64>, max: Option<f64>, fixed_max: Option<f64>) -> Self {
        let (dmin, dmax) = match (min, max) {
            (Some(a), Some(b)) => (a, b),
            _ => (1.0, 10.0),
        };
        let mut vmin = 10f64.powf(dmin.log10().floor());
        let mut vmax = match fixed_max {
            Some(m) if m > LOG_FLOOR => m,
            _ => 10f64.powf(dmax.log10().ceil()),
        };
        if vmax <= vmin {
            if fixed_max.is_some() { vmin = vmax / 10.0; } else { vmax = vmin * 10.0; }
        }
        let ticks = log_ticks(vmin, vmax);
        Self {
            top_px,
            bottom_px,
            vmin,
            vmax,
            kind: ScaleKind::Log10,
            ticks,
            log_min: vmin.log10(),
            log_max: vmax.log10(),
        }
    }

    /// Pixel Y for a value. Non-positive values on a log scale map to `None`.
    #[inline]
    pub fn to_px(&self, y: Value) -> Option<f32> {
        match self.kind {
            ScaleKind::Log10 => {
                if y <= 0.0 { return None; }
                let span = (self.log_max - self.log_min).max(LOG_FLOOR);
                Some(self.bottom_px - ((y.log10() - self.log_min) / span) as f32 * (self.bottom_px - self.top_px))
            }
            ScaleKind::Linear => {
                let span = (self.vmax - self.vmin).max(LOG_FLOOR);
                Some(self.bottom_px - ((y - self.vmin) / span) as f32 * (self.bottom_px - self.top_px))
            }
        }
    }

    /// Ticks that get a label. Log scales label 1/2/5 multiples and the endpoints.
    pub fn labeled_ticks(&self) -> Vec<Value> {
        match self.kind {
            ScaleKind::Linear => self.ticks.clone(),
            ScaleKind::Log10 => {
                let last = self.ticks.len().saturating_sub(1);
                self.ticks
                    .iter()
                    .enumerate()
                    .filter(|&(i, &t)| i == 0 || i == last || is_major_log_tick(t))
                    .map(|(_, &t)| t)
                    .collect()
            }
        }
    }
}

fn data_range(values: impl Iterator<Item = f64>) -> (Option<f64>, Option<f64>) {
    values.fold((None, None), |(lo, hi), v| {
        (Some(lo.map_or(v, |l: f64| l.min(v))), Some(hi.map_or(v, |h: f64| h.max(v))))
    })
}
