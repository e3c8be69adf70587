// File: crates/passchart-core/src/types.rs
// Summary: Shared layout constants (canvas size, paddings, font sizes, legend box).

/// Default canvas width in pixels.
pub const WIDTH: i32 = 800;
/// Default canvas height in pixels.
pub const HEIGHT: i32 = 400;

/// Font size used for title, legend and tick labels.
pub const FONT_SIZE: f32 = 12.0;
/// Padding above and below the title text.
pub const TITLE_PADDING: f32 = 10.0;
/// Legend color box width; height equals the font size.
pub const LEGEND_BOX_WIDTH: f32 = 40.0;
/// Padding between legend items and around the legend band.
pub const LEGEND_PADDING: f32 = 10.0;
/// Gap between tick labels and the plot area.
pub const TICK_PADDING: f32 = 8.0;
/// Stroke width of a dataset line when none is configured.
pub const DEFAULT_BORDER_WIDTH: f32 = 3.0;

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(10, 10, 10, 10)
    }
}
