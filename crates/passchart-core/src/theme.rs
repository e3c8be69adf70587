// File: crates/passchart-core/src/theme.rs
// Summary: Light/Dark theming for page background, grid and text colors.

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub grid: skia::Color,
    pub zero_line: skia::Color,
    pub tick_label: skia::Color,
    pub title: skia::Color,
    pub legend_label: skia::Color,
}

impl Theme {
    /// Chart.js look: white page, faint grid, gray text.
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 255, 255, 255),
            grid: skia::Color::from_argb(26, 0, 0, 0),
            zero_line: skia::Color::from_argb(64, 0, 0, 0),
            tick_label: skia::Color::from_argb(255, 0x66, 0x66, 0x66),
            title: skia::Color::from_argb(255, 0x66, 0x66, 0x66),
            legend_label: skia::Color::from_argb(255, 0x66, 0x66, 0x66),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            grid: skia::Color::from_argb(255, 40, 40, 45),
            zero_line: skia::Color::from_argb(255, 90, 90, 100),
            tick_label: skia::Color::from_argb(255, 150, 150, 160),
            title: skia::Color::from_argb(255, 235, 235, 245),
            legend_label: skia::Color::from_argb(255, 210, 210, 220),
        }
    }

    pub fn high_contrast_dark() -> Self {
        Self {
            name: "high-contrast-dark",
            background: skia::Color::from_argb(255, 0x00, 0x00, 0x00),
            grid: skia::Color::from_argb(255, 0x22, 0x22, 0x22),
            zero_line: skia::Color::from_argb(255, 0x88, 0x88, 0x88),
            tick_label: skia::Color::from_argb(255, 0xcc, 0xcc, 0xcc),
            title: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
            legend_label: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Self::light() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark(), Theme::high_contrast_dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::light()
}
