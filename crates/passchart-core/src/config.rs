// File: crates/passchart-core/src/config.rs
// Summary: JSON configuration for page defaults and canvas rendering.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::chart::RenderOptions;
use crate::defaults::GlobalDefaults;
use crate::theme;
use crate::types::{HEIGHT, WIDTH};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub defaults: GlobalDefaults,
    pub page: PageConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PageConfig {
    pub width: i32,
    pub height: i32,
    pub theme: String,
    pub draw_labels: bool,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self { width: WIDTH, height: HEIGHT, theme: "light".to_string(), draw_labels: true }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        serde_json::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            width: self.page.width,
            height: self.page.height,
            theme: theme::find(&self.page.theme),
            draw_labels: self.page.draw_labels,
            ..RenderOptions::default()
        }
    }
}
