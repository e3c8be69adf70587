// File: crates/passchart-core/src/error.rs
// Summary: Library error type for page, canvas and encoding failures.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    /// No canvas with this id exists on the page.
    #[error("no canvas with id '{0}'")]
    CanvasNotFound(String),
    #[error("canvas '{0}' already exists")]
    DuplicateCanvas(String),
    #[error("failed to create {width}x{height} raster surface")]
    Surface { width: i32, height: i32 },
    #[error("encode PNG failed")]
    Encode,
    #[error("failed to read pixels from canvas '{0}'")]
    ReadPixels(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T, E = ChartError> = std::result::Result<T, E>;
