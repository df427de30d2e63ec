use std::fmt;

use taiji_engine::canvas::CanvasError;

/// Errors raised when building or resizing a sketch.
///
/// Per-frame drawing never fails; invalid input is rejected up front.
#[derive(Debug, Clone, PartialEq)]
pub enum SceneError {
    /// Viewport with a zero, negative or non-finite dimension.
    EmptySurface { width: f32, height: f32 },
    /// A configuration value outside its valid range.
    InvalidConfig(String),
}

impl fmt::Display for SceneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SceneError::EmptySurface { width, height } => {
                write!(f, "surface has no drawable area ({width}x{height})")
            }
            SceneError::InvalidConfig(msg) => write!(f, "invalid configuration: {msg}"),
        }
    }
}

impl std::error::Error for SceneError {}

impl From<CanvasError> for SceneError {
    fn from(e: CanvasError) -> Self {
        match e {
            CanvasError::EmptySurface { width, height } => SceneError::EmptySurface {
                width: width as f32,
                height: height as f32,
            },
            too_large @ CanvasError::TooLarge { .. } => SceneError::InvalidConfig(too_large.to_string()),
        }
    }
}
