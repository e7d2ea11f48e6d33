/// Core error types for subframe.
use crate::types::RectKind;

/// A specialized Result type for subframe operations.
pub type SubframeResult<T> = Result<T, SubframeError>;

/// Top-level error type shared by the compositor and its loaders.
#[derive(Debug, thiserror::Error)]
pub enum SubframeError {
    #[error("rectangle index {index} out of range (frame has {count} rectangles)")]
    IndexOutOfRange { index: usize, count: usize },

    #[error("rectangle {index} is not a bitmap (kind: {kind})")]
    UnsupportedRectType { index: usize, kind: RectKind },

    #[error("rectangle {index} has invalid geometry: {reason}")]
    InvalidRect { index: usize, reason: String },

    #[error("composed image of {width}x{height} pixels does not fit in memory")]
    ImageTooLarge { width: u32, height: u32 },

    #[error("invalid palette: {0}")]
    InvalidPalette(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl SubframeError {
    /// Create an invalid-geometry error for the rectangle at `index`.
    pub fn invalid_rect(index: usize, reason: impl Into<String>) -> Self {
        SubframeError::InvalidRect {
            index,
            reason: reason.into(),
        }
    }
}
