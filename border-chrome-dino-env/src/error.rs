//! Errors of the Chrome dino environment.
use thiserror::Error;

/// Errors of the Chrome dino environment.
#[derive(Error, Debug, PartialEq)]
pub enum DinoEnvError {
    /// The action is neither no-op (0) nor jump (1).
    #[error("Invalid action: {0}")]
    InvalidAction(u8),

    /// The canvas snapshot is not a base64 encoded image.
    #[error("Failed to decode canvas: {0}")]
    CanvasDecode(String),

    /// A frame does not have the size of the frame buffer.
    #[error("Frame shape mismatch: expected {expected:?}, got {actual:?}")]
    FrameShape {
        /// Expected `(width, height)`.
        expected: (u32, u32),

        /// Actual `(width, height)`.
        actual: (u32, u32),
    },

    /// A request to the WebDriver endpoint failed.
    #[error("WebDriver error: {0}")]
    WebDriver(String),

    /// The parameter name is not a dotted identifier like `config.ACCELERATION`.
    #[error("Invalid game parameter: {0}")]
    InvalidParameter(String),
}
