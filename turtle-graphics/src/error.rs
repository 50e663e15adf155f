//! Error types for turtle-graphics.

use thiserror::Error;

/// Result type alias using TurtleError.
pub type TurtleResult<T> = Result<T, TurtleError>;

/// Errors that can occur while building canvases or replaying a turtle.
#[derive(Debug, Error)]
pub enum TurtleError {
    /// Invalid raster dimensions (must be positive and within limits).
    #[error("Invalid dimensions: width={width}, height={height}")]
    InvalidDimensions { width: u32, height: u32 },

    /// Coordinate rectangle is inverted or has zero extent on one axis.
    #[error("Invalid extents: min {axis} ({min}) must be less than max {axis} ({max})")]
    InvalidExtents { axis: char, min: f64, max: f64 },

    /// PopPosition executed with nothing on the position stack.
    #[error("Can't pop the turtle's position: empty stack")]
    StackUnderflow,

    /// An instruction failed during replay.
    #[error("Error executing instruction {index}/{total} ({description}): {source}")]
    Replay {
        /// 1-based position of the failing instruction.
        index: usize,
        total: usize,
        description: String,
        #[source]
        source: Box<TurtleError>,
    },

    /// PNG encoding error.
    #[error("PNG encoding error: {0}")]
    PngError(String),
}

impl TurtleError {
    /// True for errors raised while validating canvas construction parameters.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            TurtleError::InvalidDimensions { .. } | TurtleError::InvalidExtents { .. }
        )
    }

    /// The innermost error, looking through any replay wrappers.
    pub fn root_cause(&self) -> &TurtleError {
        match self {
            TurtleError::Replay { source, .. } => source.root_cause(),
            other => other,
        }
    }
}

impl From<png::EncodingError> for TurtleError {
    fn from(err: png::EncodingError) -> Self {
        TurtleError::PngError(err.to_string())
    }
}
