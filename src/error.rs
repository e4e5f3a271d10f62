// MIT/Apache2 License

use crate::Point;
use std::fmt;

/// Sum error type for segclip operations.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Error {
    /// A pointer event carried a coordinate that is NaN or infinite.
    NonFinitePoint { x: f32, y: f32 },
    /// The pointer was released in window mode without a press to start the window.
    NoGestureInProgress,
}

impl Error {
    #[inline]
    pub(crate) fn non_finite(pt: Point) -> Self {
        Self::NonFinitePoint { x: pt.x, y: pt.y }
    }
}

impl std::error::Error for Error {}

impl fmt::Display for Error {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFinitePoint { x, y } => {
                write!(f, "Pointer position ({}, {}) is not a finite point", x, y)
            }
            Self::NoGestureInProgress => {
                f.write_str("Pointer was released without a clipping window being drawn")
            }
        }
    }
}

/// Convenience result type.
pub type Result<T = ()> = std::result::Result<T, Error>;
