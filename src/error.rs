//! Error type shared by the chunker, the image containers and the composer.
use thiserror::Error;

/// Failures reported by layout operations.
///
/// Every error is returned before any output is produced; there is no partial
/// result.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument { name: &'static str, reason: String },
    #[error("expected a 3-axis (count, height, width) array, got {found} axes")]
    Rank { found: usize },
    #[error("image shape mismatch: expected {expected:?}, found {found:?}")]
    Shape {
        expected: (usize, usize),
        found: (usize, usize),
    },
    #[error("buffer holds {found} elements but the shape requires {expected}")]
    DataLength { expected: usize, found: usize },
    #[error("shape {shape:?} holds more elements than fit in usize")]
    ShapeOverflow { shape: Vec<usize> },
    #[error("failed to parse config: {0}")]
    Config(String),
}

impl LayoutError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        LayoutError::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }

    pub(crate) fn overflow(shape: &[usize]) -> Self {
        LayoutError::ShapeOverflow {
            shape: shape.to_vec(),
        }
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, LayoutError::InvalidArgument { .. })
    }

    /// True for every rank, per-image shape, buffer length or size overflow failure.
    pub fn is_shape_error(&self) -> bool {
        matches!(
            self,
            LayoutError::Rank { .. }
                | LayoutError::Shape { .. }
                | LayoutError::DataLength { .. }
                | LayoutError::ShapeOverflow { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, LayoutError>;
