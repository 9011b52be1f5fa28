use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("size mismatch: expected {expected} elements, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },
    #[error("image dimensions {width}x{height} overflow usize")]
    DimensionOverflow { width: usize, height: usize },
}
