use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SvgError {
    #[error("output buffer has zero capacity")]
    EmptyBuffer,
    #[error("svg document does not fit in {capacity} bytes")]
    Overflow { capacity: usize },
}
