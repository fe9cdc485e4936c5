use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PhylloError {
    #[error("knot vector length mismatch: expected {expected}, got {actual}")]
    KnotLengthMismatch { expected: usize, actual: usize },
}

pub type Result<T> = std::result::Result<T, PhylloError>;
