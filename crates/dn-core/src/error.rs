use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("size mismatch: expected {expected}, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },
    #[error("threshold must be greater than zero")]
    ZeroThreshold,
    #[error("invalid bounding box ({x1}, {y1}) -> ({x2}, {y2})")]
    InvalidBoundingBox {
        x1: usize,
        y1: usize,
        x2: usize,
        y2: usize,
    },
    #[error("invalid scaling factor for box ({x1}, {y1}) -> ({x2}, {y2})")]
    InvalidScale {
        x1: usize,
        y1: usize,
        x2: usize,
        y2: usize,
    },
    #[error("grid is not binary: pixel {index} has value {value}")]
    NotDiscrete { index: usize, value: u8 },
    #[error("grid has no edge activity")]
    EmptyActivity,
    #[error("label {label} is outside 0..{classes}")]
    InvalidLabel { label: u8, classes: usize },
    #[error("label {value} does not fit in a class index")]
    LabelOverflow { value: u16 },
}
