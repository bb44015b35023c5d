use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid chart dimensions: width={width}, height={height}")]
    InvalidDimensions { width: f64, height: f64 },

    #[error("insufficient data: {0}")]
    InsufficientData(String),

    #[error("invalid date: `{input}`")]
    InvalidDate { input: String },

    #[error("series length mismatch: additions={additions}, deletions={deletions}")]
    SeriesLengthMismatch { additions: usize, deletions: usize },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
