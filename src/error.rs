use thiserror::Error;

pub type Result<T> = std::result::Result<T, FilterError>;

#[derive(Error, Debug, PartialEq)]
pub enum FilterError {
    #[error("Capacity must be greater than 0")]
    ZeroCapacity,

    #[error("False positive rate must be between 0 and 1, got {rate}")]
    InvalidFalsePositiveRate { rate: f64 },

    #[error("Unsupported expiry unit '{0}', use 'h' or 'd'")]
    UnsupportedUnit(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Index out of bounds: {index} >= {capacity}")]
    IndexOutOfBounds { index: usize, capacity: usize },
}

// Builder validation errors funnel into InvalidConfig
impl From<String> for FilterError {
    fn from(msg: String) -> Self {
        FilterError::InvalidConfig(msg)
    }
}
