use thiserror::Error;

/// Reasons a raw selection is refused at the shell boundary.
#[derive(Debug, Error)]
pub enum SelectionError {
    #[error("carat {0} outside the supported range {min}..={max}", min = crate::CARAT_MIN, max = crate::CARAT_MAX)]
    CaratOutOfRange(f64),
    #[error("unknown {field}: {value:?}")]
    Unknown { field: &'static str, value: String },
    #[error("invalid selection JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum PricingError {
    #[error("invalid price tables JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("price table entry {key} is negative ({value})")]
    Negative { key: String, value: f64 },
}
