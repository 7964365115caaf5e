use thiserror::Error;

pub type Result<T> = std::result::Result<T, SimulatorError>;

/// Failures at the transport boundary. The session itself never fails.
#[derive(Debug, Error)]
pub enum SimulatorError {
    #[error("empty message")]
    Empty,

    #[error("malformed message: {0}")]
    Json(#[from] serde_json::Error),

    #[error("field `{field}` is not finite ({value})")]
    NonFinite { field: &'static str, value: f64 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SimulatorError {
    pub fn non_finite(field: &'static str, value: f64) -> Self {
        Self::NonFinite { field, value }
    }
}
