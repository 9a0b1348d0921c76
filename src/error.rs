use thiserror::Error;

/// Errors surfaced by the estimator library
#[derive(Debug, Error)]
pub enum EstimatorError {
    #[error("Invalid physical constants: {0}")]
    InvalidConstants(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<validator::ValidationErrors> for EstimatorError {
    fn from(errors: validator::ValidationErrors) -> Self {
        EstimatorError::InvalidConstants(errors.to_string())
    }
}

impl From<figment::Error> for EstimatorError {
    fn from(error: figment::Error) -> Self {
        EstimatorError::Config(error.to_string())
    }
}

impl From<serde_json::Error> for EstimatorError {
    fn from(error: serde_json::Error) -> Self {
        EstimatorError::Serialization(error.to_string())
    }
}

pub type Result<T> = std::result::Result<T, EstimatorError>;
