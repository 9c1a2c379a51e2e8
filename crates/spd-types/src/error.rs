use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpdError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid measurement profile: {message}")]
    InvalidProfile { message: String },

    #[error("Singular linear system: {0}")]
    SingularSystem(String),

    #[error("Abscissa must increase strictly (violated at index {index})")]
    NonMonotonicAbscissa { index: usize },

    #[error("Figure rendering failed: {0}")]
    Render(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type SpdResult<T> = Result<T, SpdError>;
