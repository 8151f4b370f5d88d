use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid exam condition {spec:?}: {message}")]
    InvalidExam { spec: String, message: String },

    #[error("Invalid hit event on line {line}: {message}")]
    InvalidEvent { line: usize, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn invalid_exam(spec: &str, message: impl Into<String>) -> Self {
        Error::InvalidExam {
            spec: spec.to_string(),
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
