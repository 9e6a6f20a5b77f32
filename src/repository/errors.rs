use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Snapshot not found: {0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(String),

    #[error("Decoding error: {0}")]
    Decoding(String),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

impl From<std::io::Error> for RepositoryError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => RepositoryError::NotFound(err.to_string()),
            _ => RepositoryError::Io(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for RepositoryError {
    fn from(err: serde_json::Error) -> Self {
        let location = format!("line {}, column {}", err.line(), err.column());
        match err.classify() {
            serde_json::error::Category::Io => RepositoryError::Io(err.to_string()),
            serde_json::error::Category::Eof => {
                RepositoryError::Decoding(format!("Unexpected end of snapshot at {location}"))
            }
            serde_json::error::Category::Syntax => {
                RepositoryError::Decoding(format!("Malformed JSON at {location}"))
            }
            serde_json::error::Category::Data => RepositoryError::Decoding(format!(
                "Record does not match the expected shape: {err}"
            )),
        }
    }
}
