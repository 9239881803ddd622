use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("Store error: {0}")]
    Store(String),

    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(String),

    /// A label that was on screen no longer maps to a row.
    #[error("Could not resolve {kind} \"{label}\" to an id")]
    Unresolved { kind: &'static str, label: String },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, TrackerError>;
