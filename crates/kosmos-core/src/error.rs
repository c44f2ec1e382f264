use thiserror::Error;

/// Top-level error type for the Kosmos system.
///
/// Each variant wraps a subsystem-specific error. Subsystem crates define
/// their own error types and convert into `KosmosError` at the crate
/// boundary so that the `?` operator works seamlessly across crates.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum KosmosError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("Chat error: {0}")]
    Chat(String),

    #[error("Answer service error: {0}")]
    Answer(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<toml::de::Error> for KosmosError {
    fn from(err: toml::de::Error) -> Self {
        KosmosError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for KosmosError {
    fn from(err: toml::ser::Error) -> Self {
        KosmosError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for KosmosError {
    fn from(err: serde_json::Error) -> Self {
        KosmosError::Serialization(err.to_string())
    }
}

/// A specialized `Result` type for Kosmos operations.
pub type Result<T> = std::result::Result<T, KosmosError>;
