use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid code point {0:?}")]
    InvalidCodePoint(String),

    #[error("failed to read preferences: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid preferences: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to write preferences: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("invalid entry record: {0}")]
    Json(#[from] serde_json::Error),
}
