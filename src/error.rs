use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("input cannot be empty")]
    EmptyInput,

    #[error("invalid url: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("invalid {platform} username: {username}")]
    InvalidUsername { platform: String, username: String },

    #[error("unknown platform: {0}")]
    UnknownPlatform(String),

    #[error("regex error: {0}")]
    Regex(#[from] regex::Error),

    #[error("invalid catalog: {0}")]
    Catalog(String),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("join error: {0}")]
    Join(#[from] tokio::task::JoinError),

    #[error("other: {0}")]
    Other(String),
}

impl Error {
    #[inline]
    pub fn other(text: impl Into<String>) -> Self {
        Self::Other(text.into())
    }

    #[inline]
    pub fn catalog(text: impl Into<String>) -> Self {
        Self::Catalog(text.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
