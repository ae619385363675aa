use axum::http::StatusCode;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid item: '{0}'. Only 'tshirts' and 'pants' are supported.")]
    InvalidItem(String),

    #[error(
        "Cannot reduce '{item}' stock below zero. Current: {current}, Attempted change: {change}"
    )]
    InsufficientStock {
        item: String,
        current: u32,
        change: i64,
    },

    #[error("Change of {change} would overflow the stock count for '{item}'")]
    CountOverflow { item: String, change: i64 },

    #[error("Unsupported query: {0}")]
    UnsupportedQuery(String),

    #[error("LLM error: {0}")]
    Llm(String),

    #[error("LLM API returned HTTP {status}: {body}")]
    LlmStatus { status: u16, body: String },

    #[error("Inventory service returned an error: {message} (HTTP {status})")]
    Inventory { status: u16, message: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Address parse error: {0}")]
    AddrParse(#[from] std::net::AddrParseError),

    #[error("OpenAI error: {0}")]
    OpenAi(#[from] async_openai::error::OpenAIError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn llm(msg: impl Into<String>) -> Self {
        Self::Llm(msg.into())
    }

    pub fn unsupported(msg: impl Into<String>) -> Self {
        Self::UnsupportedQuery(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// HTTP status a handler should answer with when this error reaches the
    /// request boundary.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidItem(_)
            | Self::InsufficientStock { .. }
            | Self::CountOverflow { .. }
            | Self::UnsupportedQuery(_) => StatusCode::BAD_REQUEST,
            Self::Inventory { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            Self::Llm(_) | Self::LlmStatus { .. } | Self::OpenAi(_) => StatusCode::BAD_GATEWAY,
            Self::Network(_) => StatusCode::SERVICE_UNAVAILABLE,
            Self::Config(_)
            | Self::Serialization(_)
            | Self::Yaml(_)
            | Self::Io(_)
            | Self::AddrParse(_)
            | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
