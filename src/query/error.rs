use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum QueryError {
    #[error("Network request failed for {0}")]
    NetworkRequest(String, #[source] reqwest::Error),

    #[error("Query to {url} failed with status {status}: {}", .messages.join("; "))]
    Service {
        url: String,
        status: reqwest::StatusCode,
        messages: Vec<String>,
    },

    #[error("Failed to decode response from {0}")]
    Decode(String, #[source] reqwest::Error),

    #[error("Failed to create cache directory '{0}'")]
    CacheDirCreation(PathBuf, #[source] std::io::Error),

    #[error("Failed to read cache file '{0}'")]
    CacheRead(PathBuf, #[source] std::io::Error),

    #[error("Failed to write cache file '{0}'")]
    CacheWrite(PathBuf, #[source] std::io::Error),

    #[error("Failed to decode cache data from '{0}'")]
    CacheDecode(PathBuf, #[source] Box<bincode::error::DecodeError>),

    #[error("Failed to encode cache data")]
    CacheEncode(#[source] Box<bincode::error::EncodeError>),

    #[error("Failed to delete cache '{0}'")]
    CacheDeletion(PathBuf, #[source] std::io::Error),

    #[error("Background task failed to complete")]
    TaskJoin(#[from] tokio::task::JoinError),
}
