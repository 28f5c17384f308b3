use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum BlogError {
    #[error("Config file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    #[error("Invalid config: {message}")]
    ConfigInvalid { message: String },

    #[error("Request to {url} failed: {message}")]
    Http { url: String, message: String },

    #[error("Request to {url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("Unexpected response body from {url}: {message}")]
    Decode { url: String, message: String },

    #[error("Invalid publish date {value:?}: {source}")]
    Date {
        value: String,
        source: chrono::ParseError,
    },

    #[error("Sitemap error: {0}")]
    Sitemap(String),

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, BlogError>;
