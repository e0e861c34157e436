use thiserror::Error;

#[derive(Error, Debug)]
pub enum CacheError {
    #[error("Artifact not found in cache: {0}")]
    NotFound(String),

    #[error("Remote fetch failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Remote returned {status} for {url}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("Malformed XML document: {0}")]
    Xml(#[from] quick_xml::DeError),

    #[error("Failed to encode XML document: {0}")]
    XmlWrite(#[from] quick_xml::SeError),

    #[error("Cache I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to persist cache artifact: {0}")]
    Persist(#[from] tempfile::PersistError),

    #[error("Configuration error: {field}: {reason}")]
    Config { field: String, reason: String },
}

pub type Result<T> = std::result::Result<T, CacheError>;
