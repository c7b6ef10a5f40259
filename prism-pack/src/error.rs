use thiserror::Error;

#[derive(Debug, Error)]
pub enum ResourcePackError {
    #[error("resource pack request has no uri")]
    MissingUri,

    #[error("failed to hash {uri}: {source}")]
    Hash { uri: String, source: HashError },

    #[error("hash task failed: {0}")]
    Task(#[from] tokio::task::JoinError),

    #[error("hash runtime unavailable: {0}")]
    Runtime(String),
}

#[derive(Debug, Error)]
pub enum HashError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("server responded with status {0}")]
    Status(u16),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("unsupported uri scheme {0:?}")]
    UnsupportedScheme(String),

    #[error("uri does not name a local file: {0}")]
    InvalidPath(String),
}
