//! Pack hashing.

use std::sync::{Arc, OnceLock};
use std::time::Duration;

use async_trait::async_trait;
use futures::StreamExt;
use serde::{Deserialize, Serialize};
use sha1::{Digest, Sha1};
use tokio::io::AsyncReadExt;
use tokio::runtime::{Handle, Runtime};
use tracing::trace;
use url::Url;

use crate::{HashError, ResourcePackError};

const FILE_CHUNK: usize = 64 * 1024;

/// Computes the hash of the pack behind a URI.
#[async_trait]
pub trait HashSource: Send + Sync {
    async fn compute(&self, uri: &Url) -> Result<String, HashError>;
}

/// Settings for [`Sha1HashSource`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HashSettings {
    pub user_agent: String,
    /// Whole-request timeout for remote packs.
    pub timeout_secs: u64,
}

impl Default for HashSettings {
    fn default() -> Self {
        Self {
            user_agent: concat!("prism-pack/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout_secs: 30,
        }
    }
}

/// Lowercase hex SHA-1 of `http`, `https` or `file` URIs.
///
/// Bodies are streamed through the hasher, never buffered whole.
#[derive(Debug, Clone)]
pub struct Sha1HashSource {
    client: reqwest::Client,
}

impl Sha1HashSource {
    pub fn new(settings: &HashSettings) -> Result<Self, HashError> {
        let client = reqwest::Client::builder()
            .user_agent(settings.user_agent.clone())
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()?;
        Ok(Self { client })
    }

    async fn hash_remote(&self, uri: &Url) -> Result<String, HashError> {
        let response = self.client.get(uri.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(HashError::Status(status.as_u16()));
        }

        let mut hasher = Sha1::new();
        let mut body = response.bytes_stream();
        while let Some(chunk) = body.next().await {
            let chunk = chunk?;
            trace!("Hashing {} bytes of {}", chunk.len(), uri);
            hasher.update(&chunk);
        }
        Ok(format!("{:x}", hasher.finalize()))
    }

    async fn hash_file(&self, uri: &Url) -> Result<String, HashError> {
        let path = uri
            .to_file_path()
            .map_err(|()| HashError::InvalidPath(uri.to_string()))?;
        let mut file = tokio::fs::File::open(&path).await?;

        let mut hasher = Sha1::new();
        let mut buffer = vec![0u8; FILE_CHUNK];
        loop {
            let read = file.read(&mut buffer).await?;
            if read == 0 {
                break;
            }
            hasher.update(&buffer[..read]);
        }
        Ok(format!("{:x}", hasher.finalize()))
    }
}

#[async_trait]
impl HashSource for Sha1HashSource {
    async fn compute(&self, uri: &Url) -> Result<String, HashError> {
        match uri.scheme() {
            "http" | "https" => self.hash_remote(uri).await,
            "file" => self.hash_file(uri).await,
            other => Err(HashError::UnsupportedScheme(other.to_string())),
        }
    }
}

/// Where hash tasks run and what computes the hash.
#[derive(Clone)]
pub struct HashContext {
    handle: Handle,
    source: Arc<dyn HashSource>,
}

struct SharedPool {
    // Owns the threads behind `context.handle`.
    _runtime: Runtime,
    context: HashContext,
}

// Nothing fallible may follow the runtime build: dropping a runtime from
// async code panics.
fn start_pool(source: impl FnOnce() -> Result<Arc<dyn HashSource>, String>) -> Result<SharedPool, String> {
    let source = source()?;
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .thread_name("prism-pack-hash")
        .enable_all()
        .build()
        .map_err(|e| format!("failed to start runtime: {}", e))?;
    let context = HashContext::new(runtime.handle().clone(), source);
    Ok(SharedPool {
        _runtime: runtime,
        context,
    })
}

impl HashContext {
    pub fn new(handle: Handle, source: Arc<dyn HashSource>) -> Self {
        Self { handle, source }
    }

    /// The process-wide context: a multi-threaded runtime started on first
    /// use and a [`Sha1HashSource`] with default settings.
    pub fn shared() -> Result<HashContext, ResourcePackError> {
        static SHARED: OnceLock<Result<SharedPool, String>> = OnceLock::new();

        SHARED
            .get_or_init(|| {
                start_pool(|| {
                    let source = Sha1HashSource::new(&HashSettings::default()).map_err(|e| e.to_string())?;
                    Ok(Arc::new(source) as Arc<dyn HashSource>)
                })
            })
            .as_ref()
            .map(|pool| pool.context.clone())
            .map_err(|e| ResourcePackError::Runtime(e.clone()))
    }

    pub fn handle(&self) -> &Handle {
        &self.handle
    }

    pub fn source(&self) -> &Arc<dyn HashSource> {
        &self.source
    }
}

impl std::fmt::Debug for HashContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HashContext").field("handle", &self.handle).finish_non_exhaustive()
    }
}
