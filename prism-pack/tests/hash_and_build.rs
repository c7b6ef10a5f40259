//! Hash-then-build through injected and default hash sources.

use std::io::Write;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use anyhow::Result;
use async_trait::async_trait;
use prism_api::Component;
use prism_pack::{
    HashContext, HashError, HashSource, ResourcePackError, ResourcePackRequest, Url,
};
use tokio::runtime::Handle;

/// Answers with a fixed hash and counts calls.
struct FixedHash {
    hash: &'static str,
    calls: AtomicUsize,
}

#[async_trait]
impl HashSource for FixedHash {
    async fn compute(&self, _uri: &Url) -> Result<String, HashError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.hash.to_string())
    }
}

struct Unreachable;

#[async_trait]
impl HashSource for Unreachable {
    async fn compute(&self, _uri: &Url) -> Result<String, HashError> {
        Err(HashError::Status(404))
    }
}

fn context(source: impl HashSource + 'static) -> HashContext {
    HashContext::new(Handle::current(), Arc::new(source))
}

#[tokio::test]
async fn test_injected_source_sets_hash() -> Result<()> {
    let source = Arc::new(FixedHash {
        hash: "deadbeef",
        calls: AtomicUsize::new(0),
    });
    let context = HashContext::new(Handle::current(), source.clone());
    let uri = Url::parse("https://packs.example.org/pack.zip")?;

    let request = ResourcePackRequest::builder()
        .uri(uri.clone())
        .required(true)
        .prompt(Component::text("Install the pack"))
        .compute_hash_and_build_with(&context)
        .await?;

    assert_eq!(request.hash(), "deadbeef");
    assert_eq!(request.uri(), &uri);
    assert!(request.required());
    assert_eq!(source.calls.load(Ordering::SeqCst), 1);

    // Same URI, same derived id as the synchronous path
    let sync = ResourcePackRequest::builder().uri(uri).build()?;
    assert_eq!(request.id(), sync.id());
    Ok(())
}

#[tokio::test]
async fn test_hash_failure_is_delivered_through_future() -> Result<()> {
    let result = ResourcePackRequest::builder()
        .uri(Url::parse("https://packs.example.org/missing.zip")?)
        .compute_hash_and_build_with(&context(Unreachable))
        .await;

    match result {
        Err(ResourcePackError::Hash { uri, source }) => {
            assert_eq!(uri, "https://packs.example.org/missing.zip");
            assert!(matches!(source, HashError::Status(404)));
        }
        other => panic!("expected hash error, got {:?}", other),
    }
    Ok(())
}

#[tokio::test]
async fn test_missing_uri_is_delivered_through_future() {
    let source = FixedHash {
        hash: "unused",
        calls: AtomicUsize::new(0),
    };
    let result = ResourcePackRequest::builder()
        .hash("ignored")
        .compute_hash_and_build_with(&context(source))
        .await;
    assert!(matches!(result, Err(ResourcePackError::MissingUri)));
}

#[tokio::test]
async fn test_shared_context_hashes_local_file() -> Result<()> {
    let mut file = tempfile::NamedTempFile::new()?;
    file.write_all(b"The quick brown fox jumps over the lazy dog")?;
    let uri = Url::from_file_path(file.path()).map_err(|()| anyhow::anyhow!("not absolute"))?;

    let request = ResourcePackRequest::builder()
        .uri(uri)
        .compute_hash_and_build()
        .await?;

    assert_eq!(request.hash(), "2fd4e1c67a2d28fced849ee1bb76e7391b93eb12");
    Ok(())
}
