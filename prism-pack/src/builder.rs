use std::sync::Arc;

use md5::{Digest, Md5};
use prism_api::Component;
use tracing::{debug, warn};
use url::Url;
use uuid::Uuid;

use crate::{HashContext, PendingRequest, ResourcePackError, ResourcePackRequest};

/// Accumulates the fields of a [`ResourcePackRequest`].
#[derive(Debug, Clone, Default)]
pub struct ResourcePackRequestBuilder {
    id: Option<Uuid>,
    uri: Option<Url>,
    hash: Option<String>,
    required: bool,
    prompt: Option<Component>,
}

impl ResourcePackRequestBuilder {
    pub fn id(mut self, id: Uuid) -> Self {
        self.id = Some(id);
        self
    }

    pub fn uri(mut self, uri: Url) -> Self {
        self.uri = Some(uri);
        self
    }

    pub fn hash(mut self, hash: impl Into<String>) -> Self {
        self.hash = Some(hash.into());
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn prompt(mut self, prompt: impl Into<Option<Component>>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Build the request.
    ///
    /// Without an explicit id, the id is derived from the URI so the same
    /// pack always gets the same id. The hash defaults to empty.
    pub fn build(self) -> Result<ResourcePackRequest, ResourcePackError> {
        let uri = self.uri.ok_or(ResourcePackError::MissingUri)?;
        let id = self.id.unwrap_or_else(|| name_based_id(&uri));
        Ok(ResourcePackRequest::new(
            id,
            uri,
            self.hash.unwrap_or_default(),
            self.required,
            self.prompt,
        ))
    }

    /// Hash the pack on the shared runtime, then build.
    pub fn compute_hash_and_build(self) -> PendingRequest {
        match HashContext::shared() {
            Ok(context) => self.compute_hash_and_build_with(&context),
            Err(e) => PendingRequest::ready(Err(e)),
        }
    }

    /// Hash the pack with `context`'s source on `context`'s runtime, then
    /// build.
    ///
    /// Every failure, including a missing URI, is delivered through the
    /// returned future.
    pub fn compute_hash_and_build_with(self, context: &HashContext) -> PendingRequest {
        let Some(uri) = self.uri.clone() else {
            return PendingRequest::ready(Err(ResourcePackError::MissingUri));
        };
        let source = Arc::clone(context.source());

        debug!(%uri, "Computing resource pack hash");
        let task = context.handle().spawn(async move {
            let hash = match source.compute(&uri).await {
                Ok(hash) => hash,
                Err(source) => {
                    warn!(%uri, "Resource pack hash failed: {}", source);
                    return Err(ResourcePackError::Hash {
                        uri: uri.to_string(),
                        source,
                    });
                }
            };
            debug!(%uri, %hash, "Resource pack hash computed");
            self.hash(hash).build()
        });
        PendingRequest::running(task)
    }
}

/// Version 3 style UUID over the raw bytes of the URI, no namespace.
fn name_based_id(uri: &Url) -> Uuid {
    let digest = Md5::digest(uri.as_str().as_bytes());
    let mut bytes = [0u8; 16];
    bytes.copy_from_slice(&digest);
    uuid::Builder::from_md5_bytes(bytes).into_uuid()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pack_url() -> Url {
        Url::parse("https://packs.example.org/pack.zip").unwrap()
    }

    #[test]
    fn test_build_requires_uri() {
        let result = ResourcePackRequestBuilder::default().hash("abc").build();
        assert!(matches!(result, Err(ResourcePackError::MissingUri)));
    }

    #[test]
    fn test_defaults() {
        let request = ResourcePackRequest::builder().uri(pack_url()).build().unwrap();
        assert_eq!(request.hash(), "");
        assert!(!request.required());
        assert!(request.prompt().is_none());
    }

    #[test]
    fn test_id_is_derived_from_uri() {
        let a = ResourcePackRequest::builder().uri(pack_url()).build().unwrap();
        let b = ResourcePackRequest::builder().uri(pack_url()).build().unwrap();
        assert_eq!(a.id(), b.id());
        assert_eq!(a.id().get_version_num(), 3);

        let other = ResourcePackRequest::builder()
            .uri(Url::parse("https://packs.example.org/other.zip").unwrap())
            .build()
            .unwrap();
        assert_ne!(a.id(), other.id());
    }

    #[test]
    fn test_explicit_fields_win() {
        let id = Uuid::new_v4();
        let request = ResourcePackRequest::builder()
            .id(id)
            .uri(pack_url())
            .hash("0123abcd")
            .required(true)
            .prompt(Component::text("Please accept"))
            .build()
            .unwrap();
        assert_eq!(request.id(), id);
        assert_eq!(request.hash(), "0123abcd");
        assert!(request.required());
        assert_eq!(request.prompt(), Some(&Component::text("Please accept")));
        assert_eq!(request.to_builder().build().unwrap(), request);
    }
}
