use prism_api::Component;
use url::Url;
use uuid::Uuid;

use crate::ResourcePackRequestBuilder;

/// An immutable request for a client to apply a resource pack.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourcePackRequest {
    id: Uuid,
    uri: Url,
    hash: String,
    required: bool,
    prompt: Option<Component>,
}

impl ResourcePackRequest {
    pub fn new(id: Uuid, uri: Url, hash: impl Into<String>, required: bool, prompt: Option<Component>) -> Self {
        Self {
            id,
            uri,
            hash: hash.into(),
            required,
            prompt,
        }
    }

    pub fn builder() -> ResourcePackRequestBuilder {
        ResourcePackRequestBuilder::default()
    }

    /// A builder pre-filled with every field of this request.
    pub fn to_builder(&self) -> ResourcePackRequestBuilder {
        ResourcePackRequestBuilder::default()
            .id(self.id)
            .uri(self.uri.clone())
            .hash(self.hash.clone())
            .required(self.required)
            .prompt(self.prompt.clone())
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn uri(&self) -> &Url {
        &self.uri
    }

    /// Lowercase hex SHA-1 of the pack, or empty when unknown.
    pub fn hash(&self) -> &str {
        &self.hash
    }

    pub fn required(&self) -> bool {
        self.required
    }

    /// Message shown to the player alongside the download prompt.
    pub fn prompt(&self) -> Option<&Component> {
        self.prompt.as_ref()
    }
}
