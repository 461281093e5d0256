use koto_types::GeneratedEntry;
use serde::{Deserialize, Serialize};

/// Reading and meaning provider interface
#[async_trait::async_trait]
pub trait EntryGenerator: Send + Sync {
    /// Produce a normalized token breakdown and a definition for the request target
    async fn generate(&self, request: &GenerationRequest) -> Result<GeneratedEntry, GenerateError>;

    /// Provider metadata
    fn metadata(&self) -> ProviderMetadata;
}

/// What to generate for: the full text and optionally the term inside it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub content: String,
    pub focused_term: Option<String>,
}

impl GenerationRequest {
    pub fn new(content: impl Into<String>, focused_term: Option<String>) -> Self {
        Self {
            content: content.into(),
            focused_term: focused_term.filter(|t| !t.is_empty()),
        }
    }

    /// Text the reading must cover
    pub fn target(&self) -> &str {
        self.focused_term.as_deref().unwrap_or(&self.content)
    }

    /// Surrounding text, only when it differs from the target
    pub fn context(&self) -> Option<&str> {
        self.focused_term.as_ref().map(|_| self.content.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct ProviderMetadata {
    pub name: String,
    pub model: String,
    pub requires_api_key: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("API error: {0}")]
    ApiError(String),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Response does not match the entry schema: {0}")]
    SchemaError(String),

    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    #[error("Authentication error")]
    AuthenticationError,
}
