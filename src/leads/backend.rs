//! Lead backend trait

use async_trait::async_trait;

use super::LeadRecord;

/// Failure causes reported by a backend. Logged, never shown to visitors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BackendError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Backend returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Backend rejected lead: {0}")]
    Rejected(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Destination for captured leads.
///
/// One `submit_value_lead` call is one external mutation; implementations
/// must not retry or deduplicate.
#[async_trait]
pub trait LeadBackend: Send + Sync {
    /// Identifier for logs
    fn name(&self) -> &str;

    async fn submit_value_lead(&self, record: &LeadRecord) -> Result<(), BackendError>;
}
