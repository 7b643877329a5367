//! Lead submission adapter

use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

use super::backend::LeadBackend;
use super::{LeadError, LeadForm, LeadRecord, LEAD_SOURCE};

/// Wraps a backend with record normalization and failure translation
#[derive(Clone)]
pub struct LeadAdapter {
    backend: Arc<dyn LeadBackend>,
    source: String,
}

impl LeadAdapter {
    pub fn new(backend: Arc<dyn LeadBackend>) -> Self {
        Self {
            backend,
            source: LEAD_SOURCE.to_string(),
        }
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Validate the form and submit it. Returns the record that was sent.
    pub async fn capture(&self, form: &LeadForm) -> Result<LeadRecord, LeadError> {
        let record = LeadRecord::from_form(form, &self.source)?;
        self.submit(&record).await?;
        Ok(record)
    }

    /// Exactly one backend call per invocation. Failures are logged and
    /// collapsed into [`LeadError::SubmissionFailed`].
    pub async fn submit(&self, record: &LeadRecord) -> Result<(), LeadError> {
        let attempt = Uuid::new_v4();
        info!(%attempt, backend = self.backend.name(), source = %record.source, "Submitting lead");

        match self.backend.submit_value_lead(record).await {
            Ok(()) => {
                info!(%attempt, "Lead accepted");
                Ok(())
            }
            Err(e) => {
                warn!(%attempt, error = %e, "Lead submission failed");
                Err(LeadError::SubmissionFailed)
            }
        }
    }
}
