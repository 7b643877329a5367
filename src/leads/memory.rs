//! In-memory lead backend
//!
//! Used when no deployment URL is configured, and by tests. Records every
//! lead it accepts and can be switched into a failing mode.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::Mutex;

use super::backend::{BackendError, LeadBackend};
use super::LeadRecord;

#[derive(Debug, Default)]
pub struct InMemoryBackend {
    leads: Mutex<Vec<LeadRecord>>,
    failing: AtomicBool,
    call_count: AtomicU32,
}

impl InMemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// A backend that rejects every submission
    pub fn failing() -> Self {
        let backend = Self::new();
        backend.set_failing(true);
        backend
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Number of submission attempts, successful or not
    pub fn call_count(&self) -> u32 {
        self.call_count.load(Ordering::SeqCst)
    }

    /// Accepted leads in arrival order
    pub fn leads(&self) -> Vec<LeadRecord> {
        self.leads
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

#[async_trait]
impl LeadBackend for InMemoryBackend {
    fn name(&self) -> &str {
        "memory"
    }

    async fn submit_value_lead(&self, record: &LeadRecord) -> Result<(), BackendError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);

        if self.failing.load(Ordering::SeqCst) {
            return Err(BackendError::Network("in-memory backend set to fail".to_string()));
        }

        tracing::debug!(source = %record.source, "Lead recorded in memory");
        self.leads
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(record.clone());
        Ok(())
    }
}
