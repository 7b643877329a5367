//! A visitor's page load: gate state plus the device store behind it

use tracing::{debug, info};

use super::store::UnlockStore;
use super::{evaluate, GateDecision, GateInputs, GateState, UnlockSource};
use crate::leads::{LeadAdapter, LeadError, LeadForm};

pub struct VaultSession<S> {
    decision: GateDecision,
    store: S,
}

impl<S: UnlockStore> VaultSession<S> {
    /// Evaluate the gate for a fresh page load. Reads the store, never writes it.
    pub fn mount(url_name: Option<&str>, store: S) -> Self {
        let persisted = store.load();
        let decision = evaluate(&GateInputs {
            url_name,
            persisted_name: persisted.as_deref(),
        });
        debug!(state = ?decision.state, source = ?decision.source, "Gate evaluated");
        Self { decision, store }
    }

    pub fn state(&self) -> &GateState {
        &self.decision.state
    }

    pub fn decision(&self) -> &GateDecision {
        &self.decision
    }

    pub fn is_unlocked(&self) -> bool {
        self.decision.state.is_unlocked()
    }

    /// Capture a lead and unlock on success, persisting the first name.
    ///
    /// On failure the state is left untouched, so a locked gate stays locked.
    pub async fn submit_lead(&mut self, adapter: &LeadAdapter, form: &LeadForm) -> Result<&GateState, LeadError> {
        let record = adapter.capture(form).await?;
        self.store.save(&record.first_name);
        info!(source = %record.source, "Vault unlocked by lead submission");
        self.decision = GateDecision::unlocked(record.first_name, UnlockSource::LeadSubmission);
        Ok(&self.decision.state)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }
}
