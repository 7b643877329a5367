//! Lead capture
//!
//! The gate overlay collects a name, work email and company. The adapter
//! normalizes that into a [`LeadRecord`] and hands it to a [`LeadBackend`]
//! in a single call. Callers only ever learn success or a generic failure.

pub mod adapter;
pub mod backend;
pub mod convex;
pub mod memory;

use serde::{Deserialize, Serialize};

pub use adapter::LeadAdapter;
pub use backend::{BackendError, LeadBackend};
pub use convex::ConvexBackend;
pub use memory::InMemoryBackend;

/// Source tag identifying the vault gate as the entry point
pub const LEAD_SOURCE: &str = "vault_gate";

/// Message shown in the overlay for any submission failure
pub const SUBMISSION_FAILED_MESSAGE: &str = "Something went wrong. Please try again.";

/// Raw overlay input
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct LeadForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub company: String,
}

impl LeadForm {
    pub fn new(name: impl Into<String>, email: impl Into<String>, company: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            company: company.into(),
        }
    }
}

/// Normalized record sent to the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadRecord {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub company: String,
    pub source: String,
}

impl LeadRecord {
    /// Build a record from overlay input. Every form field must be non-blank.
    pub fn from_form(form: &LeadForm, source: &str) -> Result<Self, LeadError> {
        let name = required("name", &form.name)?;
        let email = required("email", &form.email)?;
        let company = required("company", &form.company)?;
        let (first_name, last_name) = split_full_name(name);

        Ok(Self {
            first_name,
            last_name,
            email: email.to_string(),
            company: company.to_string(),
            source: source.to_string(),
        })
    }
}

fn required<'a>(field: &'static str, value: &'a str) -> Result<&'a str, LeadError> {
    let value = value.trim();
    if value.is_empty() {
        Err(LeadError::MissingField(field))
    } else {
        Ok(value)
    }
}

/// Split on the first space. The last name is empty for a single token.
pub fn split_full_name(full_name: &str) -> (String, String) {
    match full_name.trim().split_once(' ') {
        Some((first, rest)) => (first.to_string(), rest.trim().to_string()),
        None => (full_name.trim().to_string(), String::new()),
    }
}

/// Errors visible to the gate
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LeadError {
    #[error("{0} is required")]
    MissingField(&'static str),

    /// Any backend failure; the cause is logged, not returned
    #[error("Something went wrong. Please try again.")]
    SubmissionFailed,
}
