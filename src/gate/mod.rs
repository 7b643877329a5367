//! Gate state machine
//!
//! Decides whether a visitor sees the lead-capture overlay. The decision is
//! an ordered list of rules, first match wins:
//!
//! 1. a `user` URL parameter (share link, never persisted)
//! 2. a name persisted on the device by an earlier unlock
//! 3. otherwise locked
//!
//! Unlocking through a lead submission lives in [`session`].

pub mod session;
pub mod store;

use serde::Serialize;

pub use session::VaultSession;
pub use store::{CookieStore, MemoryStore, UnlockStore};

/// Query parameter carrying a share-link name
pub const USER_PARAM: &str = "user";

/// Fixed key of the persisted unlock entry
pub const STORAGE_KEY: &str = "exo_vault_user";

/// Whether the vault is open for this visitor
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum GateState {
    Locked,
    Unlocked { name: String },
}

impl GateState {
    pub fn is_unlocked(&self) -> bool {
        matches!(self, GateState::Unlocked { .. })
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            GateState::Locked => None,
            GateState::Unlocked { name } => Some(name),
        }
    }
}

/// How an unlocked state came about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UnlockSource {
    SharedLink,
    Persisted,
    LeadSubmission,
}

/// Named precedence rules
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateRule {
    SharedLinkParam,
    PersistedName,
}

/// Evaluation order; earlier rules win
pub const PRECEDENCE: [GateRule; 2] = [GateRule::SharedLinkParam, GateRule::PersistedName];

/// Raw inputs read at page load
#[derive(Debug, Clone, Copy, Default)]
pub struct GateInputs<'a> {
    /// Already URL-decoded `user` parameter
    pub url_name: Option<&'a str>,
    pub persisted_name: Option<&'a str>,
}

impl GateRule {
    /// Name this rule unlocks with, if it applies
    fn apply<'a>(&self, inputs: &GateInputs<'a>) -> Option<&'a str> {
        let candidate = match self {
            GateRule::SharedLinkParam => inputs.url_name,
            GateRule::PersistedName => inputs.persisted_name,
        };
        candidate.map(str::trim).filter(|name| !name.is_empty())
    }

    fn source(&self) -> UnlockSource {
        match self {
            GateRule::SharedLinkParam => UnlockSource::SharedLink,
            GateRule::PersistedName => UnlockSource::Persisted,
        }
    }
}

/// Result of evaluating the rules
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GateDecision {
    #[serde(flatten)]
    pub state: GateState,
    pub source: Option<UnlockSource>,
}

impl GateDecision {
    pub fn locked() -> Self {
        Self {
            state: GateState::Locked,
            source: None,
        }
    }

    pub fn unlocked(name: impl Into<String>, source: UnlockSource) -> Self {
        Self {
            state: GateState::Unlocked { name: name.into() },
            source: Some(source),
        }
    }
}

/// Evaluate the precedence rules. Pure; never writes persistence.
pub fn evaluate(inputs: &GateInputs<'_>) -> GateDecision {
    PRECEDENCE
        .iter()
        .find_map(|rule| rule.apply(inputs).map(|name| GateDecision::unlocked(name, rule.source())))
        .unwrap_or_else(GateDecision::locked)
}
