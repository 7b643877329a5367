//! Exo Vault - tiered resource library behind a lead-capture gate
//!
//! ## Components
//!
//! - **Catalog**: the static resource list and its tiers
//! - **Filter**: free-text and category filtering, split into tier sections
//! - **Gate**: lock/unlock state machine with cookie persistence
//! - **Leads**: lead normalization and submission to a Convex deployment
//! - **Interstitial**: partner-only modal for elite resources
//! - **Page** / **Server**: server-rendered vault page and JSON API

pub mod catalog;
pub mod config;
pub mod filter;
pub mod gate;
pub mod interstitial;
pub mod leads;
pub mod page;
pub mod server;

pub use config::Config;
pub use gate::{GateState, VaultSession};
pub use leads::{LeadAdapter, LeadError, LeadForm};
pub use server::{create_router, AppState};
