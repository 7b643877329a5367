//! Convex mutation backend
//!
//! Calls a Convex deployment's HTTP API:
//!
//! ```text
//! POST {deployment}/api/mutation
//! {"path": "leads:submitValueLead", "args": {...}, "format": "json"}
//! ```
//!
//! A 2xx reply with `"status": "success"` is the only success. The returned
//! value is ignored.

use async_trait::async_trait;
use reqwest::{header, Client};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::backend::{BackendError, LeadBackend};
use super::LeadRecord;

/// Default mutation invoked for vault leads
pub const DEFAULT_MUTATION: &str = "leads:submitValueLead";

pub struct ConvexBackend {
    client: Client,
    deployment_url: String,
    mutation: String,
}

impl ConvexBackend {
    /// `timeout` of `None` leaves the call bounded only by the remote end
    pub fn new(
        deployment_url: impl Into<String>,
        mutation: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, BackendError> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        let mut builder = Client::builder().default_headers(headers);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| BackendError::Network(e.to_string()))?;

        Ok(Self {
            client,
            deployment_url: deployment_url.into().trim_end_matches('/').to_string(),
            mutation: mutation.into(),
        })
    }

    fn mutation_url(&self) -> String {
        format!("{}/api/mutation", self.deployment_url)
    }
}

#[derive(Debug, Serialize)]
struct MutationRequest<'a> {
    path: &'a str,
    args: &'a LeadRecord,
    format: &'static str,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
enum MutationResponse {
    Success {},
    Error {
        #[serde(rename = "errorMessage", default)]
        error_message: String,
    },
}

#[async_trait]
impl LeadBackend for ConvexBackend {
    fn name(&self) -> &str {
        "convex"
    }

    async fn submit_value_lead(&self, record: &LeadRecord) -> Result<(), BackendError> {
        let body = MutationRequest {
            path: &self.mutation,
            args: record,
            format: "json",
        };

        let response = self
            .client
            .post(self.mutation_url())
            .json(&body)
            .send()
            .await
            .map_err(|e| BackendError::Network(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| BackendError::Network(e.to_string()))?;

        let parsed = serde_json::from_str::<MutationResponse>(&text);

        if !status.is_success() {
            return Err(match parsed {
                Ok(MutationResponse::Error { error_message }) => BackendError::Rejected(error_message),
                _ => BackendError::Status {
                    status: status.as_u16(),
                    body: text,
                },
            });
        }

        match parsed {
            Ok(MutationResponse::Success {}) => Ok(()),
            Ok(MutationResponse::Error { error_message }) => Err(BackendError::Rejected(error_message)),
            Err(e) => Err(BackendError::InvalidResponse(e.to_string())),
        }
    }
}
