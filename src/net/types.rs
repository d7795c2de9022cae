//! Wire schema for the contracts REST API.
//!
//! DESIGN
//! ======
//! `Contract` mirrors what `GET /api/contracts` returns. Writes go through
//! `ContractPayload`, which has no usage fields, so backend-owned counters
//! can never be sent back by the panel.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Backend-assigned contract identifier.
pub type ContractId = i64;

/// A contract record as returned by the backend.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contract {
    pub id: ContractId,
    pub name: String,
    #[serde(default)]
    pub sfmc_subdomain: Option<String>,
    #[serde(default)]
    pub client_id: Option<String>,
    #[serde(default)]
    pub client_secret: Option<String>,
    #[serde(default)]
    pub de_key: Option<String>,
    /// Contact quota; `None` or `0` means no limit.
    #[serde(default)]
    pub contacts_limit: Option<u64>,
    /// Last usage count reported by the backend poller.
    #[serde(default)]
    pub contacts_amount: Option<u64>,
    /// Preformatted timestamp of the last usage poll.
    #[serde(default)]
    pub last_checked: Option<String>,
    #[serde(default)]
    pub slack_users_ids: Vec<String>,
}

impl Contract {
    /// Quota with "absent" folded into `0`.
    pub fn limit(&self) -> u64 {
        self.contacts_limit.unwrap_or(0)
    }

    /// Usage with "absent" folded into `0`.
    pub fn amount(&self) -> u64 {
        self.contacts_amount.unwrap_or(0)
    }
}

/// Normalized field set sent for both create and update.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractPayload {
    pub name: String,
    pub sfmc_subdomain: String,
    pub client_id: String,
    pub client_secret: String,
    pub de_key: String,
    pub contacts_limit: u64,
    pub slack_users_ids: Vec<String>,
}

impl ContractPayload {
    /// Flatten into `(field, value)` pairs for a multipart create request.
    ///
    /// The backend splits `slack_users_ids` on commas for form submissions.
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("name", self.name.clone()),
            ("sfmc_subdomain", self.sfmc_subdomain.clone()),
            ("client_id", self.client_id.clone()),
            ("client_secret", self.client_secret.clone()),
            ("de_key", self.de_key.clone()),
            ("contacts_limit", self.contacts_limit.to_string()),
            ("slack_users_ids", self.slack_users_ids.join(",")),
        ]
    }
}

/// Acknowledgement body returned by the mutating endpoints.
///
/// Error responses (404, 400) omit `success` entirely, so it defaults to
/// `false`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ApiAck {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub id: Option<ContractId>,
}

impl ApiAck {
    /// Convert into a result, surfacing the backend message on failure.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Rejected`] when `success` is not `true`.
    pub fn into_result(self) -> Result<Option<ContractId>, ApiError> {
        if self.success {
            Ok(self.id)
        } else {
            Err(ApiError::Rejected(self.error.unwrap_or_else(|| "unknown error".to_owned())))
        }
    }
}

/// Errors surfaced by [`crate::net::api::ContractApi`] implementations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("invalid response: {0}")]
    Decode(String),
    /// Backend-reported failure; the message is shown to the user verbatim.
    #[error("{0}")]
    Rejected(String),
    #[error("not available on server")]
    Unavailable,
}
