//! REST API helpers for the contracts collection.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning [`ApiError::Unavailable`] since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Bodies are decoded regardless of HTTP status because the backend reports
//! failures as `{ "error": ... }` with 4xx codes. Only a body that cannot be
//! decoded at all falls back to a bare status error.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;
#[cfg(any(test, feature = "hydrate"))]
use serde::Deserialize;

#[cfg(any(test, feature = "hydrate"))]
use super::types::ApiAck;
use super::types::{ApiError, Contract, ContractId, ContractPayload};
use crate::config::PanelConfig;

/// Remote collection the panel controller reads from and writes to.
#[async_trait(?Send)]
pub trait ContractApi {
    /// Fetch the full collection.
    async fn list_contracts(&self) -> Result<Vec<Contract>, ApiError>;

    /// Create a record; returns the new id when the backend reports one.
    async fn create_contract(&self, payload: &ContractPayload) -> Result<Option<ContractId>, ApiError>;

    /// Partially update the record addressed by `id`.
    async fn update_contract(&self, id: ContractId, payload: &ContractPayload) -> Result<(), ApiError>;

    /// Remove the record addressed by `id`.
    async fn delete_contract(&self, id: ContractId) -> Result<(), ApiError>;
}

/// [`ContractApi`] backed by same-origin HTTP requests.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpContractApi {
    base: String,
}

impl HttpContractApi {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    pub fn from_config(config: &PanelConfig) -> Self {
        Self::new(config.api_base.clone())
    }
}

fn contracts_endpoint(base: &str) -> String {
    format!("{base}/contracts")
}

#[cfg(any(test, feature = "hydrate"))]
fn contract_endpoint(base: &str, id: ContractId) -> String {
    format!("{base}/contracts/{id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn is_success_status(status: u16) -> bool {
    (200..300).contains(&status)
}

#[cfg(any(test, feature = "hydrate"))]
#[derive(Deserialize)]
#[serde(untagged)]
enum ListBody {
    Items(Vec<Contract>),
    Failure { error: String },
}

/// Decode a `GET /contracts` response body.
#[cfg(any(test, feature = "hydrate"))]
fn decode_contract_list(status: u16, body: &str) -> Result<Vec<Contract>, ApiError> {
    let success = is_success_status(status);
    match serde_json::from_str::<ListBody>(body) {
        Ok(ListBody::Items(items)) if success => Ok(items),
        Ok(ListBody::Failure { error }) => Err(ApiError::Rejected(error)),
        Ok(ListBody::Items(_)) => Err(ApiError::Status(status)),
        Err(_) if !success => Err(ApiError::Status(status)),
        Err(e) => Err(ApiError::Decode(e.to_string())),
    }
}

/// Decode an acknowledgement body from a mutating endpoint.
#[cfg(any(test, feature = "hydrate"))]
fn decode_ack(status: u16, body: &str) -> Result<Option<ContractId>, ApiError> {
    match serde_json::from_str::<ApiAck>(body) {
        Ok(ack) => ack.into_result(),
        Err(_) if !is_success_status(status) => Err(ApiError::Status(status)),
        Err(e) => Err(ApiError::Decode(e.to_string())),
    }
}

#[cfg(feature = "hydrate")]
fn transport(err: impl std::fmt::Display) -> ApiError {
    ApiError::Transport(err.to_string())
}

#[cfg(feature = "hydrate")]
fn js_transport(err: wasm_bindgen::JsValue) -> ApiError {
    ApiError::Transport(format!("{err:?}"))
}

#[cfg(feature = "hydrate")]
async fn read_body(resp: gloo_net::http::Response) -> Result<(u16, String), ApiError> {
    let status = resp.status();
    let body = resp.text().await.map_err(transport)?;
    Ok((status, body))
}

#[async_trait(?Send)]
impl ContractApi for HttpContractApi {
    async fn list_contracts(&self) -> Result<Vec<Contract>, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::get(&contracts_endpoint(&self.base))
                .send()
                .await
                .map_err(transport)?;
            let (status, body) = read_body(resp).await?;
            decode_contract_list(status, &body)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            log::debug!("{} is only reachable from the browser", contracts_endpoint(&self.base));
            Err(ApiError::Unavailable)
        }
    }

    async fn create_contract(&self, payload: &ContractPayload) -> Result<Option<ContractId>, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let form = web_sys::FormData::new().map_err(js_transport)?;
            for (key, value) in payload.form_fields() {
                form.append_with_str(key, &value).map_err(js_transport)?;
            }
            let resp = gloo_net::http::Request::post(&contracts_endpoint(&self.base))
                .body(form)
                .map_err(transport)?
                .send()
                .await
                .map_err(transport)?;
            let (status, body) = read_body(resp).await?;
            decode_ack(status, &body)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = payload;
            Err(ApiError::Unavailable)
        }
    }

    async fn update_contract(&self, id: ContractId, payload: &ContractPayload) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::patch(&contract_endpoint(&self.base, id))
                .json(payload)
                .map_err(transport)?
                .send()
                .await
                .map_err(transport)?;
            let (status, body) = read_body(resp).await?;
            decode_ack(status, &body).map(|_| ())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, payload);
            Err(ApiError::Unavailable)
        }
    }

    async fn delete_contract(&self, id: ContractId) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::delete(&contract_endpoint(&self.base, id))
                .send()
                .await
                .map_err(transport)?;
            let (status, body) = read_body(resp).await?;
            decode_ack(status, &body).map(|_| ())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
            Err(ApiError::Unavailable)
        }
    }
}
