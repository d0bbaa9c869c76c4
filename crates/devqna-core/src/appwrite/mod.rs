//! Appwrite-compatible BaaS client.
//!
//! The application holds no durable state of its own; every row, session,
//! preference bag, and file lives behind this HTTP surface. Each concern gets
//! a small typed client sharing the request plumbing in this module.

pub mod account;
pub mod provisioning;
pub mod query;
pub mod storage;
pub mod tables;
pub mod users;

pub use account::{AccountClient, AuthSession, AuthUser, SessionPersistence};
pub use provisioning::{IndexKind, ProvisioningClient};
pub use query::Query;
pub use storage::StorageClient;
pub use tables::{RowPage, TablesClient};
pub use users::UsersClient;

use reqwest::{Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::config::BaasConfig;
use crate::util::compact_text;
use crate::{Error, Result};

/// How a client authenticates against the BaaS.
#[derive(Clone)]
pub(crate) enum Credential {
    /// Public, unauthenticated access (reads permitted to anyone).
    Anonymous,
    /// Server API key; full privileges.
    ApiKey(String),
    /// A user session secret.
    Session(String),
}

/// Shared request plumbing: base URL, project header, credential header.
#[derive(Clone)]
pub(crate) struct BaasHttp {
    endpoint: String,
    project_id: String,
    credential: Credential,
    client: reqwest::Client,
}

impl BaasHttp {
    pub(crate) fn new(config: &BaasConfig, credential: Credential) -> Result<Self> {
        Ok(Self {
            endpoint: config.endpoint.clone(),
            project_id: config.project_id.clone(),
            credential,
            client: reqwest::Client::builder().build()?,
        })
    }

    /// Build a client from config, using the server key when present.
    pub(crate) fn from_config(config: &BaasConfig) -> Result<Self> {
        let credential = config
            .api_key
            .clone()
            .map_or(Credential::Anonymous, Credential::ApiKey);
        Self::new(config, credential)
    }

    pub(crate) fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub(crate) fn project_id(&self) -> &str {
        &self.project_id
    }

    /// Same connection, different credential.
    pub(crate) fn with_credential(&self, credential: Credential) -> Self {
        Self {
            credential,
            ..self.clone()
        }
    }

    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let request = self
            .client
            .request(method, format!("{}{path}", self.endpoint))
            .header("X-Appwrite-Project", &self.project_id)
            .header("Accept", "application/json");
        match &self.credential {
            Credential::Anonymous => request,
            Credential::ApiKey(key) => request.header("X-Appwrite-Key", key),
            Credential::Session(secret) => request.header("X-Appwrite-Session", secret),
        }
    }

    /// Send a request and deserialize the success body.
    pub(crate) async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(api_error(status, &body));
        }
        Ok(response.json::<T>().await?)
    }

    /// Send a request and discard the success body.
    pub(crate) async fn send_unit(&self, request: RequestBuilder) -> Result<()> {
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(api_error(status, &body));
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: Option<String>,
    #[serde(rename = "type")]
    kind: Option<String>,
}

/// Decode an error response into [`Error::Api`], keeping the upstream status.
pub(crate) fn api_error(status: StatusCode, body: &str) -> Error {
    let message = serde_json::from_str::<ApiErrorBody>(body)
        .ok()
        .and_then(|payload| payload.message.or(payload.kind))
        .map_or_else(
            || {
                let trimmed = compact_text(body);
                if trimmed.is_empty() {
                    format!("HTTP {}", status.as_u16())
                } else {
                    trimmed
                }
            },
            |message| message.trim().to_string(),
        );

    Error::Api {
        status: status.as_u16(),
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_prefers_structured_message() {
        let error = api_error(
            StatusCode::CONFLICT,
            r#"{"message":"Table already exists","code":409,"type":"table_already_exists"}"#,
        );
        match error {
            Error::Api { status, message } => {
                assert_eq!(status, 409);
                assert_eq!(message, "Table already exists");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn api_error_falls_back_to_raw_body() {
        let error = api_error(StatusCode::BAD_GATEWAY, "upstream unavailable");
        match error {
            Error::Api { status, message } => {
                assert_eq!(status, 502);
                assert_eq!(message, "upstream unavailable");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn api_error_empty_body_reports_status() {
        let error = api_error(StatusCode::INTERNAL_SERVER_ERROR, "");
        assert_eq!(error.to_string(), "API error (500): HTTP 500");
    }

    #[test]
    fn conflict_detection_matches_409_only() {
        assert!(api_error(StatusCode::CONFLICT, "").is_conflict());
        assert!(!api_error(StatusCode::NOT_FOUND, "").is_conflict());
    }
}
