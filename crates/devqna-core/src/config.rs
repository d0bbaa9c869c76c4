//! BaaS connection configuration.
//!
//! All DevQnA binaries discover the Appwrite-compatible backend through
//! environment variables. The user-facing app only needs the endpoint and
//! project id; the API server and setup CLI additionally carry the server
//! API key.

use std::env;

use crate::util::is_http_url;
use crate::{Error, Result};

const ENV_ENDPOINT: &str = "DEVQNA_APPWRITE_ENDPOINT";
const ENV_PROJECT_ID: &str = "DEVQNA_APPWRITE_PROJECT_ID";
const ENV_API_KEY: &str = "DEVQNA_APPWRITE_API_KEY";

/// Connection settings for the remote BaaS.
#[derive(Clone, PartialEq, Eq)]
pub struct BaasConfig {
    /// Base API endpoint, normalized to end in `/v1`.
    pub endpoint: String,
    /// Project identifier sent with every request.
    pub project_id: String,
    /// Server API key for privileged clients. Absent in user-facing builds.
    pub api_key: Option<String>,
}

impl std::fmt::Debug for BaasConfig {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("BaasConfig")
            .field("endpoint", &self.endpoint)
            .field("project_id", &self.project_id)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl BaasConfig {
    /// Load configuration from environment variables.
    ///
    /// Returns `Ok(None)` when no DevQnA variables are set.
    /// Returns an error when only a partial configuration is provided.
    pub fn from_env() -> Result<Option<Self>> {
        parse_config(|key| env::var(key).ok())
    }

    /// Load configuration from the environment, requiring the server key.
    pub fn server_from_env() -> Result<Self> {
        let config = Self::from_env()?.ok_or_else(|| {
            Error::InvalidInput(format!(
                "BaaS configuration is missing. Set {ENV_ENDPOINT} and {ENV_PROJECT_ID}."
            ))
        })?;
        if config.api_key.is_none() {
            return Err(Error::InvalidInput(format!(
                "Server configuration requires {ENV_API_KEY}."
            )));
        }
        Ok(config)
    }
}

fn parse_config(lookup: impl Fn(&str) -> Option<String>) -> Result<Option<BaasConfig>> {
    let endpoint = lookup(ENV_ENDPOINT).map(|value| value.trim().to_string());
    let project_id = lookup(ENV_PROJECT_ID).map(|value| value.trim().to_string());
    let api_key = lookup(ENV_API_KEY).map(|value| value.trim().to_string());

    let any_present = endpoint.is_some() || project_id.is_some() || api_key.is_some();
    if !any_present {
        return Ok(None);
    }

    let mut missing = Vec::new();
    if endpoint.as_ref().map_or(true, String::is_empty) {
        missing.push(ENV_ENDPOINT);
    }
    if project_id.as_ref().map_or(true, String::is_empty) {
        missing.push(ENV_PROJECT_ID);
    }

    if !missing.is_empty() {
        return Err(Error::InvalidInput(format!(
            "BaaS configuration is incomplete. Missing: {}",
            missing.join(", ")
        )));
    }

    let endpoint = normalize_endpoint(&endpoint.expect("validated above"))?;

    Ok(Some(BaasConfig {
        endpoint,
        project_id: project_id.expect("validated above"),
        api_key: api_key.filter(|value| !value.is_empty()),
    }))
}

/// Normalize a BaaS endpoint URL to a `/v1` API base without trailing slash.
pub fn normalize_endpoint(url: &str) -> Result<String> {
    let trimmed = url.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(Error::InvalidInput(
            "BaaS endpoint must not be empty".to_string(),
        ));
    }
    if !is_http_url(trimmed) {
        return Err(Error::InvalidInput(
            "BaaS endpoint must include http:// or https://".to_string(),
        ));
    }
    if trimmed.ends_with("/v1") {
        Ok(trimmed.to_string())
    } else {
        Ok(format!("{trimmed}/v1"))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn parse_from_map(map: &HashMap<&str, &str>) -> Result<Option<BaasConfig>> {
        parse_config(|key| map.get(key).map(|value| (*value).to_string()))
    }

    #[test]
    fn parse_config_none_returns_none() {
        let map = HashMap::new();
        assert!(parse_from_map(&map).unwrap().is_none());
    }

    #[test]
    fn parse_config_requires_endpoint_and_project() {
        let mut map = HashMap::new();
        map.insert(ENV_API_KEY, "server-key");

        let err = parse_from_map(&map).unwrap_err();
        match err {
            Error::InvalidInput(message) => {
                assert!(message.contains(ENV_ENDPOINT));
                assert!(message.contains(ENV_PROJECT_ID));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn parse_config_accepts_valid_values_and_normalizes_endpoint() {
        let mut map = HashMap::new();
        map.insert(ENV_ENDPOINT, "https://cloud.example.com/");
        map.insert(ENV_PROJECT_ID, "devqna");

        let config = parse_from_map(&map).unwrap().unwrap();
        assert_eq!(config.endpoint, "https://cloud.example.com/v1");
        assert_eq!(config.project_id, "devqna");
        assert!(config.api_key.is_none());
    }

    #[test]
    fn normalize_endpoint_keeps_existing_v1_path() {
        let normalized = normalize_endpoint("https://cloud.example.com/v1").unwrap();
        assert_eq!(normalized, "https://cloud.example.com/v1");
    }

    #[test]
    fn normalize_endpoint_rejects_missing_scheme() {
        assert!(normalize_endpoint("cloud.example.com").is_err());
    }

    #[test]
    fn debug_redacts_api_key() {
        let config = BaasConfig {
            endpoint: "https://cloud.example.com/v1".to_string(),
            project_id: "devqna".to_string(),
            api_key: Some("secret-server-key".to_string()),
        };
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("secret-server-key"));
        assert!(rendered.contains("[REDACTED]"));
    }
}
