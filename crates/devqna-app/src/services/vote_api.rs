//! Client for the vote endpoint exposed by devqna-api.

use serde::Deserialize;
use serde_json::json;

use devqna_core::util::{is_http_url, normalize_text_option};
use devqna_core::voting::VoteOutcome;
use devqna_core::{VoteDirection, VoteTarget};

const ENV_VOTE_API_URL: &str = "DEVQNA_VOTE_API_URL";
const DEFAULT_VOTE_API_URL: &str = "http://localhost:8080";

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// HTTP client for `POST /api/vote`.
#[derive(Debug, Clone)]
pub struct VoteApiClient {
    base_url: String,
    client: reqwest::Client,
}

impl VoteApiClient {
    /// Builds a client for an explicit API base URL.
    pub fn new(base_url: impl Into<String>) -> Result<Self, String> {
        let base_url = normalize_base_url(base_url.into().as_str())?;
        let client = reqwest::Client::builder()
            .build()
            .map_err(|error| format!("Failed to construct HTTP client: {error}"))?;
        Ok(Self { base_url, client })
    }

    /// Builds a client from `DEVQNA_VOTE_API_URL`, defaulting to localhost.
    pub fn from_env() -> Result<Self, String> {
        let base_url = normalize_text_option(std::env::var(ENV_VOTE_API_URL).ok())
            .unwrap_or_else(|| DEFAULT_VOTE_API_URL.to_string());
        Self::new(base_url)
    }

    /// Submit a vote and return the recomputed aggregate.
    pub async fn cast_vote(
        &self,
        voter_id: &str,
        target: &VoteTarget,
        direction: VoteDirection,
    ) -> Result<VoteOutcome, String> {
        let response = self
            .client
            .post(format!("{}/api/vote", self.base_url))
            .json(&json!({
                "votedById": voter_id,
                "voteStatus": direction.as_str(),
                "type": target.kind().as_str(),
                "typeId": target.id(),
            }))
            .send()
            .await
            .map_err(|error| format!("Vote request failed: {error}"))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorBody>(&body)
                .ok()
                .and_then(|payload| payload.error)
                .unwrap_or_else(|| format!("HTTP {status}"));
            return Err(format!("Failed to vote: {message}"));
        }

        response
            .json::<VoteOutcome>()
            .await
            .map_err(|error| format!("Failed to parse vote response: {error}"))
    }
}

fn normalize_base_url(base_url: &str) -> Result<String, String> {
    let trimmed = base_url.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err("Vote API base URL must not be empty".to_string());
    }
    if !is_http_url(trimmed) {
        return Err("Vote API base URL must include http:// or https://".to_string());
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_base_url_strips_trailing_slash() {
        assert_eq!(
            normalize_base_url("http://localhost:8080/").unwrap(),
            "http://localhost:8080"
        );
    }

    #[test]
    fn normalize_base_url_rejects_bare_hosts() {
        assert!(normalize_base_url("localhost:8080").is_err());
        assert!(normalize_base_url("  ").is_err());
    }
}
