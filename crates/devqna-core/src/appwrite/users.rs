//! Server-key admin surface over other users' records.
//!
//! Only the vote endpoint and setup tooling hold the API key; user-facing
//! builds never construct this client.

use reqwest::Method;
use serde::Deserialize;
use serde_json::json;

use crate::appwrite::{BaasHttp, Credential};
use crate::config::BaasConfig;
use crate::models::UserPrefs;
use crate::{Error, Result};

/// Public author info assembled from a user record.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "UserWire")]
pub struct UserSummary {
    pub id: String,
    pub name: String,
    pub prefs: UserPrefs,
}

#[derive(Deserialize)]
struct UserWire {
    #[serde(rename = "$id")]
    id: String,
    name: String,
    #[serde(default)]
    prefs: UserPrefs,
}

impl TryFrom<UserWire> for UserSummary {
    type Error = Error;

    fn try_from(wire: UserWire) -> Result<Self> {
        Ok(Self {
            id: wire.id,
            name: wire.name,
            prefs: wire.prefs,
        })
    }
}

/// Admin client for reading and writing arbitrary users' preference bags.
#[derive(Clone)]
pub struct UsersClient {
    http: BaasHttp,
}

impl UsersClient {
    /// Build an admin client. The config must carry the server API key.
    pub fn new(config: &BaasConfig) -> Result<Self> {
        let Some(api_key) = config.api_key.clone() else {
            return Err(Error::InvalidInput(
                "Users client requires a server API key".to_string(),
            ));
        };
        Ok(Self {
            http: BaasHttp::new(config, Credential::ApiKey(api_key))?,
        })
    }

    /// Fetch a user record by id.
    pub async fn get_user(&self, user_id: &str) -> Result<UserSummary> {
        let request = self
            .http
            .request(Method::GET, &format!("/users/{}", urlencoding::encode(user_id)));
        self.http.send(request).await
    }

    /// Read a user's preference bag.
    pub async fn get_prefs(&self, user_id: &str) -> Result<UserPrefs> {
        let request = self.http.request(
            Method::GET,
            &format!("/users/{}/prefs", urlencoding::encode(user_id)),
        );
        self.http.send(request).await
    }

    /// Replace a user's preference bag.
    pub async fn update_prefs(&self, user_id: &str, prefs: &UserPrefs) -> Result<()> {
        let request = self
            .http
            .request(
                Method::PATCH,
                &format!("/users/{}/prefs", urlencoding::encode(user_id)),
            )
            .json(&json!({ "prefs": prefs }));
        self.http.send_unit(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn users_client_requires_api_key() {
        let config = BaasConfig {
            endpoint: "https://cloud.example.com/v1".to_string(),
            project_id: "devqna".to_string(),
            api_key: None,
        };
        assert!(UsersClient::new(&config).is_err());
    }

    #[test]
    fn user_summary_defaults_missing_prefs() {
        let json = r#"{"$id": "user-1", "name": "Ada"}"#;
        let user: UserSummary = serde_json::from_str(json).unwrap();
        assert_eq!(user.prefs.reputation, 0);
    }
}
