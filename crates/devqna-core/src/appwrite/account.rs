//! Account and session client for the BaaS identity subsystem.

use std::fmt;

use chrono::{DateTime, Utc};
use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::appwrite::{BaasHttp, Credential};
use crate::config::BaasConfig;
use crate::models::UserPrefs;
use crate::util::unix_timestamp_now;
use crate::{Error, Result};

const EXPIRY_SKEW_SECONDS: i64 = 60;

/// The signed-in user as reported by the identity subsystem.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: String,
    pub name: String,
    pub email: Option<String>,
    #[serde(default)]
    pub prefs: UserPrefs,
}

/// An authenticated session, persisted between launches.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthSession {
    pub session_id: String,
    pub secret: String,
    pub expires_at: i64,
    pub user: AuthUser,
}

impl AuthSession {
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.expires_at <= unix_timestamp_now() + EXPIRY_SKEW_SECONDS
    }
}

impl fmt::Debug for AuthSession {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("AuthSession")
            .field("session_id", &self.session_id)
            .field("secret", &"[REDACTED]")
            .field("expires_at", &self.expires_at)
            .field("user", &self.user)
            .finish()
    }
}

/// Where the active session is persisted between launches.
pub trait SessionPersistence: Clone + Send + Sync + 'static {
    fn load(&self) -> Result<Option<AuthSession>>;
    fn save(&self, session: &AuthSession) -> Result<()>;
    fn clear(&self) -> Result<()>;
}

#[derive(Debug, Deserialize)]
struct SessionWire {
    #[serde(rename = "$id")]
    id: String,
    expire: DateTime<Utc>,
    #[serde(default)]
    secret: String,
}

#[derive(Debug, Deserialize)]
struct AccountWire {
    #[serde(rename = "$id")]
    id: String,
    name: String,
    email: Option<String>,
    #[serde(default)]
    prefs: UserPrefs,
}

impl From<AccountWire> for AuthUser {
    fn from(wire: AccountWire) -> Self {
        Self {
            id: wire.id,
            name: wire.name,
            email: wire.email.filter(|email| !email.is_empty()),
            prefs: wire.prefs,
        }
    }
}

/// Client for registration, login, logout, and the caller's own prefs.
#[derive(Clone)]
pub struct AccountClient<S: SessionPersistence> {
    http: BaasHttp,
    store: S,
}

impl<S: SessionPersistence> AccountClient<S> {
    pub fn new(config: &BaasConfig, store: S) -> Result<Self> {
        Ok(Self {
            http: BaasHttp::new(config, Credential::Anonymous)?,
            store,
        })
    }

    /// Restore a previously persisted session.
    ///
    /// An expired or rejected session is cleared and reported as `None`.
    pub async fn restore_session(&self) -> Result<Option<AuthSession>> {
        let Some(stored) = self.store.load()? else {
            return Ok(None);
        };

        if stored.is_expired() {
            self.store.clear()?;
            return Ok(None);
        }

        match self.fetch_account(&stored.secret).await {
            Ok(user) => Ok(Some(AuthSession { user, ..stored })),
            Err(Error::Api { status: 401, .. }) => {
                tracing::warn!("Persisted session was rejected; clearing it");
                self.store.clear()?;
                Ok(None)
            }
            Err(error) => Err(error),
        }
    }

    /// Register a new account and sign it in.
    pub async fn sign_up(&self, name: &str, email: &str, password: &str) -> Result<AuthSession> {
        if name.trim().is_empty() {
            return Err(Error::InvalidInput("Name is required".to_string()));
        }
        validate_credentials(email, password)?;

        let request = self
            .http
            .request(Method::POST, "/account")
            .json(&json!({
                "userId": "unique()",
                "name": name,
                "email": email,
                "password": password,
            }));
        self.http.send_unit(request).await?;

        self.sign_in(email, password).await
    }

    /// Create an email/password session.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<AuthSession> {
        validate_credentials(email, password)?;

        let request = self
            .http
            .request(Method::POST, "/account/sessions/email")
            .json(&json!({
                "email": email,
                "password": password,
            }));
        let wire: SessionWire = self.http.send(request).await?;

        if wire.secret.is_empty() {
            return Err(Error::InvalidInput(
                "Session response did not include a secret".to_string(),
            ));
        }

        let user = self.fetch_account(&wire.secret).await?;
        let session = AuthSession {
            session_id: wire.id,
            secret: wire.secret,
            expires_at: wire.expire.timestamp(),
            user,
        };

        self.store.save(&session)?;
        Ok(session)
    }

    /// Delete the active session, clearing the persisted copy regardless.
    pub async fn sign_out(&self, session: &AuthSession) -> Result<()> {
        let request = self.session_http(session).request(
            Method::DELETE,
            &format!("/account/sessions/{}", urlencoding::encode(&session.session_id)),
        );
        let result = self.http.send_unit(request).await;
        self.store.clear()?;
        match result {
            Ok(()) | Err(Error::Api { status: 401, .. }) => Ok(()),
            Err(error) => Err(error),
        }
    }

    /// Fetch the signed-in user for the given session.
    pub async fn current_user(&self, session: &AuthSession) -> Result<AuthUser> {
        self.fetch_account(&session.secret).await
    }

    /// Read the caller's own preference bag.
    pub async fn get_prefs(&self, session: &AuthSession) -> Result<UserPrefs> {
        let request = self
            .session_http(session)
            .request(Method::GET, "/account/prefs");
        self.http.send(request).await
    }

    /// Replace the caller's own preference bag.
    pub async fn update_prefs(&self, session: &AuthSession, prefs: &UserPrefs) -> Result<AuthUser> {
        let request = self
            .session_http(session)
            .request(Method::PATCH, "/account/prefs")
            .json(&json!({ "prefs": prefs }));
        let wire: AccountWire = self.http.send(request).await?;
        Ok(wire.into())
    }

    async fn fetch_account(&self, secret: &str) -> Result<AuthUser> {
        let http = self
            .http
            .with_credential(Credential::Session(secret.to_string()));
        let request = http.request(Method::GET, "/account");
        let wire: AccountWire = self.http.send(request).await?;
        Ok(wire.into())
    }

    fn session_http(&self, session: &AuthSession) -> BaasHttp {
        self.http
            .with_credential(Credential::Session(session.secret.clone()))
    }
}

fn validate_credentials(email: &str, password: &str) -> Result<()> {
    if email.trim().is_empty() {
        return Err(Error::InvalidInput("Email is required".to_string()));
    }
    if password.trim().is_empty() {
        return Err(Error::InvalidInput("Password is required".to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(expires_at: i64) -> AuthSession {
        AuthSession {
            session_id: "sess-1".to_string(),
            secret: "secret-session-token".to_string(),
            expires_at,
            user: AuthUser {
                id: "user-1".to_string(),
                name: "Ada".to_string(),
                email: Some("ada@example.com".to_string()),
                prefs: UserPrefs::default(),
            },
        }
    }

    #[test]
    fn session_expiry_applies_skew() {
        assert!(session(unix_timestamp_now()).is_expired());
        assert!(session(unix_timestamp_now() + 30).is_expired());
        assert!(!session(unix_timestamp_now() + 3600).is_expired());
    }

    #[test]
    fn session_debug_redacts_secret() {
        let rendered = format!("{:?}", session(0));
        assert!(!rendered.contains("secret-session-token"));
        assert!(rendered.contains("[REDACTED]"));
    }

    #[test]
    fn account_wire_drops_empty_email() {
        let wire = AccountWire {
            id: "user-1".to_string(),
            name: "Ada".to_string(),
            email: Some(String::new()),
            prefs: UserPrefs::default(),
        };
        let user: AuthUser = wire.into();
        assert!(user.email.is_none());
    }

    #[test]
    fn validate_credentials_rejects_blank_input() {
        assert!(validate_credentials("  ", "pw").is_err());
        assert!(validate_credentials("a@example.com", "").is_err());
        assert!(validate_credentials("a@example.com", "pw").is_ok());
    }
}
