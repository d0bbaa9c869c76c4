//! Explicit session lifecycle with keyring-backed persistence.
//!
//! The session lives in one context object with an `initialize()`/
//! `teardown()` lifecycle and a typed initialization result; components read
//! the signals and call the methods, nothing else touches auth state.

use std::sync::Arc;

use dioxus::prelude::*;
use keyring::Entry;

use devqna_core::appwrite::{AccountClient, AuthSession, SessionPersistence};
use devqna_core::config::BaasConfig;
use devqna_core::{Error, Result};

const KEYRING_SERVICE_NAME: &str = "devqna";
const KEYRING_SESSION_USERNAME: &str = "devqna_session";

/// Session store backed by the OS keyring (`keyring` crate).
#[derive(Debug, Clone)]
pub struct KeyringSessionStore {
    service_name: String,
    username: String,
}

impl Default for KeyringSessionStore {
    fn default() -> Self {
        Self {
            service_name: KEYRING_SERVICE_NAME.to_string(),
            username: KEYRING_SESSION_USERNAME.to_string(),
        }
    }
}

impl KeyringSessionStore {
    fn entry(&self) -> Result<Entry> {
        Entry::new(&self.service_name, &self.username)
            .map_err(|error| Error::SecureStorage(error.to_string()))
    }
}

impl SessionPersistence for KeyringSessionStore {
    fn load(&self) -> Result<Option<AuthSession>> {
        let entry = self.entry()?;
        match entry.get_password() {
            Ok(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(error) => Err(Error::SecureStorage(error.to_string())),
        }
    }

    fn save(&self, session: &AuthSession) -> Result<()> {
        let serialized = serde_json::to_string(session)?;
        self.entry()?
            .set_password(&serialized)
            .map_err(|error| Error::SecureStorage(error.to_string()))
    }

    fn clear(&self) -> Result<()> {
        let entry = self.entry()?;
        match entry.delete_credential() {
            Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
            Err(error) => Err(Error::SecureStorage(error.to_string())),
        }
    }
}

/// Account client wired to the keyring store.
#[derive(Clone)]
pub struct SessionService {
    inner: AccountClient<KeyringSessionStore>,
}

impl SessionService {
    /// Build from environment configuration; `None` when auth is not
    /// configured for this build.
    pub fn from_env() -> Result<Option<Self>> {
        let Some(config) = BaasConfig::from_env()? else {
            return Ok(None);
        };
        Ok(Some(Self::new(&config)?))
    }

    pub fn new(config: &BaasConfig) -> Result<Self> {
        Ok(Self {
            inner: AccountClient::new(config, KeyringSessionStore::default())?,
        })
    }
}

/// Result of session initialization.
#[derive(Debug, Clone)]
pub enum SessionInit {
    SignedIn(AuthSession),
    SignedOut,
    Unavailable(String),
}

/// Where the session lifecycle currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    Initializing,
    Ready,
    Unavailable,
}

/// The session context provided to every view.
#[derive(Clone, Copy)]
pub struct SessionContext {
    service: Signal<Option<Arc<SessionService>>>,
    /// Active session, if signed in.
    pub session: Signal<Option<AuthSession>>,
    /// Lifecycle state, for views that must wait for initialization.
    pub status: Signal<SessionStatus>,
}

impl SessionContext {
    pub fn new(
        service: Signal<Option<Arc<SessionService>>>,
        session: Signal<Option<AuthSession>>,
        status: Signal<SessionStatus>,
    ) -> Self {
        Self {
            service,
            session,
            status,
        }
    }

    /// Restore a persisted session, settling the context into a typed state.
    pub async fn initialize(&mut self) -> SessionInit {
        let Some(service) = (self.service)() else {
            self.status.set(SessionStatus::Unavailable);
            return SessionInit::Unavailable("Authentication is not configured".to_string());
        };

        match service.inner.restore_session().await {
            Ok(Some(session)) => {
                self.session.set(Some(session.clone()));
                self.status.set(SessionStatus::Ready);
                SessionInit::SignedIn(session)
            }
            Ok(None) => {
                self.session.set(None);
                self.status.set(SessionStatus::Ready);
                SessionInit::SignedOut
            }
            Err(error) => {
                tracing::error!("Session restore failed: {error}");
                self.session.set(None);
                self.status.set(SessionStatus::Ready);
                SessionInit::Unavailable(error.to_string())
            }
        }
    }

    /// Drop all session state. The keyring entry is already cleared by
    /// sign-out; this only resets the in-memory context.
    pub fn teardown(&mut self) {
        self.session.set(None);
        self.status.set(SessionStatus::Ready);
    }

    pub async fn sign_in(&mut self, email: &str, password: &str) -> Result<AuthSession> {
        let service = self.require_service()?;
        let session = service.inner.sign_in(email, password).await?;
        self.session.set(Some(session.clone()));
        Ok(session)
    }

    pub async fn sign_up(&mut self, name: &str, email: &str, password: &str) -> Result<AuthSession> {
        let service = self.require_service()?;
        let session = service.inner.sign_up(name, email, password).await?;
        self.session.set(Some(session.clone()));
        Ok(session)
    }

    pub async fn sign_out(&mut self) -> Result<()> {
        let service = self.require_service()?;
        if let Some(session) = (self.session)() {
            service.inner.sign_out(&session).await?;
        }
        self.teardown();
        Ok(())
    }

    /// The signed-in session, if any.
    #[must_use]
    pub fn current(&self) -> Option<AuthSession> {
        (self.session)()
    }

    fn require_service(&self) -> Result<Arc<SessionService>> {
        (self.service)().ok_or_else(|| {
            Error::InvalidInput("Authentication is not configured".to_string())
        })
    }
}
