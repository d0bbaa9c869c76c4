//! Content fetchers assembled over one BaaS connection.

use devqna_core::appwrite::{StorageClient, TablesClient};
use devqna_core::config::BaasConfig;
use devqna_core::content::{Answers, Comments, Questions, Stats, Votes};
use devqna_core::schema::DATABASE_ID;

/// All remote content access used by the views.
#[derive(Clone)]
pub struct ContentServices {
    pub questions: Questions,
    pub answers: Answers,
    pub comments: Comments,
    pub votes: Votes,
    pub stats: Stats,
    pub storage: StorageClient,
}

impl ContentServices {
    /// Build services from environment configuration.
    ///
    /// Returns `Ok(None)` when no BaaS variables are set; the app then runs
    /// with content unavailable rather than failing to start.
    pub fn from_env() -> devqna_core::Result<Option<Self>> {
        let Some(config) = BaasConfig::from_env()? else {
            return Ok(None);
        };
        Ok(Some(Self::new(&config)?))
    }

    pub fn new(config: &BaasConfig) -> devqna_core::Result<Self> {
        let tables = TablesClient::new(config, DATABASE_ID)?;
        Ok(Self {
            questions: Questions::new(tables.clone()),
            answers: Answers::new(tables.clone()),
            comments: Comments::new(tables.clone()),
            votes: Votes::new(tables.clone()),
            stats: Stats::new(tables),
            storage: StorageClient::new(config)?,
        })
    }
}
