//! Serialized reputation bookkeeping.
//!
//! The preference store offers plain read and write with no atomic increment
//! and no concurrency token, so an unguarded read-modify-write loses updates
//! when two voters hit the same author at once. All reputation mutations are
//! therefore routed through this adjuster, which serializes them per author.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::voting::PrefsStore;
use crate::Result;

/// Applies reputation deltas, one author at a time.
pub struct ReputationAdjuster<P> {
    prefs: P,
    guards: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl<P: PrefsStore> ReputationAdjuster<P> {
    pub fn new(prefs: P) -> Self {
        Self {
            prefs,
            guards: Mutex::new(HashMap::new()),
        }
    }

    /// Apply `delta` to the author's reputation and return the new value.
    ///
    /// Holds the author's guard across the read and the write; concurrent
    /// adjustments for the same author queue up instead of racing.
    pub async fn adjust(&self, author_id: &str, delta: i64) -> Result<i64> {
        let guard = self.guard_for(author_id).await;
        let _serialized = guard.lock().await;

        let mut prefs = self.prefs.get_prefs(author_id).await?;
        prefs.reputation += delta;
        self.prefs.update_prefs(author_id, &prefs).await?;

        tracing::debug!(author = author_id, delta, reputation = prefs.reputation, "Adjusted reputation");
        Ok(prefs.reputation)
    }

    async fn guard_for(&self, author_id: &str) -> Arc<Mutex<()>> {
        let mut guards = self.guards.lock().await;
        guards
            .entry(author_id.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }
}
