//! Vote flow tests over in-memory stores.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use pretty_assertions::assert_eq;
use tokio::sync::Mutex;

use crate::models::{NewVote, UserPrefs, Vote, VoteDirection, VoteTarget};
use crate::voting::{
    AuthorLookup, PrefsStore, ReputationAdjuster, VoteRecorder, VoteStore,
};
use crate::Result;

#[derive(Default)]
struct BackendState {
    votes: Vec<Vote>,
    next_vote_id: u64,
    authors: HashMap<String, String>,
    prefs: HashMap<String, UserPrefs>,
}

/// In-memory stand-in for the remote BaaS.
#[derive(Clone, Default)]
struct MemoryBackend {
    state: Arc<Mutex<BackendState>>,
    /// Delay inserted between prefs read and write to widen the race window.
    prefs_write_delay: Option<Duration>,
}

impl MemoryBackend {
    fn racy(delay: Duration) -> Self {
        Self {
            prefs_write_delay: Some(delay),
            ..Self::default()
        }
    }

    async fn seed_author(&self, target: &VoteTarget, author_id: &str, reputation: i64) {
        let mut state = self.state.lock().await;
        state
            .authors
            .insert(target_key(target), author_id.to_string());
        state.prefs.insert(
            author_id.to_string(),
            UserPrefs {
                reputation,
                avatar_url: None,
            },
        );
    }

    async fn reputation_of(&self, author_id: &str) -> i64 {
        let state = self.state.lock().await;
        state.prefs.get(author_id).map_or(0, |prefs| prefs.reputation)
    }

    async fn vote_rows(&self, target: &VoteTarget) -> Vec<Vote> {
        let state = self.state.lock().await;
        state
            .votes
            .iter()
            .filter(|vote| vote.target == *target)
            .cloned()
            .collect()
    }
}

fn target_key(target: &VoteTarget) -> String {
    format!("{}:{}", target.kind(), target.id())
}

impl VoteStore for MemoryBackend {
    async fn find_by_voter(&self, target: &VoteTarget, voter_id: &str) -> Result<Option<Vote>> {
        let state = self.state.lock().await;
        Ok(state
            .votes
            .iter()
            .find(|vote| vote.target == *target && vote.voted_by_id == voter_id)
            .cloned())
    }

    async fn list_for_target(&self, target: &VoteTarget) -> Result<Vec<Vote>> {
        Ok(self.vote_rows(target).await)
    }

    async fn create(&self, vote: &NewVote) -> Result<Vote> {
        let mut state = self.state.lock().await;
        state.next_vote_id += 1;
        let row = Vote {
            id: format!("vote-{}", state.next_vote_id),
            created_at: Utc::now(),
            target: vote.target.clone(),
            voted_by_id: vote.voted_by_id.clone(),
            direction: vote.direction,
        };
        state.votes.push(row.clone());
        Ok(row)
    }

    async fn set_direction(&self, vote_id: &str, direction: VoteDirection) -> Result<()> {
        let mut state = self.state.lock().await;
        if let Some(vote) = state.votes.iter_mut().find(|vote| vote.id == vote_id) {
            vote.direction = direction;
        }
        Ok(())
    }

    async fn delete(&self, vote_id: &str) -> Result<()> {
        let mut state = self.state.lock().await;
        state.votes.retain(|vote| vote.id != vote_id);
        Ok(())
    }
}

impl AuthorLookup for MemoryBackend {
    async fn author_of(&self, target: &VoteTarget) -> Result<String> {
        let state = self.state.lock().await;
        state
            .authors
            .get(&target_key(target))
            .cloned()
            .ok_or_else(|| crate::Error::NotFound(target_key(target)))
    }
}

impl PrefsStore for MemoryBackend {
    async fn get_prefs(&self, user_id: &str) -> Result<UserPrefs> {
        let prefs = {
            let state = self.state.lock().await;
            state.prefs.get(user_id).cloned().unwrap_or_default()
        };
        // Widen the window between read and write for the race test.
        if let Some(delay) = self.prefs_write_delay {
            tokio::time::sleep(delay).await;
        }
        Ok(prefs)
    }

    async fn update_prefs(&self, user_id: &str, prefs: &UserPrefs) -> Result<()> {
        let mut state = self.state.lock().await;
        state.prefs.insert(user_id.to_string(), prefs.clone());
        Ok(())
    }
}

fn recorder(backend: &MemoryBackend) -> VoteRecorder<MemoryBackend, MemoryBackend, MemoryBackend> {
    VoteRecorder::new(backend.clone(), backend.clone(), backend.clone())
}

#[tokio::test]
async fn toggling_the_same_direction_leaves_no_row_and_no_net_delta() {
    let backend = MemoryBackend::default();
    let target = VoteTarget::Question("q1".to_string());
    backend.seed_author(&target, "author-b", 10).await;
    let recorder = recorder(&backend);

    let first = recorder
        .cast_vote("voter-a", &target, VoteDirection::Upvoted)
        .await
        .unwrap();
    assert_eq!(first.vote_count, 1);
    assert_eq!(first.user_vote, Some(VoteDirection::Upvoted));

    let second = recorder
        .cast_vote("voter-a", &target, VoteDirection::Upvoted)
        .await
        .unwrap();
    assert_eq!(second.vote_count, 0);
    assert_eq!(second.user_vote, None);

    assert!(backend.vote_rows(&target).await.is_empty());
    assert_eq!(backend.reputation_of("author-b").await, 10);
}

#[tokio::test]
async fn reversing_a_vote_keeps_one_row_and_nets_minus_two() {
    let backend = MemoryBackend::default();
    let target = VoteTarget::Answer("a1".to_string());
    backend.seed_author(&target, "author-b", 10).await;
    let recorder = recorder(&backend);

    recorder
        .cast_vote("voter-a", &target, VoteDirection::Upvoted)
        .await
        .unwrap();
    let outcome = recorder
        .cast_vote("voter-a", &target, VoteDirection::Downvoted)
        .await
        .unwrap();

    let rows = backend.vote_rows(&target).await;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].direction, VoteDirection::Downvoted);
    assert_eq!(outcome.vote_count, -1);
    assert_eq!(outcome.user_vote, Some(VoteDirection::Downvoted));

    // +1 for the upvote, then -2 for the reversal.
    assert_eq!(backend.reputation_of("author-b").await, 9);
}

#[tokio::test]
async fn aggregate_count_reflects_all_voters_regardless_of_order() {
    let backend = MemoryBackend::default();
    let target = VoteTarget::Question("q1".to_string());
    backend.seed_author(&target, "author-b", 0).await;
    let recorder = recorder(&backend);

    recorder
        .cast_vote("voter-1", &target, VoteDirection::Upvoted)
        .await
        .unwrap();
    recorder
        .cast_vote("voter-2", &target, VoteDirection::Downvoted)
        .await
        .unwrap();
    recorder
        .cast_vote("voter-3", &target, VoteDirection::Upvoted)
        .await
        .unwrap();
    let outcome = recorder
        .cast_vote("voter-4", &target, VoteDirection::Upvoted)
        .await
        .unwrap();

    // 3 upvotes - 1 downvote.
    assert_eq!(outcome.vote_count, 2);
}

#[tokio::test]
async fn upvote_then_toggle_off_round_trips_reputation_and_count() {
    // Voter A upvotes question Q (author B, reputation 5): B goes to 6 and
    // the count to 1. A clicks upvote again: the row is deleted, B reverts
    // to 5, and the count returns to 0.
    let backend = MemoryBackend::default();
    let target = VoteTarget::Question("q".to_string());
    backend.seed_author(&target, "author-b", 5).await;
    let recorder = recorder(&backend);

    let upvoted = recorder
        .cast_vote("voter-a", &target, VoteDirection::Upvoted)
        .await
        .unwrap();
    assert_eq!(upvoted.vote_count, 1);
    assert_eq!(backend.reputation_of("author-b").await, 6);

    let toggled = recorder
        .cast_vote("voter-a", &target, VoteDirection::Upvoted)
        .await
        .unwrap();
    assert_eq!(toggled.vote_count, 0);
    assert_eq!(backend.reputation_of("author-b").await, 5);
    assert!(backend.vote_rows(&target).await.is_empty());
}

#[tokio::test]
async fn voting_on_a_missing_target_surfaces_not_found() {
    let backend = MemoryBackend::default();
    let recorder = recorder(&backend);
    let target = VoteTarget::Question("ghost".to_string());

    let error = recorder
        .cast_vote("voter-a", &target, VoteDirection::Upvoted)
        .await
        .unwrap_err();
    assert!(matches!(error, crate::Error::NotFound(_)));
}

#[tokio::test]
async fn blank_voter_id_is_rejected_before_any_remote_call() {
    let backend = MemoryBackend::default();
    let recorder = recorder(&backend);
    let target = VoteTarget::Question("q1".to_string());

    let error = recorder
        .cast_vote("  ", &target, VoteDirection::Upvoted)
        .await
        .unwrap_err();
    assert!(matches!(error, crate::Error::InvalidInput(_)));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_adjustments_are_serialized_per_author() {
    // Each raw read-modify-write pair sleeps between read and write, so
    // unserialized adjusters would overlap and lose updates. Behind the
    // adjuster the final count is deterministic.
    let backend = MemoryBackend::racy(Duration::from_millis(2));
    backend
        .seed_author(&VoteTarget::Question("q".to_string()), "author-b", 0)
        .await;
    let adjuster = Arc::new(ReputationAdjuster::new(backend.clone()));

    let mut handles = Vec::new();
    for i in 0..20 {
        let adjuster = adjuster.clone();
        let delta = if i % 4 == 0 { -1 } else { 1 };
        handles.push(tokio::spawn(async move {
            adjuster.adjust("author-b", delta).await
        }));
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    // 15 increments, 5 decrements.
    assert_eq!(backend.reputation_of("author-b").await, 10);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn adjustments_for_different_authors_do_not_contend() {
    let backend = MemoryBackend::racy(Duration::from_millis(1));
    let adjuster = Arc::new(ReputationAdjuster::new(backend.clone()));

    let mut handles = Vec::new();
    for author in ["alpha", "beta"] {
        for _ in 0..10 {
            let adjuster = adjuster.clone();
            handles.push(tokio::spawn(
                async move { adjuster.adjust(author, 1).await },
            ));
        }
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    assert_eq!(backend.reputation_of("alpha").await, 10);
    assert_eq!(backend.reputation_of("beta").await, 10);
}
