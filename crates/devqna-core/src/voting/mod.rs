//! The vote/reputation flow.
//!
//! Casting a vote is a sequence of remote CRUD calls with no transaction
//! around it: look up the voter's existing row, create/flip/delete it, adjust
//! the author's reputation, then recompute the aggregate by re-listing every
//! row for the target. A failure partway through surfaces the upstream error
//! and leaves no compensating action.
//!
//! The flow is written against the small traits below so the whole thing is
//! testable without a network; `live` wires them to the BaaS clients.

mod adjuster;
mod live;
mod plan;

pub use adjuster::ReputationAdjuster;
pub use live::{LiveAuthorLookup, LivePrefsStore, LiveVoteStore};
pub use plan::{plan_transition, VotePlan};

use serde::{Deserialize, Serialize};

use crate::models::{tally, NewVote, Vote, VoteDirection, VoteTarget};
use crate::{Error, Result};

/// Storage seam for vote rows.
pub trait VoteStore {
    /// The voter's existing row for the target, if any. At most one is
    /// expected per (target, voter); the backend does not enforce this.
    fn find_by_voter(
        &self,
        target: &VoteTarget,
        voter_id: &str,
    ) -> impl std::future::Future<Output = Result<Option<Vote>>> + Send;

    /// Every vote row for the target.
    fn list_for_target(
        &self,
        target: &VoteTarget,
    ) -> impl std::future::Future<Output = Result<Vec<Vote>>> + Send;

    /// Create a vote row.
    fn create(&self, vote: &NewVote) -> impl std::future::Future<Output = Result<Vote>> + Send;

    /// Flip an existing row's direction.
    fn set_direction(
        &self,
        vote_id: &str,
        direction: VoteDirection,
    ) -> impl std::future::Future<Output = Result<()>> + Send;

    /// Delete a vote row.
    fn delete(&self, vote_id: &str) -> impl std::future::Future<Output = Result<()>> + Send;
}

/// Resolves the author of a vote target.
pub trait AuthorLookup {
    fn author_of(
        &self,
        target: &VoteTarget,
    ) -> impl std::future::Future<Output = Result<String>> + Send;
}

/// Read/write access to a user's preference bag.
pub trait PrefsStore {
    fn get_prefs(
        &self,
        user_id: &str,
    ) -> impl std::future::Future<Output = Result<crate::models::UserPrefs>> + Send;

    fn update_prefs(
        &self,
        user_id: &str,
        prefs: &crate::models::UserPrefs,
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

/// Result of casting a vote: the recomputed aggregate and the voter's state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteOutcome {
    /// Upvotes minus downvotes over every row for the target.
    pub vote_count: i64,
    /// The voter's vote after this interaction; `None` after a toggle-off.
    pub user_vote: Option<VoteDirection>,
}

/// Records votes and keeps the author's reputation in step.
pub struct VoteRecorder<V, A, P> {
    votes: V,
    authors: A,
    adjuster: ReputationAdjuster<P>,
}

impl<V: VoteStore, A: AuthorLookup, P: PrefsStore> VoteRecorder<V, A, P> {
    pub fn new(votes: V, authors: A, prefs: P) -> Self {
        Self {
            votes,
            authors,
            adjuster: ReputationAdjuster::new(prefs),
        }
    }

    /// Cast, switch, or retract a vote.
    ///
    /// The author's reputation moves by the plan's delta; the aggregate is
    /// recomputed from the full row listing rather than a cached counter.
    pub async fn cast_vote(
        &self,
        voter_id: &str,
        target: &VoteTarget,
        desired: VoteDirection,
    ) -> Result<VoteOutcome> {
        if voter_id.trim().is_empty() {
            return Err(Error::InvalidInput("Voter id is required".to_string()));
        }

        let existing = self.votes.find_by_voter(target, voter_id).await?;
        let plan = plan_transition(existing.as_ref().map(|vote| vote.direction), desired);

        match existing {
            // Same direction again: toggle the vote off.
            Some(vote) if vote.direction == desired => {
                self.votes.delete(&vote.id).await?;
            }
            // Opposite direction: flip the row in place.
            Some(vote) => {
                self.votes.set_direction(&vote.id, desired).await?;
            }
            // First interaction: record a fresh vote.
            None => {
                self.votes
                    .create(&NewVote {
                        target: target.clone(),
                        voted_by_id: voter_id.to_string(),
                        direction: desired,
                    })
                    .await?;
            }
        }

        let author_id = self.authors.author_of(target).await?;
        self.adjuster
            .adjust(&author_id, plan.reputation_delta())
            .await?;

        let votes = self.votes.list_for_target(target).await?;
        Ok(VoteOutcome {
            vote_count: tally(&votes),
            user_vote: plan.resulting_direction(),
        })
    }
}

#[cfg(test)]
mod tests;
