//! BaaS-backed implementations of the voting seams.

use serde_json::json;

use crate::appwrite::{TablesClient, UsersClient};
use crate::content::{Answers, Questions, Votes};
use crate::models::{NewVote, UserPrefs, Vote, VoteDirection, VoteTarget};
use crate::schema::VOTES_TABLE;
use crate::voting::{AuthorLookup, PrefsStore, VoteStore};
use crate::{Error, Result};

/// Vote rows stored in the remote votes table.
#[derive(Clone)]
pub struct LiveVoteStore {
    votes: Votes,
    tables: TablesClient,
}

impl LiveVoteStore {
    #[must_use]
    pub fn new(tables: TablesClient) -> Self {
        Self {
            votes: Votes::new(tables.clone()),
            tables,
        }
    }
}

impl VoteStore for LiveVoteStore {
    async fn find_by_voter(&self, target: &VoteTarget, voter_id: &str) -> Result<Option<Vote>> {
        self.votes.find_by_voter(target, voter_id).await
    }

    async fn list_for_target(&self, target: &VoteTarget) -> Result<Vec<Vote>> {
        Ok(self.votes.list_for_target(target).await?.rows)
    }

    async fn create(&self, vote: &NewVote) -> Result<Vote> {
        self.tables.create_row(VOTES_TABLE, &vote.to_wire()).await
    }

    async fn set_direction(&self, vote_id: &str, direction: VoteDirection) -> Result<()> {
        let _: Vote = self
            .tables
            .update_row(
                VOTES_TABLE,
                vote_id,
                &json!({ "voteStatus": direction.as_str() }),
            )
            .await?;
        Ok(())
    }

    async fn delete(&self, vote_id: &str) -> Result<()> {
        self.tables.delete_row(VOTES_TABLE, vote_id).await
    }
}

/// Author resolution via the questions and answers tables.
#[derive(Clone)]
pub struct LiveAuthorLookup {
    questions: Questions,
    answers: Answers,
}

impl LiveAuthorLookup {
    #[must_use]
    pub fn new(tables: TablesClient) -> Self {
        Self {
            questions: Questions::new(tables.clone()),
            answers: Answers::new(tables),
        }
    }
}

impl AuthorLookup for LiveAuthorLookup {
    async fn author_of(&self, target: &VoteTarget) -> Result<String> {
        match target {
            VoteTarget::Question(id) => Ok(self
                .questions
                .get(id)
                .await?
                .ok_or_else(|| Error::NotFound(format!("question {id}")))?
                .author_id),
            VoteTarget::Answer(id) => Ok(self
                .answers
                .get(id)
                .await?
                .ok_or_else(|| Error::NotFound(format!("answer {id}")))?
                .author_id),
        }
    }
}

/// Preference bags behind the admin users surface.
#[derive(Clone)]
pub struct LivePrefsStore {
    users: UsersClient,
}

impl LivePrefsStore {
    #[must_use]
    pub const fn new(users: UsersClient) -> Self {
        Self { users }
    }
}

impl PrefsStore for LivePrefsStore {
    async fn get_prefs(&self, user_id: &str) -> Result<UserPrefs> {
        self.users.get_prefs(user_id).await
    }

    async fn update_prefs(&self, user_id: &str, prefs: &UserPrefs) -> Result<()> {
        self.users.update_prefs(user_id, prefs).await
    }
}
