//! Vote row reads. Writes go through [`crate::voting`].

use std::time::Duration;

use crate::appwrite::{Query, RowPage, TablesClient};
use crate::deadline::{with_deadline, DEFAULT_DEADLINE};
use crate::models::{Vote, VoteTarget};
use crate::schema::VOTES_TABLE;
use crate::Result;

/// Vote fetcher over the remote votes table.
#[derive(Clone)]
pub struct Votes {
    tables: TablesClient,
    deadline: Duration,
}

impl Votes {
    #[must_use]
    pub fn new(tables: TablesClient) -> Self {
        Self::with_deadline(tables, DEFAULT_DEADLINE)
    }

    #[must_use]
    pub const fn with_deadline(tables: TablesClient, deadline: Duration) -> Self {
        Self { tables, deadline }
    }

    /// List every vote row for a target. The aggregate count is always
    /// recomputed from this listing via [`crate::models::tally`].
    pub async fn list_for_target(&self, target: &VoteTarget) -> Result<RowPage<Vote>> {
        with_deadline(
            self.deadline,
            self.tables.list_rows(VOTES_TABLE, &target_queries(target)),
        )
        .await
    }

    /// Find the vote a specific voter cast on a target, if any.
    ///
    /// At most one row is expected per (target, voter); the backend does not
    /// enforce this, so the first row wins.
    pub async fn find_by_voter(
        &self,
        target: &VoteTarget,
        voter_id: &str,
    ) -> Result<Option<Vote>> {
        let mut queries = target_queries(target);
        queries.push(Query::equal("votedById", voter_id));

        let page: RowPage<Vote> = with_deadline(
            self.deadline,
            self.tables.list_rows(VOTES_TABLE, &queries),
        )
        .await?;
        Ok(page.rows.into_iter().next())
    }
}

fn target_queries(target: &VoteTarget) -> Vec<Query> {
    vec![
        Query::equal("type", target.kind().as_str()),
        Query::equal("typeId", target.id()),
    ]
}
