//! Comment reads and writes. Comments are append-only.

use std::time::Duration;

use crate::appwrite::{Query, RowPage, TablesClient};
use crate::content::CREATED_AT;
use crate::deadline::{with_deadline, DEFAULT_DEADLINE};
use crate::models::{Comment, NewComment, VoteTarget};
use crate::schema::COMMENTS_TABLE;
use crate::Result;

/// Comment fetcher over the remote comments table.
#[derive(Clone)]
pub struct Comments {
    tables: TablesClient,
    deadline: Duration,
}

impl Comments {
    #[must_use]
    pub fn new(tables: TablesClient) -> Self {
        Self::with_deadline(tables, DEFAULT_DEADLINE)
    }

    #[must_use]
    pub const fn with_deadline(tables: TablesClient, deadline: Duration) -> Self {
        Self { tables, deadline }
    }

    /// List comments attached to a question or answer, newest-first.
    pub async fn list_for_target(&self, target: &VoteTarget) -> Result<RowPage<Comment>> {
        with_deadline(
            self.deadline,
            self.tables.list_rows(
                COMMENTS_TABLE,
                &[
                    Query::equal("type", target.kind().as_str()),
                    Query::equal("typeId", target.id()),
                    Query::order_desc(CREATED_AT),
                ],
            ),
        )
        .await
    }

    /// Create a comment.
    pub async fn create(&self, comment: &NewComment) -> Result<Comment> {
        with_deadline(
            self.deadline,
            self.tables.create_row(COMMENTS_TABLE, &comment.to_wire()),
        )
        .await
    }
}
