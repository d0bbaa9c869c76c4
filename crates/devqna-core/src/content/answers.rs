//! Answer reads and writes.

use std::time::Duration;

use crate::appwrite::{Query, RowPage, TablesClient};
use crate::content::CREATED_AT;
use crate::deadline::{with_deadline, DEFAULT_DEADLINE};
use crate::models::{Answer, NewAnswer};
use crate::schema::ANSWERS_TABLE;
use crate::Result;

/// Answer fetcher over the remote answers table.
#[derive(Clone)]
pub struct Answers {
    tables: TablesClient,
    deadline: Duration,
}

impl Answers {
    #[must_use]
    pub fn new(tables: TablesClient) -> Self {
        Self::with_deadline(tables, DEFAULT_DEADLINE)
    }

    #[must_use]
    pub const fn with_deadline(tables: TablesClient, deadline: Duration) -> Self {
        Self { tables, deadline }
    }

    /// List every answer to a question, newest-first.
    pub async fn list_by_question(&self, question_id: &str) -> Result<RowPage<Answer>> {
        with_deadline(
            self.deadline,
            self.tables.list_rows(
                ANSWERS_TABLE,
                &[
                    Query::equal("questionId", question_id),
                    Query::order_desc(CREATED_AT),
                ],
            ),
        )
        .await
    }

    /// Fetch an answer by id.
    pub async fn get(&self, answer_id: &str) -> Result<Option<Answer>> {
        with_deadline(self.deadline, self.tables.get_row(ANSWERS_TABLE, answer_id)).await
    }

    /// Create an answer.
    pub async fn create(&self, answer: &NewAnswer) -> Result<Answer> {
        with_deadline(self.deadline, self.tables.create_row(ANSWERS_TABLE, answer)).await
    }
}
