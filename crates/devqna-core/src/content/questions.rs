//! Question reads and writes.

use std::time::Duration;

use crate::appwrite::{Query, RowPage, TablesClient};
use crate::content::CREATED_AT;
use crate::deadline::{with_deadline, DEFAULT_DEADLINE};
use crate::models::{NewQuestion, Question};
use crate::schema::QUESTIONS_TABLE;
use crate::Result;

/// Question fetcher over the remote questions table.
#[derive(Clone)]
pub struct Questions {
    tables: TablesClient,
    deadline: Duration,
}

impl Questions {
    #[must_use]
    pub fn new(tables: TablesClient) -> Self {
        Self::with_deadline(tables, DEFAULT_DEADLINE)
    }

    #[must_use]
    pub const fn with_deadline(tables: TablesClient, deadline: Duration) -> Self {
        Self { tables, deadline }
    }

    /// List questions newest-first with limit/offset paging.
    pub async fn list(&self, limit: u64, offset: u64) -> Result<RowPage<Question>> {
        with_deadline(
            self.deadline,
            self.tables.list_rows(
                QUESTIONS_TABLE,
                &[
                    Query::order_desc(CREATED_AT),
                    Query::limit(limit),
                    Query::offset(offset),
                ],
            ),
        )
        .await
    }

    /// List questions carrying the given tag, newest-first.
    pub async fn list_by_tag(
        &self,
        tag: &str,
        limit: u64,
        offset: u64,
    ) -> Result<RowPage<Question>> {
        with_deadline(
            self.deadline,
            self.tables.list_rows(
                QUESTIONS_TABLE,
                &[
                    Query::equal("tags", tag),
                    Query::order_desc(CREATED_AT),
                    Query::limit(limit),
                    Query::offset(offset),
                ],
            ),
        )
        .await
    }

    /// Fulltext search over question titles.
    pub async fn search(&self, text: &str, limit: u64) -> Result<RowPage<Question>> {
        with_deadline(
            self.deadline,
            self.tables.list_rows(
                QUESTIONS_TABLE,
                &[
                    Query::search("title", text),
                    Query::order_desc(CREATED_AT),
                    Query::limit(limit),
                ],
            ),
        )
        .await
    }

    /// Fetch a question by id.
    pub async fn get(&self, question_id: &str) -> Result<Option<Question>> {
        with_deadline(
            self.deadline,
            self.tables.get_row(QUESTIONS_TABLE, question_id),
        )
        .await
    }

    /// Create a question.
    pub async fn create(&self, question: &NewQuestion) -> Result<Question> {
        with_deadline(
            self.deadline,
            self.tables.create_row(QUESTIONS_TABLE, question),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::config::BaasConfig;
    use crate::schema::DATABASE_ID;

    #[tokio::test(flavor = "multi_thread")]
    #[ignore = "Requires DEVQNA_APPWRITE_* env vars plus network access"]
    async fn live_pages_do_not_overlap_and_stay_newest_first() {
        let _ = dotenvy::dotenv();

        let config = BaasConfig::from_env()
            .expect("BaaS env parsing should not error")
            .expect("BaaS config should be present");
        let questions = Questions::new(TablesClient::new(&config, DATABASE_ID).unwrap());

        let first = questions.list(20, 0).await.unwrap();
        let second = questions.list(20, 20).await.unwrap();

        let first_ids: HashSet<String> =
            first.rows.iter().map(|question| question.id.clone()).collect();
        assert!(second
            .rows
            .iter()
            .all(|question| !first_ids.contains(&question.id)));

        let mut all = first.rows;
        all.extend(second.rows);
        assert!(all
            .windows(2)
            .all(|pair| pair[0].created_at >= pair[1].created_at));
    }
}
