//! Platform statistics for the home page.

use std::collections::HashSet;
use std::time::Duration;

use crate::appwrite::{Query, RowPage, TablesClient};
use crate::deadline::{with_deadline, DEFAULT_DEADLINE};
use crate::models::{Answer, Question};
use crate::schema::{ANSWERS_TABLE, QUESTIONS_TABLE};
use crate::Result;

/// Scan ceiling for the distinct-author approximation.
const AUTHOR_SCAN_LIMIT: u64 = 1000;
const AUTHOR_SCAN_PAGE: u64 = 100;

/// Headline numbers shown on the home page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlatformStats {
    pub questions: u64,
    pub answers: u64,
    /// Distinct question authors; an approximation of the user count, since
    /// the identity subsystem exposes no public listing.
    pub users: u64,
}

/// Stats fetcher over the content tables.
#[derive(Clone)]
pub struct Stats {
    tables: TablesClient,
    deadline: Duration,
}

impl Stats {
    #[must_use]
    pub fn new(tables: TablesClient) -> Self {
        Self::with_deadline(tables, DEFAULT_DEADLINE)
    }

    #[must_use]
    pub const fn with_deadline(tables: TablesClient, deadline: Duration) -> Self {
        Self { tables, deadline }
    }

    /// Fetch totals for questions, answers, and distinct question authors.
    pub async fn fetch(&self) -> Result<PlatformStats> {
        let questions: RowPage<Question> = with_deadline(
            self.deadline,
            self.tables
                .list_rows(QUESTIONS_TABLE, &[Query::limit(1)]),
        )
        .await?;
        let answers: RowPage<Answer> = with_deadline(
            self.deadline,
            self.tables.list_rows(ANSWERS_TABLE, &[Query::limit(1)]),
        )
        .await?;

        Ok(PlatformStats {
            questions: questions.total,
            answers: answers.total,
            users: self.distinct_question_authors().await?,
        })
    }

    async fn distinct_question_authors(&self) -> Result<u64> {
        let mut authors: HashSet<String> = HashSet::new();
        let mut offset = 0;

        while offset < AUTHOR_SCAN_LIMIT {
            let page: RowPage<Question> = with_deadline(
                self.deadline,
                self.tables.list_rows(
                    QUESTIONS_TABLE,
                    &[Query::limit(AUTHOR_SCAN_PAGE), Query::offset(offset)],
                ),
            )
            .await?;

            let fetched = page.rows.len() as u64;
            authors.extend(page.rows.into_iter().map(|question| question.author_id));

            if fetched < AUTHOR_SCAN_PAGE {
                break;
            }
            offset += fetched;
        }

        Ok(authors.len() as u64)
    }
}
