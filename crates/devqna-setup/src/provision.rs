//! Provisioning steps: database, content tables, attachment bucket.

use std::future::Future;
use std::time::Duration;

use devqna_core::appwrite::storage::NewBucket;
use devqna_core::appwrite::{IndexKind, ProvisioningClient, StorageClient};
use devqna_core::config::BaasConfig;
use devqna_core::schema::{
    columns, ANSWERS_TABLE, ATTACHMENT_BUCKET, ATTACHMENT_EXTENSIONS, ATTACHMENT_MAX_BYTES,
    COMMENTS_TABLE, DATABASE_ID, QUESTIONS_TABLE, VOTES_TABLE,
};
use devqna_core::{Error, Result};

const MAX_ATTEMPTS: u32 = 3;
const INITIAL_RETRY_DELAY: Duration = Duration::from_secs(1);

/// Columns are created asynchronously on the backend; indexes over them fail
/// until they become available.
const COLUMN_SETTLE_DELAY: Duration = Duration::from_secs(2);

/// Create the database and all content tables.
pub async fn provision_database(config: &BaasConfig) -> Result<()> {
    let client = ProvisioningClient::new(config)?;

    ensure_database(&client).await?;
    create_questions_table(&client).await?;
    create_answers_table(&client).await?;
    create_votes_table(&client).await?;
    create_comments_table(&client).await?;

    tracing::info!("Database provisioning complete");
    Ok(())
}

/// Create the question-attachment bucket.
pub async fn provision_storage(config: &BaasConfig) -> Result<()> {
    let storage = StorageClient::new(config)?;
    let bucket = NewBucket {
        bucket_id: ATTACHMENT_BUCKET.to_string(),
        name: ATTACHMENT_BUCKET.to_string(),
        maximum_file_size: ATTACHMENT_MAX_BYTES,
        allowed_extensions: ATTACHMENT_EXTENSIONS
            .iter()
            .map(ToString::to_string)
            .collect(),
    };

    safe_call("create bucket", || storage.create_bucket(&bucket)).await?;
    tracing::info!("Storage provisioning complete");
    Ok(())
}

async fn ensure_database(client: &ProvisioningClient) -> Result<()> {
    match retry_with_backoff(|| client.get_database(DATABASE_ID)).await {
        Ok(()) => {
            tracing::info!("Database {DATABASE_ID} already exists");
            Ok(())
        }
        Err(Error::Api { status: 404, .. }) => {
            tracing::info!("Creating database {DATABASE_ID}");
            retry_with_backoff(|| client.create_database(DATABASE_ID, "DevQnA Database")).await
        }
        Err(error) => Err(error),
    }
}

async fn create_questions_table(client: &ProvisioningClient) -> Result<()> {
    safe_call("create questions table", || {
        client.create_table(DATABASE_ID, QUESTIONS_TABLE)
    })
    .await?;

    let string_columns = [
        ("title", columns::TITLE_MAX, true, false),
        ("content", columns::CONTENT_MAX, true, false),
        ("authorId", columns::ID_MAX, true, false),
        ("tags", columns::TAG_MAX, false, true),
        ("attachmentId", columns::ID_MAX, false, false),
    ];
    create_string_columns(client, QUESTIONS_TABLE, &string_columns).await?;

    tokio::time::sleep(COLUMN_SETTLE_DELAY).await;

    create_indexes(
        client,
        QUESTIONS_TABLE,
        &[
            ("idx_title_fulltext", IndexKind::Fulltext, &["title"][..]),
            ("idx_authorid_key", IndexKind::Key, &["authorId"][..]),
            ("idx_tags_key", IndexKind::Key, &["tags"][..]),
        ],
    )
    .await
}

async fn create_answers_table(client: &ProvisioningClient) -> Result<()> {
    safe_call("create answers table", || {
        client.create_table(DATABASE_ID, ANSWERS_TABLE)
    })
    .await?;

    let string_columns = [
        ("content", columns::CONTENT_MAX, true, false),
        ("authorId", columns::ID_MAX, true, false),
        ("questionId", columns::ID_MAX, true, false),
    ];
    create_string_columns(client, ANSWERS_TABLE, &string_columns).await?;

    tokio::time::sleep(COLUMN_SETTLE_DELAY).await;

    create_indexes(
        client,
        ANSWERS_TABLE,
        &[("idx_questionid_key", IndexKind::Key, &["questionId"][..])],
    )
    .await
}

async fn create_votes_table(client: &ProvisioningClient) -> Result<()> {
    safe_call("create votes table", || {
        client.create_table(DATABASE_ID, VOTES_TABLE)
    })
    .await?;

    let string_columns = [
        ("voteStatus", columns::VOTE_STATUS_MAX, true, false),
        ("votedById", columns::ID_MAX, true, false),
        ("typeId", columns::ID_MAX, true, false),
        ("type", columns::TARGET_KIND_MAX, true, false),
    ];
    create_string_columns(client, VOTES_TABLE, &string_columns).await?;

    tokio::time::sleep(COLUMN_SETTLE_DELAY).await;

    create_indexes(
        client,
        VOTES_TABLE,
        &[
            ("idx_typeid_key", IndexKind::Key, &["typeId"][..]),
            ("idx_votedbyid_key", IndexKind::Key, &["votedById"][..]),
            ("idx_type_key", IndexKind::Key, &["type"][..]),
        ],
    )
    .await
}

async fn create_comments_table(client: &ProvisioningClient) -> Result<()> {
    safe_call("create comments table", || {
        client.create_table(DATABASE_ID, COMMENTS_TABLE)
    })
    .await?;

    let string_columns = [
        ("content", columns::COMMENT_MAX, true, false),
        ("authorId", columns::ID_MAX, true, false),
        ("typeId", columns::ID_MAX, true, false),
        ("type", columns::TARGET_KIND_MAX, true, false),
    ];
    create_string_columns(client, COMMENTS_TABLE, &string_columns).await?;

    tokio::time::sleep(COLUMN_SETTLE_DELAY).await;

    create_indexes(
        client,
        COMMENTS_TABLE,
        &[("idx_typeid_key", IndexKind::Key, &["typeId"][..])],
    )
    .await
}

async fn create_string_columns(
    client: &ProvisioningClient,
    table_id: &str,
    specs: &[(&str, usize, bool, bool)],
) -> Result<()> {
    for (key, size, required, array) in specs {
        safe_call(&format!("create column {table_id}.{key}"), || {
            client.create_string_column(DATABASE_ID, table_id, key, *size, *required, *array)
        })
        .await?;
    }
    Ok(())
}

async fn create_indexes(
    client: &ProvisioningClient,
    table_id: &str,
    specs: &[(&str, IndexKind, &[&str])],
) -> Result<()> {
    for (key, kind, index_columns) in specs {
        safe_call(&format!("create index {table_id}.{key}"), || {
            client.create_index(DATABASE_ID, table_id, key, *kind, index_columns)
        })
        .await?;
    }
    Ok(())
}

/// Run a provisioning call, treating "already exists" (HTTP 409) as success.
async fn safe_call<F, Fut>(description: &str, operation: F) -> Result<()>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<()>>,
{
    match retry_with_backoff(operation).await {
        Ok(()) => {
            tracing::info!("{description}: done");
            Ok(())
        }
        Err(error) if error.is_conflict() => {
            tracing::warn!("{description}: already exists - skipping");
            Ok(())
        }
        Err(error) => {
            tracing::error!("{description}: {error}");
            Err(error)
        }
    }
}

/// Retry transient failures with exponential backoff.
///
/// 404 and 409 are definitive answers and are never retried.
async fn retry_with_backoff<T, F, Fut>(mut operation: F) -> Result<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T>>,
{
    let mut delay = INITIAL_RETRY_DELAY;
    let mut attempt = 1;

    loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(error) => {
                if !is_transient(&error) || attempt >= MAX_ATTEMPTS {
                    return Err(error);
                }
                tracing::warn!("Attempt {attempt} failed ({error}); retrying in {delay:?}");
                tokio::time::sleep(delay).await;
                delay *= 2;
                attempt += 1;
            }
        }
    }
}

fn is_transient(error: &Error) -> bool {
    match error {
        Error::Http(_) => true,
        Error::Api { status, .. } => !matches!(*status, 404 | 409),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicU32, Ordering};

    use super::*;

    fn api_error(status: u16) -> Error {
        Error::Api {
            status,
            message: "test".to_string(),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn retry_recovers_from_transient_gateway_errors() {
        let calls = AtomicU32::new(0);

        let result = retry_with_backoff(|| {
            let attempt = calls.fetch_add(1, Ordering::SeqCst);
            async move {
                if attempt < 2 {
                    Err(api_error(502))
                } else {
                    Ok("done")
                }
            }
        })
        .await;

        assert_eq!(result.unwrap(), "done");
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn retry_gives_up_after_max_attempts() {
        let calls = AtomicU32::new(0);

        let result: Result<()> = retry_with_backoff(|| {
            calls.fetch_add(1, Ordering::SeqCst);
            async { Err(api_error(502)) }
        })
        .await;

        assert!(result.is_err());
        assert_eq!(calls.load(Ordering::SeqCst), MAX_ATTEMPTS);
    }

    #[tokio::test]
    async fn conflicts_and_missing_are_not_retried() {
        for status in [404, 409] {
            let calls = AtomicU32::new(0);
            let result: Result<()> = retry_with_backoff(|| {
                calls.fetch_add(1, Ordering::SeqCst);
                async move { Err(api_error(status)) }
            })
            .await;

            assert!(result.is_err());
            assert_eq!(calls.load(Ordering::SeqCst), 1);
        }
    }

    #[tokio::test]
    async fn safe_call_swallows_conflicts() {
        let result = safe_call("create table", || async { Err(api_error(409)) }).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn safe_call_propagates_other_failures() {
        let result = safe_call("create table", || async { Err(api_error(401)) }).await;
        assert!(result.is_err());
    }

    #[test]
    fn validation_failures_are_not_transient() {
        assert!(!is_transient(&Error::InvalidInput("bad".to_string())));
        assert!(is_transient(&api_error(502)));
        assert!(!is_transient(&api_error(409)));
    }
}
