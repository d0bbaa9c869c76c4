//! Bounded-timeout guard for remote calls.
//!
//! Every content fetch races the remote call against a ceiling. The guard is
//! built on `tokio::time::timeout`, so an abandoned call is dropped and
//! cancelled rather than left running with its result ignored.

use std::future::Future;
use std::time::Duration;

use crate::{Error, Result};

/// Default ceiling applied to content fetches.
pub const DEFAULT_DEADLINE: Duration = Duration::from_secs(5);

/// Run `future` with a deadline, surfacing [`Error::Timeout`] when exceeded.
pub async fn with_deadline<T>(
    deadline: Duration,
    future: impl Future<Output = Result<T>>,
) -> Result<T> {
    match tokio::time::timeout(deadline, future).await {
        Ok(result) => result,
        Err(_) => Err(Error::Timeout(deadline)),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    use super::*;

    #[tokio::test]
    async fn fast_calls_pass_through() {
        let result = with_deadline(Duration::from_millis(100), async { Ok(42) }).await;
        assert_eq!(result.unwrap(), 42);
    }

    #[tokio::test]
    async fn slow_calls_surface_timeout() {
        let result: Result<()> = with_deadline(Duration::from_millis(10), async {
            tokio::time::sleep(Duration::from_millis(200)).await;
            Ok(())
        })
        .await;

        assert!(matches!(result, Err(Error::Timeout(_))));
    }

    #[tokio::test]
    async fn timed_out_call_is_cancelled() {
        let completed = Arc::new(AtomicBool::new(false));
        let flag = completed.clone();

        let result: Result<()> = with_deadline(Duration::from_millis(10), async move {
            tokio::time::sleep(Duration::from_millis(50)).await;
            flag.store(true, Ordering::SeqCst);
            Ok(())
        })
        .await;
        assert!(matches!(result, Err(Error::Timeout(_))));

        // The guarded future was dropped at the deadline; give it ample time
        // to prove it is no longer running.
        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(!completed.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn errors_inside_the_deadline_pass_through() {
        let result: Result<()> = with_deadline(Duration::from_millis(100), async {
            Err(Error::InvalidInput("bad".to_string()))
        })
        .await;
        assert!(matches!(result, Err(Error::InvalidInput(_))));
    }
}
