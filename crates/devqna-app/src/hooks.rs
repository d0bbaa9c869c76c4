//! Fetch hooks over the content services.
//!
//! Each hook owns an independent fetch lifecycle: it runs on mount, re-runs
//! when its parameters change, and exposes data/loading/error through the
//! resource state with manual refetch via `Resource::restart`. There is no
//! shared cache and no request de-duplication; two components asking for the
//! same row issue two independent remote calls.

use dioxus::prelude::*;

use devqna_core::appwrite::AuthSession;
use devqna_core::content::PlatformStats;
use devqna_core::models::{tally, Answer, Comment, Question, VoteDirection, VoteTarget};

use crate::services::SessionContext;
use crate::state::AppState;

/// Vote state of one target as seen by the current user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoteSnapshot {
    pub count: i64,
    pub user_vote: Option<VoteDirection>,
}

/// One page of questions plus the backend's total count.
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionPage {
    pub total: u64,
    pub questions: Vec<Question>,
}

/// Paginated question listing, newest first.
pub fn use_questions(
    limit: u64,
    offset: ReadOnlySignal<u64>,
) -> Resource<Result<QuestionPage, String>> {
    let state = use_context::<AppState>();
    use_resource(move || {
        let content = (state.content)();
        let offset = offset();
        async move {
            let content = content.ok_or("Backend is not configured")?;
            let page = content
                .questions
                .list(limit, offset)
                .await
                .map_err(|error| error.to_string())?;
            Ok(QuestionPage {
                total: page.total,
                questions: page.rows,
            })
        }
    })
}

/// Questions carrying one tag, newest first.
pub fn use_questions_by_tag(
    tag: ReadOnlySignal<String>,
    limit: u64,
    offset: ReadOnlySignal<u64>,
) -> Resource<Result<QuestionPage, String>> {
    let state = use_context::<AppState>();
    use_resource(move || {
        let content = (state.content)();
        let tag = tag();
        let offset = offset();
        async move {
            let content = content.ok_or("Backend is not configured")?;
            let page = content
                .questions
                .list_by_tag(&tag, limit, offset)
                .await
                .map_err(|error| error.to_string())?;
            Ok(QuestionPage {
                total: page.total,
                questions: page.rows,
            })
        }
    })
}

/// One question by id.
pub fn use_question(
    question_id: ReadOnlySignal<String>,
) -> Resource<Result<Option<Question>, String>> {
    let state = use_context::<AppState>();
    use_resource(move || {
        let content = (state.content)();
        let question_id = question_id();
        async move {
            let content = content.ok_or("Backend is not configured")?;
            content
                .questions
                .get(&question_id)
                .await
                .map_err(|error| error.to_string())
        }
    })
}

/// Every answer to a question, newest first.
pub fn use_answers(
    question_id: ReadOnlySignal<String>,
) -> Resource<Result<Vec<Answer>, String>> {
    let state = use_context::<AppState>();
    use_resource(move || {
        let content = (state.content)();
        let question_id = question_id();
        async move {
            let content = content.ok_or("Backend is not configured")?;
            Ok(content
                .answers
                .list_by_question(&question_id)
                .await
                .map_err(|error| error.to_string())?
                .rows)
        }
    })
}

/// Aggregate count and the current user's vote for a target, recomputed from
/// the raw vote rows on every fetch.
pub fn use_votes(
    target: ReadOnlySignal<VoteTarget>,
) -> Resource<Result<VoteSnapshot, String>> {
    let state = use_context::<AppState>();
    let session = use_context::<SessionContext>();
    use_resource(move || {
        let content = (state.content)();
        let target = target();
        let user_id = session.current().map(|session| session.user.id);
        async move {
            let content = content.ok_or("Backend is not configured")?;
            let rows = content
                .votes
                .list_for_target(&target)
                .await
                .map_err(|error| error.to_string())?
                .rows;

            let user_vote = user_id.and_then(|user_id| {
                rows.iter()
                    .find(|vote| vote.voted_by_id == user_id)
                    .map(|vote| vote.direction)
            });
            Ok(VoteSnapshot {
                count: tally(&rows),
                user_vote,
            })
        }
    })
}

/// Comments attached to a target, newest first.
pub fn use_comments(
    target: ReadOnlySignal<VoteTarget>,
) -> Resource<Result<Vec<Comment>, String>> {
    let state = use_context::<AppState>();
    use_resource(move || {
        let content = (state.content)();
        let target = target();
        async move {
            let content = content.ok_or("Backend is not configured")?;
            Ok(content
                .comments
                .list_for_target(&target)
                .await
                .map_err(|error| error.to_string())?
                .rows)
        }
    })
}

/// Platform statistics for the home page.
pub fn use_stats() -> Resource<Result<PlatformStats, String>> {
    let state = use_context::<AppState>();
    use_resource(move || {
        let content = (state.content)();
        async move {
            let content = content.ok_or("Backend is not configured")?;
            content.stats.fetch().await.map_err(|error| error.to_string())
        }
    })
}

/// Display info for a content author.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorView {
    pub name: String,
    pub reputation: i64,
    pub avatar_url: Option<String>,
}

/// Resolve an author for display.
///
/// The identity subsystem exposes no public per-user lookup, so only the
/// signed-in user resolves fully; everyone else gets an abbreviated handle.
pub fn author_display(author_id: &str, session: Option<&AuthSession>) -> AuthorView {
    if let Some(session) = session {
        if session.user.id == author_id {
            return AuthorView {
                name: session.user.name.clone(),
                reputation: session.user.prefs.reputation,
                avatar_url: session.user.prefs.avatar_url.clone(),
            };
        }
    }

    let short: String = author_id.chars().take(6).collect();
    AuthorView {
        name: format!("User#{short}"),
        reputation: 0,
        avatar_url: None,
    }
}

#[cfg(test)]
mod tests {
    use devqna_core::appwrite::AuthUser;
    use devqna_core::models::UserPrefs;
    use pretty_assertions::assert_eq;

    use super::*;

    fn signed_in(user_id: &str, name: &str, reputation: i64) -> AuthSession {
        AuthSession {
            session_id: "sess".to_string(),
            secret: "secret".to_string(),
            expires_at: i64::MAX,
            user: AuthUser {
                id: user_id.to_string(),
                name: name.to_string(),
                email: None,
                prefs: UserPrefs {
                    reputation,
                    avatar_url: None,
                },
            },
        }
    }

    #[test]
    fn author_display_resolves_the_signed_in_user() {
        let session = signed_in("user-1", "Ada", 42);
        let view = author_display("user-1", Some(&session));
        assert_eq!(view.name, "Ada");
        assert_eq!(view.reputation, 42);
    }

    #[test]
    fn author_display_abbreviates_other_users() {
        let session = signed_in("user-1", "Ada", 42);
        let view = author_display("abcdef123456", Some(&session));
        assert_eq!(view.name, "User#abcdef");
        assert_eq!(view.reputation, 0);
    }

    #[test]
    fn author_display_without_session_falls_back() {
        let view = author_display("xyz", None);
        assert_eq!(view.name, "User#xyz");
    }
}
