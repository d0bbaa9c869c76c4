use std::sync::Arc;

use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use devqna_core::appwrite::{TablesClient, UsersClient};
use devqna_core::schema::DATABASE_ID;
use devqna_core::voting::{
    LiveAuthorLookup, LivePrefsStore, LiveVoteStore, VoteOutcome, VoteRecorder,
};
use devqna_core::{VoteDirection, VoteTarget};

use crate::config::AppConfig;
use crate::error::AppError;

type LiveRecorder = VoteRecorder<LiveVoteStore, LiveAuthorLookup, LivePrefsStore>;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    recorder: Arc<LiveRecorder>,
}

impl AppState {
    pub fn from_config(config: Arc<AppConfig>) -> Result<Self, devqna_core::Error> {
        let tables = TablesClient::new(&config.baas, DATABASE_ID)?;
        let users = UsersClient::new(&config.baas)?;
        let recorder = VoteRecorder::new(
            LiveVoteStore::new(tables.clone()),
            LiveAuthorLookup::new(tables),
            LivePrefsStore::new(users),
        );
        Ok(Self {
            config,
            recorder: Arc::new(recorder),
        })
    }
}

pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/api/vote", post(cast_vote))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_headers(Any)
                .allow_methods(Any),
        )
        .with_state(state)
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    timestamp: i64,
}

async fn healthz() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        timestamp: Utc::now().timestamp(),
    })
}

#[derive(Debug, Deserialize)]
struct VoteRequest {
    #[serde(rename = "votedById")]
    voted_by_id: String,
    #[serde(rename = "voteStatus")]
    vote_status: String,
    #[serde(rename = "type")]
    kind: String,
    #[serde(rename = "typeId")]
    type_id: String,
}

async fn cast_vote(
    State(state): State<AppState>,
    Json(request): Json<VoteRequest>,
) -> Result<Json<VoteOutcome>, AppError> {
    let target = VoteTarget::from_parts(&request.kind, request.type_id)
        .map_err(|error| AppError::bad_request(error.to_string()))?;
    let direction: VoteDirection = request
        .vote_status
        .parse()
        .map_err(|error: devqna_core::Error| AppError::bad_request(error.to_string()))?;

    let outcome = state
        .recorder
        .cast_vote(&request.voted_by_id, &target, direction)
        .await?;

    tracing::info!(
        target_kind = %target.kind(),
        target_id = target.id(),
        vote_count = outcome.vote_count,
        "Recorded vote"
    );
    Ok(Json(outcome))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vote_request_parses_wire_field_names() {
        let request: VoteRequest = serde_json::from_str(
            r#"{
                "votedById": "user-1",
                "voteStatus": "upvoted",
                "type": "question",
                "typeId": "q1"
            }"#,
        )
        .unwrap();

        assert_eq!(request.voted_by_id, "user-1");
        assert_eq!(request.vote_status, "upvoted");
        assert_eq!(request.kind, "question");
        assert_eq!(request.type_id, "q1");
    }

    #[test]
    fn vote_outcome_serializes_wire_shape() {
        let outcome = VoteOutcome {
            vote_count: 3,
            user_vote: Some(VoteDirection::Upvoted),
        };
        let value = serde_json::to_value(outcome).unwrap();
        assert_eq!(value["vote_count"], 3);
        assert_eq!(value["user_vote"], "upvoted");

        let retracted = VoteOutcome {
            vote_count: 0,
            user_vote: None,
        };
        let value = serde_json::to_value(retracted).unwrap();
        assert_eq!(value["user_vote"], serde_json::Value::Null);
    }
}
