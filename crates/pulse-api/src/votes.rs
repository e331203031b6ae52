use axum::{
    Json,
    extract::{Query, State},
    response::IntoResponse,
};
use serde::Deserialize;

use pulse_types::api::VoteResponse;

use crate::error::ApiError;
use crate::{AppState, parse_object_id};

#[derive(Debug, Deserialize)]
pub struct VoteQuery {
    #[serde(rename = "postId")]
    pub post_id: Option<String>,
}

/// Record a vote. No per-user ledger exists — the client keeps its own
/// toggle flag — so this is a bare atomic increment.
pub async fn upvote(
    State(state): State<AppState>,
    Query(query): Query<VoteQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let post_id = parse_object_id(query.post_id.as_deref(), "postId is required")?;

    let votes_counter = state
        .db
        .increment_votes(post_id)
        .await?
        .ok_or(ApiError::NotFound("Post not found"))?;

    Ok(Json(VoteResponse { votes_counter }))
}

/// Withdraw a vote. The decrement is guarded at the store, so a stale
/// client retracting against a zero counter leaves it at zero.
pub async fn unvote(
    State(state): State<AppState>,
    Query(query): Query<VoteQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let post_id = parse_object_id(query.post_id.as_deref(), "postId is required")?;

    let votes_counter = state
        .db
        .decrement_votes(post_id)
        .await?
        .ok_or(ApiError::NotFound("Post not found"))?;

    Ok(Json(VoteResponse { votes_counter }))
}
