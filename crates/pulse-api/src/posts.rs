use axum::{
    Extension, Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use pulse_filter::clean;
use pulse_types::api::{CreatePostRequest, PostResponse};
use pulse_types::models::{Post, User};

use crate::error::ApiError;
use crate::middleware::MaybeSession;
use crate::{AppState, parse_object_id};

#[derive(Debug, Deserialize)]
pub struct CreatePostQuery {
    #[serde(rename = "boardId")]
    pub board_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct DeletePostQuery {
    #[serde(rename = "postId")]
    pub post_id: Option<String>,
}

/// Create a post on a board. Deliberately unauthenticated: anyone may post
/// to any board id, and the board is not checked for existence. A session,
/// when present, only attributes authorship.
pub async fn create_post(
    State(state): State<AppState>,
    Query(query): Query<CreatePostQuery>,
    Extension(session): Extension<MaybeSession>,
    Json(req): Json<CreatePostRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let board_id = parse_object_id(query.board_id.as_deref(), "boardId is required")?;

    let title = clean(req.title.as_deref().unwrap_or_default());
    let description = clean(req.description.as_deref().unwrap_or_default());
    validate_title(&title)?;

    let user_id = session.0.as_ref().and_then(|claims| claims.user_id());

    let post = state
        .db
        .create_post(title, description, board_id, user_id)
        .await?;

    Ok((StatusCode::CREATED, Json(PostResponse::from(post))))
}

/// Delete a post. Requires a session, a subscription, and authority over
/// the post's board — board-scoped, so an entitled owner removes any post
/// on their boards, not only their own.
pub async fn delete_post(
    State(state): State<AppState>,
    Query(query): Query<DeletePostQuery>,
    Extension(session): Extension<MaybeSession>,
) -> Result<impl IntoResponse, ApiError> {
    let post_id = parse_object_id(query.post_id.as_deref(), "postId is required")?;

    // Fail fast on anonymous callers, before touching the store.
    let claims = session.require()?;
    let user_id = claims
        .user_id()
        .ok_or(ApiError::Unauthorized("Authentication required"))?;

    let user = state
        .db
        .find_user(user_id)
        .await?
        .ok_or(ApiError::Unauthorized("Authentication required"))?;
    ensure_subscriber(&user)?;

    let post = state
        .db
        .find_post(post_id)
        .await?
        .ok_or(ApiError::NotFound("Post not found"))?;
    ensure_board_access(&user, &post)?;

    state.db.delete_post(post_id).await?;

    Ok(Json(serde_json::json!({ "message": "Post deleted" })))
}

/// A title must survive filtering with something readable in it. Empty
/// input and titles that masked down to nothing but `*` both fail.
fn validate_title(sanitized: &str) -> Result<(), ApiError> {
    let trimmed = sanitized.trim();
    if trimmed.is_empty() || trimmed.chars().all(|c| c == '*' || c.is_whitespace()) {
        return Err(ApiError::Validation("Title is required"));
    }
    Ok(())
}

fn ensure_subscriber(user: &User) -> Result<(), ApiError> {
    if !user.has_access {
        return Err(ApiError::Forbidden("You need to subscribe to delete a post"));
    }
    Ok(())
}

fn ensure_board_access(user: &User, post: &Post) -> Result<(), ApiError> {
    if !user.boards.contains(&post.board_id) {
        return Err(ApiError::Unauthorized(
            "You don't have access to delete this post",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{DateTime, oid::ObjectId};

    fn user(has_access: bool, boards: Vec<ObjectId>) -> User {
        User {
            id: ObjectId::new(),
            has_access,
            boards,
        }
    }

    fn post_on(board_id: ObjectId) -> Post {
        Post {
            id: ObjectId::new(),
            title: "idea".into(),
            description: "d".into(),
            board_id,
            user_id: None,
            votes_counter: 0,
            created_at: DateTime::now(),
        }
    }

    #[test]
    fn plain_title_is_accepted() {
        assert!(validate_title("add dark mode").is_ok());
    }

    #[test]
    fn empty_title_is_rejected() {
        let err = validate_title("").unwrap_err();
        assert!(matches!(err, ApiError::Validation("Title is required")));
    }

    #[test]
    fn whitespace_title_is_rejected() {
        assert!(validate_title("   ").is_err());
    }

    #[test]
    fn fully_masked_title_is_rejected() {
        // What "shit damn" looks like after filtering.
        assert!(validate_title("**** ****").is_err());
    }

    #[test]
    fn partially_masked_title_is_accepted() {
        assert!(validate_title("**** happens").is_ok());
    }

    #[test]
    fn non_subscriber_cannot_delete() {
        let board = ObjectId::new();
        let err = ensure_subscriber(&user(false, vec![board])).unwrap_err();
        assert!(matches!(err, ApiError::Forbidden(_)));
    }

    #[test]
    fn subscriber_passes_the_entitlement_check() {
        assert!(ensure_subscriber(&user(true, vec![])).is_ok());
    }

    #[test]
    fn foreign_board_is_not_deletable() {
        let theirs = ObjectId::new();
        let mine = ObjectId::new();
        let err = ensure_board_access(&user(true, vec![mine]), &post_on(theirs)).unwrap_err();
        assert!(matches!(err, ApiError::Unauthorized(_)));
    }

    #[test]
    fn any_post_on_an_owned_board_is_deletable() {
        let mine = ObjectId::new();
        // Post authored by someone else; board scope is what counts.
        let mut post = post_on(mine);
        post.user_id = Some(ObjectId::new());
        assert!(ensure_board_access(&user(true, vec![mine]), &post).is_ok());
    }
}
