use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::models::Post;

// -- Session --

/// Bearer-token claims issued by the external auth provider. pulse-api only
/// ever decodes these; it never mints tokens. Canonical definition lives
/// here so the API middleware and any native client agree on the shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User id, hex-encoded ObjectId.
    pub sub: String,
    pub exp: usize,
}

impl Claims {
    pub fn user_id(&self) -> Option<ObjectId> {
        ObjectId::parse_str(&self.sub).ok()
    }
}

// -- Posts --

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreatePostRequest {
    pub title: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    pub id: String,
    pub title: String,
    pub description: String,
    pub board_id: String,
    pub user_id: Option<String>,
    pub votes_counter: i64,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self {
            id: post.id.to_hex(),
            title: post.title,
            description: post.description,
            board_id: post.board_id.to_hex(),
            user_id: post.user_id.map(|id| id.to_hex()),
            votes_counter: post.votes_counter,
            created_at: post.created_at.to_chrono(),
        }
    }
}

// -- Votes --

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteResponse {
    pub votes_counter: i64,
}
