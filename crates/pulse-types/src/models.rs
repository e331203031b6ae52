use mongodb::bson::{DateTime, oid::ObjectId};
use serde::{Deserialize, Serialize};

/// A named collection of feedback posts. Boards are created and managed by
/// the account system, which is outside this service — here they are
/// read-only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Board {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub name: String,
}

/// A single feedback item. `user_id` is `None` for anonymous authors.
///
/// Field names are camelCase on the wire to match the stored document
/// schema (`boardId`, `votesCounter`, ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub title: String,
    pub description: String,
    pub board_id: ObjectId,
    pub user_id: Option<ObjectId>,
    pub votes_counter: i64,
    pub created_at: DateTime,
}

/// Account record owned by the external auth provider. Only the fields the
/// delete authorization check reads are mapped here: the subscription flag
/// and the set of boards the user manages.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub has_access: bool,
    pub boards: Vec<ObjectId>,
}
