use anyhow::Result;
use futures_util::TryStreamExt;
use mongodb::bson::{DateTime, doc, oid::ObjectId};
use mongodb::options::ReturnDocument;

use pulse_types::models::{Board, Post, User};

use crate::Database;

impl Database {
    // -- Boards --

    pub async fn find_board(&self, id: ObjectId) -> Result<Option<Board>> {
        let board = self.boards().find_one(doc! { "_id": id }).await?;
        Ok(board)
    }

    // -- Posts --

    /// Persist a new post. The board id is stored as given; whether it
    /// references a live board is not checked anywhere, so deleting a board
    /// can orphan its posts.
    pub async fn create_post(
        &self,
        title: String,
        description: String,
        board_id: ObjectId,
        user_id: Option<ObjectId>,
    ) -> Result<Post> {
        let post = Post {
            id: ObjectId::new(),
            title,
            description,
            board_id,
            user_id,
            votes_counter: 0,
            created_at: DateTime::now(),
        };

        self.posts().insert_one(&post).await?;
        Ok(post)
    }

    pub async fn find_post(&self, id: ObjectId) -> Result<Option<Post>> {
        let post = self.posts().find_one(doc! { "_id": id }).await?;
        Ok(post)
    }

    /// All posts on a board, most-voted first.
    pub async fn posts_for_board(&self, board_id: ObjectId) -> Result<Vec<Post>> {
        let cursor = self
            .posts()
            .find(doc! { "boardId": board_id })
            .sort(doc! { "votesCounter": -1 })
            .await?;

        let posts = cursor.try_collect().await?;
        Ok(posts)
    }

    /// Returns false when no post had the given id.
    pub async fn delete_post(&self, id: ObjectId) -> Result<bool> {
        let result = self.posts().delete_one(doc! { "_id": id }).await?;
        Ok(result.deleted_count > 0)
    }

    // -- Votes --

    /// Atomically bump the vote counter. Single `$inc` at the store, so two
    /// racing votes never lose an update. Returns the new counter, or None
    /// when the post does not exist.
    pub async fn increment_votes(&self, id: ObjectId) -> Result<Option<i64>> {
        let updated = self
            .posts()
            .find_one_and_update(doc! { "_id": id }, doc! { "$inc": { "votesCounter": 1 } })
            .return_document(ReturnDocument::After)
            .await?;

        Ok(updated.map(|post| post.votes_counter))
    }

    /// Atomically drop the vote counter, guarded so it never goes below
    /// zero. Returns the new counter, or None when the post does not exist.
    pub async fn decrement_votes(&self, id: ObjectId) -> Result<Option<i64>> {
        let updated = self
            .posts()
            .find_one_and_update(
                doc! { "_id": id, "votesCounter": { "$gt": 0 } },
                doc! { "$inc": { "votesCounter": -1 } },
            )
            .return_document(ReturnDocument::After)
            .await?;

        if let Some(post) = updated {
            return Ok(Some(post.votes_counter));
        }

        // Either the post is gone or its counter was already at zero; a
        // second read disambiguates for the caller.
        let post = self.find_post(id).await?;
        Ok(post.map(|p| p.votes_counter))
    }

    // -- Users --

    pub async fn find_user(&self, id: ObjectId) -> Result<Option<User>> {
        let user = self.users().find_one(doc! { "_id": id }).await?;
        Ok(user)
    }
}
