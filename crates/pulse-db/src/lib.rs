pub mod queries;

use anyhow::{Context, Result};
use mongodb::{Client, Collection, bson::doc};
use tracing::info;

use pulse_types::models::{Board, Post, User};

/// Process-scoped handle to the document store. The driver pools
/// connections internally, so one `Database` is created at startup and
/// cheaply cloned into every request handler.
#[derive(Clone)]
pub struct Database {
    db: mongodb::Database,
}

impl Database {
    /// Connect to the configured MongoDB deployment and verify liveness.
    ///
    /// Errors propagate to the caller so the server refuses to start on a
    /// dead endpoint instead of failing later on the first query.
    pub async fn connect(uri: &str, db_name: &str) -> Result<Self> {
        let client = Client::with_uri_str(uri)
            .await
            .context("invalid MongoDB connection string")?;
        let db = client.database(db_name);

        db.run_command(doc! { "ping": 1 })
            .await
            .context("MongoDB is unreachable")?;

        info!("Connected to MongoDB database '{}'", db_name);
        Ok(Self { db })
    }

    pub(crate) fn boards(&self) -> Collection<Board> {
        self.db.collection("boards")
    }

    pub(crate) fn posts(&self) -> Collection<Post> {
        self.db.collection("posts")
    }

    pub(crate) fn users(&self) -> Collection<User> {
        self.db.collection("users")
    }
}
