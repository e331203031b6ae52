use std::time::Duration;

use reqwest::{Client, Method};
use serde::Deserialize;

use pulse_types::api::VoteResponse;

use crate::error::{ClientError, Result};

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// HTTP transport for the vote endpoints.
#[derive(Debug, Clone)]
pub struct VoteClient {
    http: Client,
    base_url: String,
}

impl VoteClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// `POST /api/vote?postId=` — returns the incremented counter.
    pub async fn create_vote(&self, post_id: &str) -> Result<i64> {
        self.send(Method::POST, post_id).await
    }

    /// `DELETE /api/vote?postId=` — returns the decremented counter.
    pub async fn remove_vote(&self, post_id: &str) -> Result<i64> {
        self.send(Method::DELETE, post_id).await
    }

    async fn send(&self, method: Method, post_id: &str) -> Result<i64> {
        let url = format!("{}/api/vote?postId={}", self.base_url, post_id);
        let response = self.http.request(method, &url).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let message = response
                .json::<ErrorBody>()
                .await
                .map(|body| body.error)
                .unwrap_or_else(|_| format!("server returned {}", status));
            return Err(ClientError::Server(message));
        }

        let body: VoteResponse = response.json().await?;
        Ok(body.votes_counter)
    }
}
