use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered with an error body; carries its `error` message.
    #[error("{0}")]
    Server(String),

    #[error("could not access the vote flag store: {0}")]
    Storage(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ClientError>;
