//! Native client for the vote endpoints: the per-post vote toggle with its
//! local flag store, the stand-in for the browser's local storage.

pub mod error;
pub mod flags;
pub mod toggle;
pub mod transport;

pub use error::{ClientError, Result};
pub use flags::VoteFlags;
pub use toggle::VoteToggle;
pub use transport::VoteClient;
