use crate::error::Result;
use crate::flags::VoteFlags;
use crate::transport::VoteClient;

/// Per-post binary vote state: **not-voted** or **voted**, mirrored between
/// the local flag store and the server-side counter.
///
/// Both transitions update the displayed counter and the flag
/// optimistically, then issue the request; a failed request compensates by
/// reverting counter and flag to their prior state before surfacing the
/// error.
pub struct VoteToggle {
    post_id: String,
    votes_counter: i64,
    has_voted: bool,
    client: VoteClient,
    flags: VoteFlags,
}

impl VoteToggle {
    /// `initial_votes` is the counter as rendered on the page; the voted
    /// flag comes from the store.
    pub fn new(
        post_id: impl Into<String>,
        initial_votes: i64,
        client: VoteClient,
        flags: VoteFlags,
    ) -> Self {
        let post_id = post_id.into();
        let has_voted = flags.has_voted(&post_id);

        Self {
            post_id,
            votes_counter: initial_votes,
            has_voted,
            client,
            flags,
        }
    }

    pub fn votes_counter(&self) -> i64 {
        self.votes_counter
    }

    pub fn has_voted(&self) -> bool {
        self.has_voted
    }

    /// Flip the vote state. Returns the counter as confirmed by the server.
    pub async fn toggle(&mut self) -> Result<i64> {
        if self.has_voted {
            self.votes_counter -= 1;
            self.has_voted = false;
            self.flags.clear_voted(&self.post_id);

            match self.client.remove_vote(&self.post_id).await {
                Ok(counter) => {
                    self.votes_counter = counter;
                    Ok(counter)
                }
                Err(e) => {
                    self.votes_counter += 1;
                    self.has_voted = true;
                    self.flags.set_voted(&self.post_id);
                    Err(e)
                }
            }
        } else {
            self.votes_counter += 1;
            self.has_voted = true;
            self.flags.set_voted(&self.post_id);

            match self.client.create_vote(&self.post_id).await {
                Ok(counter) => {
                    self.votes_counter = counter;
                    Ok(counter)
                }
                Err(e) => {
                    self.votes_counter -= 1;
                    self.has_voted = false;
                    self.flags.clear_voted(&self.post_id);
                    Err(e)
                }
            }
        }
    }
}
