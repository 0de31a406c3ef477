//! Collision-free, timestamp-shaped identifiers.
//!
//! Ids look like epoch milliseconds but are bumped past the last issued
//! value, so two posts created within one clock tick still differ.

use crate::model::post::Post;

#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    last: u64,
}

impl IdGenerator {
    /// Starts above every post and comment id already in `posts`.
    pub fn seeded_from(posts: &[Post]) -> Self {
        Self {
            last: posts.iter().map(Post::max_id).max().unwrap_or(0),
        }
    }

    /// Issues `max(now_millis, last + 1)`.
    pub fn next(&mut self, now_millis: i64) -> u64 {
        let candidate = u64::try_from(now_millis).unwrap_or(0);
        let id = candidate.max(self.last.saturating_add(1));
        self.last = id;
        id
    }
}
