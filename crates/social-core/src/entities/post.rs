//! Post entity - user-authored content carrying cached aggregates

use chrono::{DateTime, Utc};

use crate::entities::ReactionTally;
use crate::value_objects::Snowflake;

/// Post entity
///
/// `comment_count` and `reactions` are cached aggregates recomputed from the
/// comment and reaction tables after every mutation that could change them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: Snowflake,
    pub author_id: Snowflake,
    pub content: String,
    pub image: Option<String>,
    pub comment_count: i64,
    pub reactions: ReactionTally,
    pub is_deleted: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Create a new Post
    pub fn new(id: Snowflake, author_id: Snowflake, content: String, image: Option<String>) -> Self {
        let now = Utc::now();
        Self {
            id,
            author_id,
            content,
            image,
            comment_count: 0,
            reactions: ReactionTally::default(),
            is_deleted: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check whether a user authored this post
    #[inline]
    pub fn is_authored_by(&self, user_id: Snowflake) -> bool {
        self.author_id == user_id
    }

    /// Update the text content
    pub fn set_content(&mut self, content: String) {
        self.content = content;
        self.updated_at = Utc::now();
    }

    /// Update the attached image URL
    pub fn set_image(&mut self, image: Option<String>) {
        self.image = image;
        self.updated_at = Utc::now();
    }
}
