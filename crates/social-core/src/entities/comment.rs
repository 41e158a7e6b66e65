//! Comment entity - a reply attached to a post

use chrono::{DateTime, Utc};

use crate::entities::ReactionTally;
use crate::value_objects::Snowflake;

/// Comment entity
///
/// `reactions` is a cached aggregate recomputed from the reaction table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: Snowflake,
    pub post_id: Snowflake,
    pub author_id: Snowflake,
    pub content: String,
    pub reactions: ReactionTally,
    pub is_deleted: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Comment {
    /// Create a new Comment
    pub fn new(id: Snowflake, post_id: Snowflake, author_id: Snowflake, content: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            post_id,
            author_id,
            content,
            reactions: ReactionTally::default(),
            is_deleted: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check whether a user authored this comment
    #[inline]
    pub fn is_authored_by(&self, user_id: Snowflake) -> bool {
        self.author_id == user_id
    }

    /// Update the text content
    pub fn set_content(&mut self, content: String) {
        self.content = content;
        self.updated_at = Utc::now();
    }
}
