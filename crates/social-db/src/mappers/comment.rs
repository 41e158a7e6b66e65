//! Comment entity <-> model mapper

use social_core::entities::{Comment, ReactionTally};
use social_core::value_objects::Snowflake;

use crate::models::CommentModel;

/// Convert CommentModel to Comment entity
impl From<CommentModel> for Comment {
    fn from(model: CommentModel) -> Self {
        Comment {
            id: Snowflake::new(model.id),
            post_id: Snowflake::new(model.post_id),
            author_id: Snowflake::new(model.author_id),
            content: model.content,
            reactions: ReactionTally::new(model.like_count, model.dislike_count),
            is_deleted: model.is_deleted,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
