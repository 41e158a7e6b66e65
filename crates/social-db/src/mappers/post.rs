//! Post entity <-> model mapper

use social_core::entities::{Post, ReactionTally};
use social_core::value_objects::Snowflake;

use crate::models::PostModel;

/// Convert PostModel to Post entity
impl From<PostModel> for Post {
    fn from(model: PostModel) -> Self {
        Post {
            id: Snowflake::new(model.id),
            author_id: Snowflake::new(model.author_id),
            content: model.content,
            image: model.image,
            comment_count: model.comment_count,
            reactions: ReactionTally::new(model.like_count, model.dislike_count),
            is_deleted: model.is_deleted,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
