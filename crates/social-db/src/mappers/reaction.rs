//! Reaction entity <-> model mapper

use social_core::entities::Reaction;
use social_core::error::DomainError;
use social_core::value_objects::Snowflake;

use crate::models::ReactionModel;

/// Convert ReactionModel to Reaction entity
///
/// Fallible: stored target kind and emoji are decoded through their closed
/// sets; anything else fails the conversion.
impl TryFrom<ReactionModel> for Reaction {
    type Error = DomainError;

    fn try_from(model: ReactionModel) -> Result<Self, Self::Error> {
        Ok(Reaction {
            author_id: Snowflake::new(model.author_id),
            target_kind: model.target_type.parse()?,
            target_id: Snowflake::new(model.target_id),
            emoji: model.emoji.parse()?,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}
