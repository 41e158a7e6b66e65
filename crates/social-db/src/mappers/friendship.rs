//! Friendship entity <-> model mapper

use social_core::entities::Friendship;
use social_core::error::DomainError;
use social_core::value_objects::Snowflake;

use crate::models::FriendshipModel;

/// Convert FriendshipModel to Friendship entity
///
/// Fallible: a stored status outside {pending, accepted, declined} is an
/// invariant violation and fails the conversion.
impl TryFrom<FriendshipModel> for Friendship {
    type Error = DomainError;

    fn try_from(model: FriendshipModel) -> Result<Self, Self::Error> {
        Ok(Friendship {
            requester_id: Snowflake::new(model.requester_id),
            recipient_id: Snowflake::new(model.recipient_id),
            status: model.status.parse()?,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}
