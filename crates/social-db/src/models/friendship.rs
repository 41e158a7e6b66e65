//! Friendship database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for friendships table
///
/// The table carries a unique index over the unordered pair
/// (LEAST(requester_id, recipient_id), GREATEST(requester_id, recipient_id)),
/// which is what makes concurrent duplicate inserts fail instead of creating
/// a second record for the same pair.
#[derive(Debug, Clone, FromRow)]
pub struct FriendshipModel {
    pub requester_id: i64,
    pub recipient_id: i64,
    /// Stored as text; decoded through the closed FriendshipStatus set
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
