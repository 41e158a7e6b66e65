//! Reaction database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for reactions table
///
/// Primary key is (author_id, target_type, target_id): one stance per user
/// per target.
#[derive(Debug, Clone, FromRow)]
pub struct ReactionModel {
    pub author_id: i64,
    /// Stored as text; decoded through the closed TargetKind set
    pub target_type: String,
    pub target_id: i64,
    /// Stored as text; decoded through the closed ReactionEmoji set
    pub emoji: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Aggregated reaction count (from a GROUP BY emoji query)
#[derive(Debug, Clone, FromRow)]
pub struct ReactionCountModel {
    pub emoji: String,
    pub count: i64,
}
