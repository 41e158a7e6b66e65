//! Response DTOs for service outputs
//!
//! All response DTOs implement `Serialize` for JSON output.
//! Snowflake IDs are serialized as strings for JavaScript compatibility.

use chrono::{DateTime, Utc};
use serde::Serialize;

use social_core::entities::{FriendshipStatus, ReactionTally};

// ============================================================================
// User Responses
// ============================================================================

/// Public user response
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub about_me: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    pub friend_count: i64,
    pub post_count: i64,
    pub created_at: DateTime<Utc>,
}

/// The relationship record attached to a listed/fetched user
#[derive(Debug, Clone, Serialize)]
pub struct FriendshipResponse {
    pub from: String,
    pub to: String,
    pub status: FriendshipStatus,
    pub updated_at: DateTime<Utc>,
}

/// A user together with the viewer's relationship to them, if any
#[derive(Debug, Clone, Serialize)]
pub struct UserWithFriendshipResponse {
    #[serde(flatten)]
    pub user: UserResponse,
    pub friendship: Option<FriendshipResponse>,
}

/// Paginated friend/request listing
#[derive(Debug, Clone, Serialize)]
pub struct FriendListResponse {
    pub users: Vec<UserWithFriendshipResponse>,
    pub total_pages: i64,
    pub count: i64,
}

// ============================================================================
// Post / Comment Responses
// ============================================================================

/// Post response
#[derive(Debug, Clone, Serialize)]
pub struct PostResponse {
    pub id: String,
    pub author_id: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub comment_count: i64,
    pub reactions: ReactionsResponse,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Comment response
#[derive(Debug, Clone, Serialize)]
pub struct CommentResponse {
    pub id: String,
    pub post_id: String,
    pub author_id: String,
    pub content: String,
    pub reactions: ReactionsResponse,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ============================================================================
// Reaction Responses
// ============================================================================

/// Like/dislike tally returned after a reaction mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReactionsResponse {
    pub like: i64,
    pub dislike: i64,
}

impl From<ReactionTally> for ReactionsResponse {
    fn from(tally: ReactionTally) -> Self {
        Self {
            like: tally.like,
            dislike: tally.dislike,
        }
    }
}
