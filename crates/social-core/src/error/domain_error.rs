//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::Snowflake;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(Snowflake),

    #[error("Post not found: {0}")]
    PostNotFound(Snowflake),

    #[error("Comment not found: {0}")]
    CommentNotFound(Snowflake),

    #[error("Friend request not found")]
    RequestNotFound,

    #[error("Friend not found")]
    FriendNotFound,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("You have already sent a request to this user")]
    RequestAlreadySent,

    #[error("You have received a request from this user")]
    RequestAlreadyReceived,

    #[error("Users are already friends")]
    AlreadyFriends,

    #[error("A relationship already exists for this pair")]
    FriendshipExists,

    // =========================================================================
    // Invalid State Errors
    // =========================================================================
    // A stored value outside its closed set. Fatal: surfaced to the caller,
    // never coerced to a default.
    #[error("Unknown friendship status: {0}")]
    UnknownFriendshipStatus(String),

    #[error("Unknown reaction target kind: {0}")]
    UnknownTargetKind(String),

    #[error("Unknown reaction emoji: {0}")]
    UnknownEmoji(String),

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Only the author can modify this post")]
    NotPostAuthor,

    #[error("Only the author can modify this comment")]
    NotCommentAuthor,

    #[error("Users can only update their own profile")]
    NotProfileOwner,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    // Transient store failures propagate under this kind so callers can tell
    // infrastructure failures apart from business-rule failures.
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::PostNotFound(_) => "UNKNOWN_POST",
            Self::CommentNotFound(_) => "UNKNOWN_COMMENT",
            Self::RequestNotFound => "UNKNOWN_REQUEST",
            Self::FriendNotFound => "UNKNOWN_FRIEND",

            // Conflict
            Self::RequestAlreadySent => "REQUEST_ALREADY_SENT",
            Self::RequestAlreadyReceived => "REQUEST_ALREADY_RECEIVED",
            Self::AlreadyFriends => "ALREADY_FRIENDS",
            Self::FriendshipExists => "FRIENDSHIP_EXISTS",

            // Invalid State
            Self::UnknownFriendshipStatus(_) => "INVALID_FRIENDSHIP_STATUS",
            Self::UnknownTargetKind(_) => "INVALID_TARGET_KIND",
            Self::UnknownEmoji(_) => "INVALID_EMOJI",

            // Authorization
            Self::NotPostAuthor => "NOT_POST_AUTHOR",
            Self::NotCommentAuthor => "NOT_COMMENT_AUTHOR",
            Self::NotProfileOwner => "NOT_PROFILE_OWNER",

            // Infrastructure
            Self::StoreUnavailable(_) => "STORE_UNAVAILABLE",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_)
                | Self::PostNotFound(_)
                | Self::CommentNotFound(_)
                | Self::RequestNotFound
                | Self::FriendNotFound
        )
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::RequestAlreadySent
                | Self::RequestAlreadyReceived
                | Self::AlreadyFriends
                | Self::FriendshipExists
        )
    }

    /// Check if this is an invalid-state error
    pub fn is_invalid_state(&self) -> bool {
        matches!(
            self,
            Self::UnknownFriendshipStatus(_) | Self::UnknownTargetKind(_) | Self::UnknownEmoji(_)
        )
    }

    /// Check if this is an authorization error
    pub fn is_forbidden(&self) -> bool {
        matches!(
            self,
            Self::NotPostAuthor | Self::NotCommentAuthor | Self::NotProfileOwner
        )
    }

    /// Check if this is an infrastructure error
    pub fn is_store_unavailable(&self) -> bool {
        matches!(self, Self::StoreUnavailable(_))
    }
}
