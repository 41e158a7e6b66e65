//! Repository traits (ports) - define the interface for data access
//!
//! These traits follow the Repository pattern from Domain-Driven Design.
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. All operations map onto the store's atomic
//! single-record create/read/update/delete and filtered queries; no
//! cross-record transactions are assumed.

use async_trait::async_trait;

use crate::entities::{Comment, Friendship, Post, Reaction, ReactionTally, TargetKind, User};
use crate::error::DomainError;
use crate::value_objects::Snowflake;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<User>>;

    /// Create a new user
    async fn create(&self, user: &User) -> RepoResult<()>;

    /// Update profile fields of an existing user
    async fn update(&self, user: &User) -> RepoResult<()>;

    /// Overwrite the cached friend count. Called only by counter sync.
    async fn set_friend_count(&self, id: Snowflake, count: i64) -> RepoResult<()>;

    /// Overwrite the cached post count. Called only by counter sync.
    async fn set_post_count(&self, id: Snowflake, count: i64) -> RepoResult<()>;

    /// Find users within a candidate id set, optionally filtered by a
    /// case-insensitive name substring, ordered newest first (id descending),
    /// with offset/limit pagination.
    async fn find_in_ids(
        &self,
        ids: &[Snowflake],
        name_filter: Option<&str>,
        offset: i64,
        limit: i64,
    ) -> RepoResult<Vec<User>>;

    /// Count users within a candidate id set matching the optional name filter
    async fn count_in_ids(&self, ids: &[Snowflake], name_filter: Option<&str>) -> RepoResult<i64>;
}

// ============================================================================
// Post Repository
// ============================================================================

#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Find post by ID (including soft-deleted rows; callers filter)
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Post>>;

    /// Create a new post
    async fn create(&self, post: &Post) -> RepoResult<()>;

    /// Update content fields of an existing post
    async fn update(&self, post: &Post) -> RepoResult<()>;

    /// Soft-delete a post if it belongs to `author_id`; returns whether a
    /// row was matched
    async fn soft_delete(&self, id: Snowflake, author_id: Snowflake) -> RepoResult<bool>;

    /// Count non-deleted posts by an author
    async fn count_by_author(&self, author_id: Snowflake) -> RepoResult<i64>;

    /// Overwrite the cached comment count. Called only by counter sync.
    async fn set_comment_count(&self, id: Snowflake, count: i64) -> RepoResult<()>;

    /// Overwrite the cached reaction tally. Called only by counter sync.
    async fn set_reactions(&self, id: Snowflake, tally: ReactionTally) -> RepoResult<()>;
}

// ============================================================================
// Comment Repository
// ============================================================================

#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Find comment by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Comment>>;

    /// Create a new comment
    async fn create(&self, comment: &Comment) -> RepoResult<()>;

    /// Update content of an existing comment
    async fn update(&self, comment: &Comment) -> RepoResult<()>;

    /// Delete a comment if it belongs to `author_id`; returns whether a row
    /// was matched
    async fn delete(&self, id: Snowflake, author_id: Snowflake) -> RepoResult<bool>;

    /// Count non-deleted comments on a post
    async fn count_by_post(&self, post_id: Snowflake) -> RepoResult<i64>;

    /// Overwrite the cached reaction tally. Called only by counter sync.
    async fn set_reactions(&self, id: Snowflake, tally: ReactionTally) -> RepoResult<()>;
}

// ============================================================================
// Friendship Repository
// ============================================================================

#[async_trait]
pub trait FriendshipRepository: Send + Sync {
    /// Find the single record for the unordered pair, whichever direction it
    /// was created in
    async fn find_pair(&self, user_a: Snowflake, user_b: Snowflake)
        -> RepoResult<Option<Friendship>>;

    /// Find a pending request with this exact direction
    async fn find_pending(
        &self,
        requester_id: Snowflake,
        recipient_id: Snowflake,
    ) -> RepoResult<Option<Friendship>>;

    /// Insert a new record. The store enforces uniqueness over the unordered
    /// pair; a concurrent duplicate insert fails with
    /// [`DomainError::FriendshipExists`] instead of creating a second row.
    async fn create(&self, friendship: &Friendship) -> RepoResult<()>;

    /// Persist status/direction changes, keyed by the unordered pair
    async fn update(&self, friendship: &Friendship) -> RepoResult<()>;

    /// Delete the record for the unordered pair; returns whether a row was
    /// matched
    async fn delete_pair(&self, user_a: Snowflake, user_b: Snowflake) -> RepoResult<bool>;

    /// Pending requests addressed to a user
    async fn find_incoming(&self, recipient_id: Snowflake) -> RepoResult<Vec<Friendship>>;

    /// Pending requests sent by a user
    async fn find_outgoing(&self, requester_id: Snowflake) -> RepoResult<Vec<Friendship>>;

    /// Accepted records touching a user on either side
    async fn find_accepted(&self, user_id: Snowflake) -> RepoResult<Vec<Friendship>>;

    /// Count accepted records touching a user on either side
    async fn count_accepted(&self, user_id: Snowflake) -> RepoResult<i64>;
}

// ============================================================================
// Reaction Repository
// ============================================================================

#[async_trait]
pub trait ReactionRepository: Send + Sync {
    /// Find the reaction a user holds on a target, if any
    async fn find(
        &self,
        author_id: Snowflake,
        target_kind: TargetKind,
        target_id: Snowflake,
    ) -> RepoResult<Option<Reaction>>;

    /// Insert a new reaction
    async fn create(&self, reaction: &Reaction) -> RepoResult<()>;

    /// Persist an emoji switch, keyed by (author, target kind, target id)
    async fn update(&self, reaction: &Reaction) -> RepoResult<()>;

    /// Remove a reaction; returns whether a row was matched
    async fn delete(
        &self,
        author_id: Snowflake,
        target_kind: TargetKind,
        target_id: Snowflake,
    ) -> RepoResult<bool>;

    /// Count surviving reactions on a target, grouped by emoji
    async fn tally(&self, target_kind: TargetKind, target_id: Snowflake)
        -> RepoResult<ReactionTally>;
}
