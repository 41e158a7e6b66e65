//! Counter synchronization
//!
//! Denormalized aggregates (friend count, post count, comment count, reaction
//! tallies) are cached on their owning entities for cheap reads. Each function
//! here recomputes one aggregate from the authoritative rows and writes the
//! result back, making the cached value converge no matter how many updates
//! were missed or interleaved.
//!
//! Callers invoke these inline, immediately after the mutation that could
//! have invalidated the aggregate. The repositories involved are explicit
//! parameters so every function is callable on its own (in tests, against
//! in-memory repositories) without a running process.

use tracing::debug;

use social_core::entities::{ReactionTally, TargetKind};
use social_core::traits::{
    CommentRepository, FriendshipRepository, PostRepository, ReactionRepository, UserRepository,
};
use social_core::value_objects::Snowflake;

use super::error::ServiceResult;

/// Recompute a user's friend count from accepted friendships and persist it
pub async fn sync_friend_count(
    friendships: &dyn FriendshipRepository,
    users: &dyn UserRepository,
    user_id: Snowflake,
) -> ServiceResult<i64> {
    let count = friendships.count_accepted(user_id).await?;
    users.set_friend_count(user_id, count).await?;
    debug!(%user_id, count, "Friend count synchronized");
    Ok(count)
}

/// Recompute a user's post count from non-deleted posts and persist it
pub async fn sync_post_count(
    posts: &dyn PostRepository,
    users: &dyn UserRepository,
    author_id: Snowflake,
) -> ServiceResult<i64> {
    let count = posts.count_by_author(author_id).await?;
    users.set_post_count(author_id, count).await?;
    debug!(%author_id, count, "Post count synchronized");
    Ok(count)
}

/// Recompute a post's comment count from non-deleted comments and persist it
pub async fn sync_comment_count(
    comments: &dyn CommentRepository,
    posts: &dyn PostRepository,
    post_id: Snowflake,
) -> ServiceResult<i64> {
    let count = comments.count_by_post(post_id).await?;
    posts.set_comment_count(post_id, count).await?;
    debug!(%post_id, count, "Comment count synchronized");
    Ok(count)
}

/// Recompute a target's like/dislike tally from its reaction rows, persist it
/// onto the post or comment selected by `target_kind`, and return it
pub async fn sync_reaction_tally(
    reactions: &dyn ReactionRepository,
    posts: &dyn PostRepository,
    comments: &dyn CommentRepository,
    target_kind: TargetKind,
    target_id: Snowflake,
) -> ServiceResult<ReactionTally> {
    let tally = reactions.tally(target_kind, target_id).await?;
    match target_kind {
        TargetKind::Post => posts.set_reactions(target_id, tally).await?,
        TargetKind::Comment => comments.set_reactions(target_id, tally).await?,
    }
    debug!(%target_id, kind = %target_kind, like = tally.like, dislike = tally.dislike, "Reaction tally synchronized");
    Ok(tally)
}
