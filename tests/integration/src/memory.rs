//! In-memory repository implementations
//!
//! Mirror the semantics of the PostgreSQL repositories closely enough to run
//! the service layer in tests: pair uniqueness on friendships, one stance per
//! (author, target) on reactions, soft-delete filtering, id-descending order
//! for user listings.

use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;

use social_core::entities::{
    Comment, Friendship, FriendshipStatus, Post, Reaction, ReactionEmoji, ReactionTally,
    TargetKind, User,
};
use social_core::error::DomainError;
use social_core::traits::{
    CommentRepository, FriendshipRepository, PostRepository, ReactionRepository, RepoResult,
    UserRepository,
};
use social_core::value_objects::Snowflake;

fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

fn matches_pair(f: &Friendship, a: Snowflake, b: Snowflake) -> bool {
    (f.requester_id == a && f.recipient_id == b) || (f.requester_id == b && f.recipient_id == a)
}

// ============================================================================
// Users
// ============================================================================

/// In-memory implementation of UserRepository
#[derive(Default)]
pub struct MemoryUserRepository {
    rows: Mutex<Vec<User>>,
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<User>> {
        Ok(lock(&self.rows)
            .iter()
            .find(|u| u.id == id && !u.is_deleted)
            .cloned())
    }

    async fn create(&self, user: &User) -> RepoResult<()> {
        lock(&self.rows).push(user.clone());
        Ok(())
    }

    async fn update(&self, user: &User) -> RepoResult<()> {
        let mut rows = lock(&self.rows);
        if let Some(row) = rows.iter_mut().find(|u| u.id == user.id) {
            // Profile fields only; cached counters are written separately
            row.name = user.name.clone();
            row.avatar_url = user.avatar_url.clone();
            row.cover_url = user.cover_url.clone();
            row.about_me = user.about_me.clone();
            row.city = user.city.clone();
            row.country = user.country.clone();
            row.company = user.company.clone();
            row.job_title = user.job_title.clone();
            row.facebook_link = user.facebook_link.clone();
            row.instagram_link = user.instagram_link.clone();
            row.linkedin_link = user.linkedin_link.clone();
            row.twitter_link = user.twitter_link.clone();
            row.updated_at = user.updated_at;
        }
        Ok(())
    }

    async fn set_friend_count(&self, id: Snowflake, count: i64) -> RepoResult<()> {
        if let Some(row) = lock(&self.rows).iter_mut().find(|u| u.id == id) {
            row.friend_count = count;
        }
        Ok(())
    }

    async fn set_post_count(&self, id: Snowflake, count: i64) -> RepoResult<()> {
        if let Some(row) = lock(&self.rows).iter_mut().find(|u| u.id == id) {
            row.post_count = count;
        }
        Ok(())
    }

    async fn find_in_ids(
        &self,
        ids: &[Snowflake],
        name_filter: Option<&str>,
        offset: i64,
        limit: i64,
    ) -> RepoResult<Vec<User>> {
        let mut matched: Vec<User> = lock(&self.rows)
            .iter()
            .filter(|u| ids.contains(&u.id) && !u.is_deleted)
            .filter(|u| name_filter.is_none_or(|f| u.matches_name(f)))
            .cloned()
            .collect();
        matched.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(matched
            .into_iter()
            .skip(offset.max(0) as usize)
            .take(limit.max(0) as usize)
            .collect())
    }

    async fn count_in_ids(&self, ids: &[Snowflake], name_filter: Option<&str>) -> RepoResult<i64> {
        Ok(lock(&self.rows)
            .iter()
            .filter(|u| ids.contains(&u.id) && !u.is_deleted)
            .filter(|u| name_filter.is_none_or(|f| u.matches_name(f)))
            .count() as i64)
    }
}

// ============================================================================
// Posts
// ============================================================================

/// In-memory implementation of PostRepository
#[derive(Default)]
pub struct MemoryPostRepository {
    rows: Mutex<Vec<Post>>,
}

#[async_trait]
impl PostRepository for MemoryPostRepository {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Post>> {
        Ok(lock(&self.rows).iter().find(|p| p.id == id).cloned())
    }

    async fn create(&self, post: &Post) -> RepoResult<()> {
        lock(&self.rows).push(post.clone());
        Ok(())
    }

    async fn update(&self, post: &Post) -> RepoResult<()> {
        if let Some(row) = lock(&self.rows).iter_mut().find(|p| p.id == post.id) {
            row.content = post.content.clone();
            row.image = post.image.clone();
            row.updated_at = post.updated_at;
        }
        Ok(())
    }

    async fn soft_delete(&self, id: Snowflake, author_id: Snowflake) -> RepoResult<bool> {
        let mut rows = lock(&self.rows);
        match rows
            .iter_mut()
            .find(|p| p.id == id && p.author_id == author_id && !p.is_deleted)
        {
            Some(row) => {
                row.is_deleted = true;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn count_by_author(&self, author_id: Snowflake) -> RepoResult<i64> {
        Ok(lock(&self.rows)
            .iter()
            .filter(|p| p.author_id == author_id && !p.is_deleted)
            .count() as i64)
    }

    async fn set_comment_count(&self, id: Snowflake, count: i64) -> RepoResult<()> {
        if let Some(row) = lock(&self.rows).iter_mut().find(|p| p.id == id) {
            row.comment_count = count;
        }
        Ok(())
    }

    async fn set_reactions(&self, id: Snowflake, tally: ReactionTally) -> RepoResult<()> {
        if let Some(row) = lock(&self.rows).iter_mut().find(|p| p.id == id) {
            row.reactions = tally;
        }
        Ok(())
    }
}

// ============================================================================
// Comments
// ============================================================================

/// In-memory implementation of CommentRepository
#[derive(Default)]
pub struct MemoryCommentRepository {
    rows: Mutex<Vec<Comment>>,
}

#[async_trait]
impl CommentRepository for MemoryCommentRepository {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Comment>> {
        Ok(lock(&self.rows).iter().find(|c| c.id == id).cloned())
    }

    async fn create(&self, comment: &Comment) -> RepoResult<()> {
        lock(&self.rows).push(comment.clone());
        Ok(())
    }

    async fn update(&self, comment: &Comment) -> RepoResult<()> {
        if let Some(row) = lock(&self.rows).iter_mut().find(|c| c.id == comment.id) {
            row.content = comment.content.clone();
            row.updated_at = comment.updated_at;
        }
        Ok(())
    }

    async fn delete(&self, id: Snowflake, author_id: Snowflake) -> RepoResult<bool> {
        let mut rows = lock(&self.rows);
        let before = rows.len();
        rows.retain(|c| !(c.id == id && c.author_id == author_id));
        Ok(rows.len() < before)
    }

    async fn count_by_post(&self, post_id: Snowflake) -> RepoResult<i64> {
        Ok(lock(&self.rows)
            .iter()
            .filter(|c| c.post_id == post_id && !c.is_deleted)
            .count() as i64)
    }

    async fn set_reactions(&self, id: Snowflake, tally: ReactionTally) -> RepoResult<()> {
        if let Some(row) = lock(&self.rows).iter_mut().find(|c| c.id == id) {
            row.reactions = tally;
        }
        Ok(())
    }
}

// ============================================================================
// Friendships
// ============================================================================

/// In-memory implementation of FriendshipRepository
///
/// `create` rejects a second record for the same unordered pair, standing in
/// for the store's unique index.
#[derive(Default)]
pub struct MemoryFriendshipRepository {
    rows: Mutex<Vec<Friendship>>,
}

impl MemoryFriendshipRepository {
    /// Total stored records, for invariant assertions in tests
    pub fn row_count(&self) -> usize {
        lock(&self.rows).len()
    }
}

#[async_trait]
impl FriendshipRepository for MemoryFriendshipRepository {
    async fn find_pair(
        &self,
        user_a: Snowflake,
        user_b: Snowflake,
    ) -> RepoResult<Option<Friendship>> {
        Ok(lock(&self.rows)
            .iter()
            .find(|f| matches_pair(f, user_a, user_b))
            .cloned())
    }

    async fn find_pending(
        &self,
        requester_id: Snowflake,
        recipient_id: Snowflake,
    ) -> RepoResult<Option<Friendship>> {
        Ok(lock(&self.rows)
            .iter()
            .find(|f| {
                f.requester_id == requester_id
                    && f.recipient_id == recipient_id
                    && f.status == FriendshipStatus::Pending
            })
            .cloned())
    }

    async fn create(&self, friendship: &Friendship) -> RepoResult<()> {
        let mut rows = lock(&self.rows);
        if rows
            .iter()
            .any(|f| matches_pair(f, friendship.requester_id, friendship.recipient_id))
        {
            return Err(DomainError::FriendshipExists);
        }
        rows.push(friendship.clone());
        Ok(())
    }

    async fn update(&self, friendship: &Friendship) -> RepoResult<()> {
        if let Some(row) = lock(&self.rows)
            .iter_mut()
            .find(|f| matches_pair(f, friendship.requester_id, friendship.recipient_id))
        {
            row.requester_id = friendship.requester_id;
            row.recipient_id = friendship.recipient_id;
            row.status = friendship.status;
            row.updated_at = friendship.updated_at;
        }
        Ok(())
    }

    async fn delete_pair(&self, user_a: Snowflake, user_b: Snowflake) -> RepoResult<bool> {
        let mut rows = lock(&self.rows);
        let before = rows.len();
        rows.retain(|f| !matches_pair(f, user_a, user_b));
        Ok(rows.len() < before)
    }

    async fn find_incoming(&self, recipient_id: Snowflake) -> RepoResult<Vec<Friendship>> {
        Ok(lock(&self.rows)
            .iter()
            .filter(|f| f.recipient_id == recipient_id && f.status == FriendshipStatus::Pending)
            .cloned()
            .collect())
    }

    async fn find_outgoing(&self, requester_id: Snowflake) -> RepoResult<Vec<Friendship>> {
        Ok(lock(&self.rows)
            .iter()
            .filter(|f| f.requester_id == requester_id && f.status == FriendshipStatus::Pending)
            .cloned()
            .collect())
    }

    async fn find_accepted(&self, user_id: Snowflake) -> RepoResult<Vec<Friendship>> {
        Ok(lock(&self.rows)
            .iter()
            .filter(|f| f.involves(user_id) && f.status == FriendshipStatus::Accepted)
            .cloned()
            .collect())
    }

    async fn count_accepted(&self, user_id: Snowflake) -> RepoResult<i64> {
        Ok(lock(&self.rows)
            .iter()
            .filter(|f| f.involves(user_id) && f.status == FriendshipStatus::Accepted)
            .count() as i64)
    }
}

// ============================================================================
// Reactions
// ============================================================================

/// In-memory implementation of ReactionRepository
#[derive(Default)]
pub struct MemoryReactionRepository {
    rows: Mutex<Vec<Reaction>>,
}

impl MemoryReactionRepository {
    /// Total stored records, for invariant assertions in tests
    pub fn row_count(&self) -> usize {
        lock(&self.rows).len()
    }
}

fn matches_reaction(
    r: &Reaction,
    author_id: Snowflake,
    target_kind: TargetKind,
    target_id: Snowflake,
) -> bool {
    r.author_id == author_id && r.target_kind == target_kind && r.target_id == target_id
}

#[async_trait]
impl ReactionRepository for MemoryReactionRepository {
    async fn find(
        &self,
        author_id: Snowflake,
        target_kind: TargetKind,
        target_id: Snowflake,
    ) -> RepoResult<Option<Reaction>> {
        Ok(lock(&self.rows)
            .iter()
            .find(|r| matches_reaction(r, author_id, target_kind, target_id))
            .cloned())
    }

    async fn create(&self, reaction: &Reaction) -> RepoResult<()> {
        lock(&self.rows).push(reaction.clone());
        Ok(())
    }

    async fn update(&self, reaction: &Reaction) -> RepoResult<()> {
        if let Some(row) = lock(&self.rows).iter_mut().find(|r| {
            matches_reaction(r, reaction.author_id, reaction.target_kind, reaction.target_id)
        }) {
            row.emoji = reaction.emoji;
            row.updated_at = reaction.updated_at;
        }
        Ok(())
    }

    async fn delete(
        &self,
        author_id: Snowflake,
        target_kind: TargetKind,
        target_id: Snowflake,
    ) -> RepoResult<bool> {
        let mut rows = lock(&self.rows);
        let before = rows.len();
        rows.retain(|r| !matches_reaction(r, author_id, target_kind, target_id));
        Ok(rows.len() < before)
    }

    async fn tally(
        &self,
        target_kind: TargetKind,
        target_id: Snowflake,
    ) -> RepoResult<ReactionTally> {
        let mut tally = ReactionTally::default();
        for reaction in lock(&self.rows)
            .iter()
            .filter(|r| r.target_kind == target_kind && r.target_id == target_id)
        {
            match reaction.emoji {
                ReactionEmoji::Like => tally.like += 1,
                ReactionEmoji::Dislike => tally.dislike += 1,
            }
        }
        Ok(tally)
    }
}
