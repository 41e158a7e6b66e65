//! PostgreSQL implementation of FriendshipRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use social_core::entities::Friendship;
use social_core::error::DomainError;
use social_core::traits::{FriendshipRepository, RepoResult};
use social_core::value_objects::Snowflake;

use crate::models::FriendshipModel;

use super::error::{map_db_error, map_unique_violation};

const FRIENDSHIP_FIELDS: &str = "requester_id, recipient_id, status, created_at, updated_at";

/// PostgreSQL implementation of FriendshipRepository
///
/// The friendships table has a unique index over
/// (LEAST(requester_id, recipient_id), GREATEST(requester_id, recipient_id)),
/// enforcing the one-record-per-unordered-pair invariant under concurrent
/// inserts.
#[derive(Clone)]
pub struct PgFriendshipRepository {
    pool: PgPool,
}

impl PgFriendshipRepository {
    /// Create a new PgFriendshipRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn decode_all(models: Vec<FriendshipModel>) -> RepoResult<Vec<Friendship>> {
    models.into_iter().map(Friendship::try_from).collect()
}

#[async_trait]
impl FriendshipRepository for PgFriendshipRepository {
    #[instrument(skip(self))]
    async fn find_pair(
        &self,
        user_a: Snowflake,
        user_b: Snowflake,
    ) -> RepoResult<Option<Friendship>> {
        let result = sqlx::query_as::<_, FriendshipModel>(&format!(
            r"
            SELECT {FRIENDSHIP_FIELDS} FROM friendships
            WHERE (requester_id = $1 AND recipient_id = $2)
               OR (requester_id = $2 AND recipient_id = $1)
            "
        ))
        .bind(user_a.into_inner())
        .bind(user_b.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Friendship::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn find_pending(
        &self,
        requester_id: Snowflake,
        recipient_id: Snowflake,
    ) -> RepoResult<Option<Friendship>> {
        let result = sqlx::query_as::<_, FriendshipModel>(&format!(
            r"
            SELECT {FRIENDSHIP_FIELDS} FROM friendships
            WHERE requester_id = $1 AND recipient_id = $2 AND status = 'pending'
            "
        ))
        .bind(requester_id.into_inner())
        .bind(recipient_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Friendship::try_from).transpose()
    }

    #[instrument(skip(self, friendship))]
    async fn create(&self, friendship: &Friendship) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO friendships (requester_id, recipient_id, status, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5)
            ",
        )
        .bind(friendship.requester_id.into_inner())
        .bind(friendship.recipient_id.into_inner())
        .bind(friendship.status.as_str())
        .bind(friendship.created_at)
        .bind(friendship.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::FriendshipExists))?;

        Ok(())
    }

    #[instrument(skip(self, friendship))]
    async fn update(&self, friendship: &Friendship) -> RepoResult<()> {
        // Keyed by the unordered pair so a reopen can flip direction in place
        sqlx::query(
            r"
            UPDATE friendships
            SET requester_id = $1, recipient_id = $2, status = $3, updated_at = $4
            WHERE (requester_id = $1 AND recipient_id = $2)
               OR (requester_id = $2 AND recipient_id = $1)
            ",
        )
        .bind(friendship.requester_id.into_inner())
        .bind(friendship.recipient_id.into_inner())
        .bind(friendship.status.as_str())
        .bind(friendship.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete_pair(&self, user_a: Snowflake, user_b: Snowflake) -> RepoResult<bool> {
        let result = sqlx::query(
            r"
            DELETE FROM friendships
            WHERE (requester_id = $1 AND recipient_id = $2)
               OR (requester_id = $2 AND recipient_id = $1)
            ",
        )
        .bind(user_a.into_inner())
        .bind(user_b.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn find_incoming(&self, recipient_id: Snowflake) -> RepoResult<Vec<Friendship>> {
        let results = sqlx::query_as::<_, FriendshipModel>(&format!(
            r"
            SELECT {FRIENDSHIP_FIELDS} FROM friendships
            WHERE recipient_id = $1 AND status = 'pending'
            "
        ))
        .bind(recipient_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        decode_all(results)
    }

    #[instrument(skip(self))]
    async fn find_outgoing(&self, requester_id: Snowflake) -> RepoResult<Vec<Friendship>> {
        let results = sqlx::query_as::<_, FriendshipModel>(&format!(
            r"
            SELECT {FRIENDSHIP_FIELDS} FROM friendships
            WHERE requester_id = $1 AND status = 'pending'
            "
        ))
        .bind(requester_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        decode_all(results)
    }

    #[instrument(skip(self))]
    async fn find_accepted(&self, user_id: Snowflake) -> RepoResult<Vec<Friendship>> {
        let results = sqlx::query_as::<_, FriendshipModel>(&format!(
            r"
            SELECT {FRIENDSHIP_FIELDS} FROM friendships
            WHERE (requester_id = $1 OR recipient_id = $1) AND status = 'accepted'
            "
        ))
        .bind(user_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        decode_all(results)
    }

    #[instrument(skip(self))]
    async fn count_accepted(&self, user_id: Snowflake) -> RepoResult<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            r"
            SELECT COUNT(*) FROM friendships
            WHERE (requester_id = $1 OR recipient_id = $1) AND status = 'accepted'
            ",
        )
        .bind(user_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(count)
    }
}
