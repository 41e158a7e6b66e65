//! PostgreSQL implementation of ReactionRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use social_core::entities::{Reaction, ReactionEmoji, ReactionTally, TargetKind};
use social_core::traits::{ReactionRepository, RepoResult};
use social_core::value_objects::Snowflake;

use crate::models::{ReactionCountModel, ReactionModel};

use super::error::map_db_error;

const REACTION_FIELDS: &str = "author_id, target_type, target_id, emoji, created_at, updated_at";

/// PostgreSQL implementation of ReactionRepository
///
/// Primary key is (author_id, target_type, target_id): one stance per user
/// per target, so a concurrent same-author race degrades to last-writer-wins.
#[derive(Clone)]
pub struct PgReactionRepository {
    pool: PgPool,
}

impl PgReactionRepository {
    /// Create a new PgReactionRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReactionRepository for PgReactionRepository {
    #[instrument(skip(self))]
    async fn find(
        &self,
        author_id: Snowflake,
        target_kind: TargetKind,
        target_id: Snowflake,
    ) -> RepoResult<Option<Reaction>> {
        let result = sqlx::query_as::<_, ReactionModel>(&format!(
            r"
            SELECT {REACTION_FIELDS} FROM reactions
            WHERE author_id = $1 AND target_type = $2 AND target_id = $3
            "
        ))
        .bind(author_id.into_inner())
        .bind(target_kind.as_str())
        .bind(target_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Reaction::try_from).transpose()
    }

    #[instrument(skip(self, reaction))]
    async fn create(&self, reaction: &Reaction) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO reactions (author_id, target_type, target_id, emoji, created_at,
                                   updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ",
        )
        .bind(reaction.author_id.into_inner())
        .bind(reaction.target_kind.as_str())
        .bind(reaction.target_id.into_inner())
        .bind(reaction.emoji.as_str())
        .bind(reaction.created_at)
        .bind(reaction.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self, reaction))]
    async fn update(&self, reaction: &Reaction) -> RepoResult<()> {
        sqlx::query(
            r"
            UPDATE reactions SET emoji = $4, updated_at = $5
            WHERE author_id = $1 AND target_type = $2 AND target_id = $3
            ",
        )
        .bind(reaction.author_id.into_inner())
        .bind(reaction.target_kind.as_str())
        .bind(reaction.target_id.into_inner())
        .bind(reaction.emoji.as_str())
        .bind(reaction.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(
        &self,
        author_id: Snowflake,
        target_kind: TargetKind,
        target_id: Snowflake,
    ) -> RepoResult<bool> {
        let result = sqlx::query(
            r"
            DELETE FROM reactions
            WHERE author_id = $1 AND target_type = $2 AND target_id = $3
            ",
        )
        .bind(author_id.into_inner())
        .bind(target_kind.as_str())
        .bind(target_id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn tally(
        &self,
        target_kind: TargetKind,
        target_id: Snowflake,
    ) -> RepoResult<ReactionTally> {
        let results = sqlx::query_as::<_, ReactionCountModel>(
            r"
            SELECT emoji, COUNT(*) AS count FROM reactions
            WHERE target_type = $1 AND target_id = $2
            GROUP BY emoji
            ",
        )
        .bind(target_kind.as_str())
        .bind(target_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        let mut tally = ReactionTally::default();
        for row in results {
            // A stored emoji outside the closed set is an invariant violation
            match row.emoji.parse::<ReactionEmoji>()? {
                ReactionEmoji::Like => tally.like = row.count,
                ReactionEmoji::Dislike => tally.dislike = row.count,
            }
        }
        Ok(tally)
    }
}
