//! PostgreSQL implementation of PostRepository

use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use tracing::instrument;

use social_core::entities::{Post, ReactionTally};
use social_core::traits::{PostRepository, RepoResult};
use social_core::value_objects::Snowflake;

use crate::models::PostModel;

use super::error::map_db_error;

const POST_FIELDS: &str = "id, author_id, content, image, comment_count, like_count, \
                           dislike_count, is_deleted, created_at, updated_at";

/// PostgreSQL implementation of PostRepository
#[derive(Clone)]
pub struct PgPostRepository {
    pool: PgPool,
}

impl PgPostRepository {
    /// Create a new PgPostRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PostRepository for PgPostRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Post>> {
        let result = sqlx::query_as::<_, PostModel>(&format!(
            "SELECT {POST_FIELDS} FROM posts WHERE id = $1"
        ))
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Post::from))
    }

    #[instrument(skip(self, post))]
    async fn create(&self, post: &Post) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO posts (id, author_id, content, image, comment_count, like_count,
                               dislike_count, is_deleted, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            ",
        )
        .bind(post.id.into_inner())
        .bind(post.author_id.into_inner())
        .bind(&post.content)
        .bind(&post.image)
        .bind(post.comment_count)
        .bind(post.reactions.like)
        .bind(post.reactions.dislike)
        .bind(post.is_deleted)
        .bind(post.created_at)
        .bind(post.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self, post))]
    async fn update(&self, post: &Post) -> RepoResult<()> {
        sqlx::query(
            r"
            UPDATE posts SET content = $2, image = $3, updated_at = $4 WHERE id = $1
            ",
        )
        .bind(post.id.into_inner())
        .bind(&post.content)
        .bind(&post.image)
        .bind(post.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn soft_delete(&self, id: Snowflake, author_id: Snowflake) -> RepoResult<bool> {
        let result = sqlx::query(
            r"
            UPDATE posts SET is_deleted = TRUE, updated_at = $3
            WHERE id = $1 AND author_id = $2 AND is_deleted = FALSE
            ",
        )
        .bind(id.into_inner())
        .bind(author_id.into_inner())
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn count_by_author(&self, author_id: Snowflake) -> RepoResult<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM posts WHERE author_id = $1 AND is_deleted = FALSE",
        )
        .bind(author_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(count)
    }

    #[instrument(skip(self))]
    async fn set_comment_count(&self, id: Snowflake, count: i64) -> RepoResult<()> {
        sqlx::query("UPDATE posts SET comment_count = $2 WHERE id = $1")
            .bind(id.into_inner())
            .bind(count)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn set_reactions(&self, id: Snowflake, tally: ReactionTally) -> RepoResult<()> {
        sqlx::query("UPDATE posts SET like_count = $2, dislike_count = $3 WHERE id = $1")
            .bind(id.into_inner())
            .bind(tally.like)
            .bind(tally.dislike)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(())
    }
}
