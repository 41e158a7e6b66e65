//! PostgreSQL implementation of UserRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use social_core::entities::User;
use social_core::traits::{RepoResult, UserRepository};
use social_core::value_objects::Snowflake;

use crate::models::UserModel;

use super::error::map_db_error;

const USER_FIELDS: &str = "id, name, email, avatar_url, cover_url, about_me, city, country, \
                           company, job_title, facebook_link, instagram_link, linkedin_link, \
                           twitter_link, friend_count, post_count, is_deleted, created_at, \
                           updated_at";

/// PostgreSQL implementation of UserRepository
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    /// Create a new PgUserRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<User>> {
        let result = sqlx::query_as::<_, UserModel>(&format!(
            "SELECT {USER_FIELDS} FROM users WHERE id = $1 AND is_deleted = FALSE"
        ))
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(User::from))
    }

    #[instrument(skip(self, user))]
    async fn create(&self, user: &User) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO users (id, name, email, avatar_url, cover_url, about_me, city, country,
                               company, job_title, facebook_link, instagram_link, linkedin_link,
                               twitter_link, friend_count, post_count, is_deleted, created_at,
                               updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17,
                    $18, $19)
            ",
        )
        .bind(user.id.into_inner())
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.avatar_url)
        .bind(&user.cover_url)
        .bind(&user.about_me)
        .bind(&user.city)
        .bind(&user.country)
        .bind(&user.company)
        .bind(&user.job_title)
        .bind(&user.facebook_link)
        .bind(&user.instagram_link)
        .bind(&user.linkedin_link)
        .bind(&user.twitter_link)
        .bind(user.friend_count)
        .bind(user.post_count)
        .bind(user.is_deleted)
        .bind(user.created_at)
        .bind(user.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self, user))]
    async fn update(&self, user: &User) -> RepoResult<()> {
        sqlx::query(
            r"
            UPDATE users
            SET name = $2, avatar_url = $3, cover_url = $4, about_me = $5, city = $6,
                country = $7, company = $8, job_title = $9, facebook_link = $10,
                instagram_link = $11, linkedin_link = $12, twitter_link = $13, updated_at = $14
            WHERE id = $1
            ",
        )
        .bind(user.id.into_inner())
        .bind(&user.name)
        .bind(&user.avatar_url)
        .bind(&user.cover_url)
        .bind(&user.about_me)
        .bind(&user.city)
        .bind(&user.country)
        .bind(&user.company)
        .bind(&user.job_title)
        .bind(&user.facebook_link)
        .bind(&user.instagram_link)
        .bind(&user.linkedin_link)
        .bind(&user.twitter_link)
        .bind(user.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn set_friend_count(&self, id: Snowflake, count: i64) -> RepoResult<()> {
        sqlx::query("UPDATE users SET friend_count = $2 WHERE id = $1")
            .bind(id.into_inner())
            .bind(count)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn set_post_count(&self, id: Snowflake, count: i64) -> RepoResult<()> {
        sqlx::query("UPDATE users SET post_count = $2 WHERE id = $1")
            .bind(id.into_inner())
            .bind(count)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self, ids))]
    async fn find_in_ids(
        &self,
        ids: &[Snowflake],
        name_filter: Option<&str>,
        offset: i64,
        limit: i64,
    ) -> RepoResult<Vec<User>> {
        let raw_ids: Vec<i64> = ids.iter().map(|id| id.into_inner()).collect();

        let results = sqlx::query_as::<_, UserModel>(&format!(
            r"
            SELECT {USER_FIELDS} FROM users
            WHERE id = ANY($1) AND is_deleted = FALSE
              AND ($2::TEXT IS NULL OR name ILIKE '%' || $2 || '%')
            ORDER BY id DESC
            OFFSET $3 LIMIT $4
            "
        ))
        .bind(&raw_ids)
        .bind(name_filter)
        .bind(offset)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(User::from).collect())
    }

    #[instrument(skip(self, ids))]
    async fn count_in_ids(&self, ids: &[Snowflake], name_filter: Option<&str>) -> RepoResult<i64> {
        let raw_ids: Vec<i64> = ids.iter().map(|id| id.into_inner()).collect();

        let count = sqlx::query_scalar::<_, i64>(
            r"
            SELECT COUNT(*) FROM users
            WHERE id = ANY($1) AND is_deleted = FALSE
              AND ($2::TEXT IS NULL OR name ILIKE '%' || $2 || '%')
            ",
        )
        .bind(&raw_ids)
        .bind(name_filter)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(count)
    }
}
