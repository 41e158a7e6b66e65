//! Post service
//!
//! Post CRUD plus the post-count aggregate on the author.

use tracing::{info, instrument};
use validator::Validate;

use social_core::entities::Post;
use social_core::error::DomainError;
use social_core::value_objects::Snowflake;

use crate::dto::requests::{CreatePostRequest, UpdatePostRequest};
use crate::dto::responses::PostResponse;

use super::context::ServiceContext;
use super::counters;
use super::error::ServiceResult;

/// Post service
pub struct PostService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> PostService<'a> {
    /// Create a new PostService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a post and refresh the author's post count
    #[instrument(skip(self, request))]
    pub async fn create_post(
        &self,
        author_id: Snowflake,
        request: CreatePostRequest,
    ) -> ServiceResult<PostResponse> {
        request.validate()?;

        self.ctx
            .user_repo()
            .find_by_id(author_id)
            .await?
            .ok_or(DomainError::UserNotFound(author_id))?;

        let post = Post::new(
            self.ctx.generate_id(),
            author_id,
            request.content,
            request.image,
        );
        self.ctx.post_repo().create(&post).await?;

        counters::sync_post_count(self.ctx.post_repo(), self.ctx.user_repo(), author_id).await?;

        info!(post_id = %post.id, %author_id, "Post created");
        Ok(PostResponse::from(post))
    }

    /// Fetch a post by id
    #[instrument(skip(self))]
    pub async fn get_post(&self, id: Snowflake) -> ServiceResult<PostResponse> {
        let post = self
            .ctx
            .post_repo()
            .find_by_id(id)
            .await?
            .filter(|post| !post.is_deleted)
            .ok_or(DomainError::PostNotFound(id))?;

        Ok(PostResponse::from(post))
    }

    /// Update a post's whitelisted fields (content, image); author only
    #[instrument(skip(self, request))]
    pub async fn update_post(
        &self,
        author_id: Snowflake,
        post_id: Snowflake,
        request: UpdatePostRequest,
    ) -> ServiceResult<PostResponse> {
        request.validate()?;

        let mut post = self
            .ctx
            .post_repo()
            .find_by_id(post_id)
            .await?
            .filter(|post| !post.is_deleted)
            .ok_or(DomainError::PostNotFound(post_id))?;

        if !post.is_authored_by(author_id) {
            return Err(DomainError::NotPostAuthor.into());
        }

        if let Some(content) = request.content {
            post.set_content(content);
        }
        if let Some(image) = request.image {
            post.set_image(image);
        }
        self.ctx.post_repo().update(&post).await?;

        info!(%post_id, %author_id, "Post updated");
        Ok(PostResponse::from(post))
    }

    /// Soft-delete a post (author only) and refresh the author's post count
    #[instrument(skip(self))]
    pub async fn delete_post(&self, author_id: Snowflake, post_id: Snowflake) -> ServiceResult<()> {
        let deleted = self.ctx.post_repo().soft_delete(post_id, author_id).await?;
        if !deleted {
            return Err(DomainError::PostNotFound(post_id).into());
        }

        counters::sync_post_count(self.ctx.post_repo(), self.ctx.user_repo(), author_id).await?;

        info!(%post_id, %author_id, "Post deleted");
        Ok(())
    }
}
