//! Comment service
//!
//! Comment CRUD plus the comment-count aggregate on the parent post.

use tracing::{info, instrument};
use validator::Validate;

use social_core::entities::Comment;
use social_core::error::DomainError;
use social_core::value_objects::Snowflake;

use crate::dto::requests::{CreateCommentRequest, UpdateCommentRequest};
use crate::dto::responses::CommentResponse;

use super::context::ServiceContext;
use super::counters;
use super::error::ServiceResult;

/// Comment service
pub struct CommentService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CommentService<'a> {
    /// Create a new CommentService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a comment on a post and refresh the post's comment count
    #[instrument(skip(self, request))]
    pub async fn create_comment(
        &self,
        author_id: Snowflake,
        request: CreateCommentRequest,
    ) -> ServiceResult<CommentResponse> {
        request.validate()?;
        let post_id = request.post_id;

        self.ctx
            .post_repo()
            .find_by_id(post_id)
            .await?
            .filter(|post| !post.is_deleted)
            .ok_or(DomainError::PostNotFound(post_id))?;

        let comment = Comment::new(self.ctx.generate_id(), post_id, author_id, request.content);
        self.ctx.comment_repo().create(&comment).await?;

        counters::sync_comment_count(self.ctx.comment_repo(), self.ctx.post_repo(), post_id)
            .await?;

        info!(comment_id = %comment.id, %post_id, %author_id, "Comment created");
        Ok(CommentResponse::from(comment))
    }

    /// Fetch a comment by id
    #[instrument(skip(self))]
    pub async fn get_comment(&self, id: Snowflake) -> ServiceResult<CommentResponse> {
        let comment = self
            .ctx
            .comment_repo()
            .find_by_id(id)
            .await?
            .filter(|comment| !comment.is_deleted)
            .ok_or(DomainError::CommentNotFound(id))?;

        Ok(CommentResponse::from(comment))
    }

    /// Update a comment's content; author only
    #[instrument(skip(self, request))]
    pub async fn update_comment(
        &self,
        author_id: Snowflake,
        comment_id: Snowflake,
        request: UpdateCommentRequest,
    ) -> ServiceResult<CommentResponse> {
        request.validate()?;

        let mut comment = self
            .ctx
            .comment_repo()
            .find_by_id(comment_id)
            .await?
            .filter(|comment| !comment.is_deleted)
            .ok_or(DomainError::CommentNotFound(comment_id))?;

        if !comment.is_authored_by(author_id) {
            return Err(DomainError::NotCommentAuthor.into());
        }

        comment.set_content(request.content);
        self.ctx.comment_repo().update(&comment).await?;

        info!(%comment_id, %author_id, "Comment updated");
        Ok(CommentResponse::from(comment))
    }

    /// Delete a comment (author only) and refresh the post's comment count
    #[instrument(skip(self))]
    pub async fn delete_comment(
        &self,
        author_id: Snowflake,
        comment_id: Snowflake,
    ) -> ServiceResult<CommentResponse> {
        let comment = self
            .ctx
            .comment_repo()
            .find_by_id(comment_id)
            .await?
            .ok_or(DomainError::CommentNotFound(comment_id))?;

        if !comment.is_authored_by(author_id) {
            return Err(DomainError::NotCommentAuthor.into());
        }

        let deleted = self.ctx.comment_repo().delete(comment_id, author_id).await?;
        if !deleted {
            return Err(DomainError::CommentNotFound(comment_id).into());
        }

        counters::sync_comment_count(self.ctx.comment_repo(), self.ctx.post_repo(), comment.post_id)
            .await?;

        info!(%comment_id, %author_id, "Comment deleted");
        Ok(CommentResponse::from(comment))
    }
}
