//! Reaction service
//!
//! Owns toggle/switch/delete semantics for like/dislike reactions on posts
//! and comments: re-submitting the emoji a user already holds clears it,
//! submitting the other one switches the existing record in place.

use tracing::{info, instrument};

use social_core::entities::{Reaction, TargetKind};
use social_core::error::DomainError;
use social_core::value_objects::Snowflake;

use crate::dto::requests::SetReactionRequest;
use crate::dto::responses::ReactionsResponse;

use super::context::ServiceContext;
use super::counters;
use super::error::ServiceResult;

/// Reaction service
pub struct ReactionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ReactionService<'a> {
    /// Create a new ReactionService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Set a user's reaction on a target and return the fresh tally
    ///
    /// One reaction per (author, target): no prior record creates one, the
    /// same emoji toggles it off, a different emoji switches the record in
    /// place so its identity and created_at survive. The target's cached
    /// tally is recomputed from the surviving rows either way.
    #[instrument(skip(self))]
    pub async fn set_reaction(
        &self,
        author_id: Snowflake,
        request: SetReactionRequest,
    ) -> ServiceResult<ReactionsResponse> {
        let SetReactionRequest {
            target_type,
            target_id,
            emoji,
        } = request;

        self.require_target(target_type, target_id).await?;

        let reactions = self.ctx.reaction_repo();
        match reactions.find(author_id, target_type, target_id).await? {
            None => {
                let reaction = Reaction::new(author_id, target_type, target_id, emoji);
                reactions.create(&reaction).await?;
                info!(%author_id, %target_id, kind = %target_type, %emoji, "Reaction created");
            }
            Some(existing) if existing.is_emoji(emoji) => {
                reactions.delete(author_id, target_type, target_id).await?;
                info!(%author_id, %target_id, kind = %target_type, %emoji, "Reaction toggled off");
            }
            Some(mut existing) => {
                existing.switch(emoji);
                reactions.update(&existing).await?;
                info!(%author_id, %target_id, kind = %target_type, %emoji, "Reaction switched");
            }
        }

        let tally = counters::sync_reaction_tally(
            reactions,
            self.ctx.post_repo(),
            self.ctx.comment_repo(),
            target_type,
            target_id,
        )
        .await?;

        Ok(ReactionsResponse::from(tally))
    }

    /// Verify the target exists and is not deleted
    ///
    /// The target kind is a closed set: each variant names exactly one
    /// repository to consult.
    async fn require_target(&self, kind: TargetKind, id: Snowflake) -> ServiceResult<()> {
        match kind {
            TargetKind::Post => self
                .ctx
                .post_repo()
                .find_by_id(id)
                .await?
                .filter(|post| !post.is_deleted)
                .map(|_| ())
                .ok_or_else(|| DomainError::PostNotFound(id).into()),
            TargetKind::Comment => self
                .ctx
                .comment_repo()
                .find_by_id(id)
                .await?
                .filter(|comment| !comment.is_deleted)
                .map(|_| ())
                .ok_or_else(|| DomainError::CommentNotFound(id).into()),
        }
    }
}
