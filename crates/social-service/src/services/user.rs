//! User service
//!
//! Profile reads (with the viewer's friendship annotation) and
//! field-whitelisted profile updates.

use tracing::{info, instrument};
use validator::Validate;

use social_core::entities::User;
use social_core::error::DomainError;
use social_core::value_objects::Snowflake;

use crate::dto::requests::UpdateProfileRequest;
use crate::dto::responses::{UserResponse, UserWithFriendshipResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Fetch a user, annotated with the viewer's relationship to them
    #[instrument(skip(self))]
    pub async fn get_user(
        &self,
        viewer_id: Snowflake,
        user_id: Snowflake,
    ) -> ServiceResult<UserWithFriendshipResponse> {
        let user = self.require_user(user_id).await?;

        let friendship = self
            .ctx
            .friendship_repo()
            .find_pair(viewer_id, user_id)
            .await?;

        Ok(UserWithFriendshipResponse::new(&user, friendship.as_ref()))
    }

    /// Update a user's own profile, applying only whitelisted fields
    #[instrument(skip(self, request))]
    pub async fn update_profile(
        &self,
        actor_id: Snowflake,
        user_id: Snowflake,
        request: UpdateProfileRequest,
    ) -> ServiceResult<UserResponse> {
        if actor_id != user_id {
            return Err(DomainError::NotProfileOwner.into());
        }
        request.validate()?;

        let mut user = self.require_user(user_id).await?;

        if let Some(name) = request.name {
            user.set_name(name);
        }
        if let Some(avatar_url) = request.avatar_url {
            user.avatar_url = Some(avatar_url);
        }
        if let Some(cover_url) = request.cover_url {
            user.cover_url = Some(cover_url);
        }
        if let Some(about_me) = request.about_me {
            user.about_me = Some(about_me);
        }
        if let Some(city) = request.city {
            user.city = Some(city);
        }
        if let Some(country) = request.country {
            user.country = Some(country);
        }
        if let Some(company) = request.company {
            user.company = Some(company);
        }
        if let Some(job_title) = request.job_title {
            user.job_title = Some(job_title);
        }
        if let Some(facebook_link) = request.facebook_link {
            user.facebook_link = Some(facebook_link);
        }
        if let Some(instagram_link) = request.instagram_link {
            user.instagram_link = Some(instagram_link);
        }
        if let Some(linkedin_link) = request.linkedin_link {
            user.linkedin_link = Some(linkedin_link);
        }
        if let Some(twitter_link) = request.twitter_link {
            user.twitter_link = Some(twitter_link);
        }
        user.updated_at = chrono::Utc::now();

        self.ctx.user_repo().update(&user).await?;

        info!(%user_id, "Profile updated");
        Ok(UserResponse::from(user))
    }

    async fn require_user(&self, id: Snowflake) -> ServiceResult<User> {
        self.ctx
            .user_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::UserNotFound(id).into())
    }
}
