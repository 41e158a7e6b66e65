//! User entity <-> model mapper

use social_core::entities::User;
use social_core::value_objects::Snowflake;

use crate::models::UserModel;

/// Convert UserModel to User entity
impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: Snowflake::new(model.id),
            name: model.name,
            email: model.email,
            avatar_url: model.avatar_url,
            cover_url: model.cover_url,
            about_me: model.about_me,
            city: model.city,
            country: model.country,
            company: model.company,
            job_title: model.job_title,
            facebook_link: model.facebook_link,
            instagram_link: model.instagram_link,
            linkedin_link: model.linkedin_link,
            twitter_link: model.twitter_link,
            friend_count: model.friend_count,
            post_count: model.post_count,
            is_deleted: model.is_deleted,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
