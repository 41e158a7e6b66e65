//! User entity - a member of the social graph

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// User entity with profile fields and denormalized activity counters
///
/// `friend_count` and `post_count` are cached aggregates derived from the
/// friendship and post tables. They are written only by the counter
/// synchronization functions and must never be treated as a source of truth.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Snowflake,
    pub name: String,
    pub email: String,
    pub avatar_url: Option<String>,
    pub cover_url: Option<String>,
    pub about_me: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub company: Option<String>,
    pub job_title: Option<String>,
    pub facebook_link: Option<String>,
    pub instagram_link: Option<String>,
    pub linkedin_link: Option<String>,
    pub twitter_link: Option<String>,
    pub friend_count: i64,
    pub post_count: i64,
    pub is_deleted: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new User with required fields
    pub fn new(id: Snowflake, name: String, email: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            name,
            email,
            avatar_url: None,
            cover_url: None,
            about_me: None,
            city: None,
            country: None,
            company: None,
            job_title: None,
            facebook_link: None,
            instagram_link: None,
            linkedin_link: None,
            twitter_link: None,
            friend_count: 0,
            post_count: 0,
            is_deleted: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Case-insensitive substring match on the display name
    pub fn matches_name(&self, filter: &str) -> bool {
        self.name.to_lowercase().contains(&filter.to_lowercase())
    }

    /// Update the display name
    pub fn set_name(&mut self, name: String) {
        self.name = name;
        self.updated_at = Utc::now();
    }
}
