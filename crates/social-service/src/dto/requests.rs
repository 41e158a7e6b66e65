//! Request DTOs for service inputs
//!
//! All request DTOs implement `Deserialize`; the ones carrying free-form
//! fields also implement `Validate` for input validation.

use serde::Deserialize;
use validator::Validate;

use social_core::entities::{ReactionEmoji, TargetKind};
use social_core::value_objects::Snowflake;

// ============================================================================
// Listing / Pagination
// ============================================================================

/// Page-based listing query with an optional name filter
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ListQuery {
    #[validate(range(min = 1, message = "Page must be at least 1"))]
    pub page: Option<i64>,

    #[validate(range(min = 1, max = 100, message = "Limit must be 1-100"))]
    pub limit: Option<i64>,

    /// Case-insensitive substring filter on the display name
    pub name: Option<String>,
}

impl ListQuery {
    /// Requested page, defaulting to the first
    pub fn page(&self) -> i64 {
        self.page.unwrap_or(1)
    }

    /// Requested page size, defaulting to 10
    pub fn limit(&self) -> i64 {
        self.limit.unwrap_or(10)
    }

    /// Row offset for the requested page
    pub fn offset(&self) -> i64 {
        self.limit() * (self.page() - 1)
    }

    /// The name filter, with blank input treated as absent
    pub fn name_filter(&self) -> Option<&str> {
        self.name.as_deref().filter(|s| !s.trim().is_empty())
    }
}

// ============================================================================
// Post Requests
// ============================================================================

/// Create post request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePostRequest {
    #[validate(length(min = 1, max = 4000, message = "Content must be 1-4000 characters"))]
    pub content: String,

    /// Attached image URL
    pub image: Option<String>,
}

/// Update post request (whitelisted fields only)
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdatePostRequest {
    #[validate(length(min = 1, max = 4000, message = "Content must be 1-4000 characters"))]
    pub content: Option<String>,

    /// New image URL, or null to remove
    pub image: Option<Option<String>>,
}

// ============================================================================
// Comment Requests
// ============================================================================

/// Create comment request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCommentRequest {
    pub post_id: Snowflake,

    #[validate(length(min = 1, max = 2000, message = "Content must be 1-2000 characters"))]
    pub content: String,
}

/// Update comment request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateCommentRequest {
    #[validate(length(min = 1, max = 2000, message = "Content must be 1-2000 characters"))]
    pub content: String,
}

// ============================================================================
// Reaction Requests
// ============================================================================

/// Set (toggle/switch) a reaction on a post or comment
///
/// `target_type` and `emoji` deserialize through closed enums; any other wire
/// value is rejected at decode time.
#[derive(Debug, Clone, Deserialize)]
pub struct SetReactionRequest {
    pub target_type: TargetKind,
    pub target_id: Snowflake,
    pub emoji: ReactionEmoji,
}

// ============================================================================
// User Requests
// ============================================================================

/// Update profile request (whitelisted fields only)
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: Option<String>,

    pub avatar_url: Option<String>,
    pub cover_url: Option<String>,

    #[validate(length(max = 1000, message = "About me must be at most 1000 characters"))]
    pub about_me: Option<String>,

    pub city: Option<String>,
    pub country: Option<String>,
    pub company: Option<String>,
    pub job_title: Option<String>,
    pub facebook_link: Option<String>,
    pub instagram_link: Option<String>,
    pub linkedin_link: Option<String>,
    pub twitter_link: Option<String>,
}
