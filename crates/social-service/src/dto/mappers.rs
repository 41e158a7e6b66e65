//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use social_core::entities::{Comment, Friendship, Post, User};

use super::responses::{
    CommentResponse, FriendshipResponse, PostResponse, UserResponse, UserWithFriendshipResponse,
};

// ============================================================================
// User Mappers
// ============================================================================

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            name: user.name.clone(),
            avatar_url: user.avatar_url.clone(),
            cover_url: user.cover_url.clone(),
            about_me: user.about_me.clone(),
            city: user.city.clone(),
            country: user.country.clone(),
            company: user.company.clone(),
            job_title: user.job_title.clone(),
            friend_count: user.friend_count,
            post_count: user.post_count,
            created_at: user.created_at,
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

// ============================================================================
// Friendship Mappers
// ============================================================================

impl From<&Friendship> for FriendshipResponse {
    fn from(friendship: &Friendship) -> Self {
        Self {
            from: friendship.requester_id.to_string(),
            to: friendship.recipient_id.to_string(),
            status: friendship.status,
            updated_at: friendship.updated_at,
        }
    }
}

impl From<Friendship> for FriendshipResponse {
    fn from(friendship: Friendship) -> Self {
        Self::from(&friendship)
    }
}

impl UserWithFriendshipResponse {
    /// Attach the viewer's relationship record, if any, to a user
    pub fn new(user: &User, friendship: Option<&Friendship>) -> Self {
        Self {
            user: UserResponse::from(user),
            friendship: friendship.map(FriendshipResponse::from),
        }
    }
}

// ============================================================================
// Post / Comment Mappers
// ============================================================================

impl From<&Post> for PostResponse {
    fn from(post: &Post) -> Self {
        Self {
            id: post.id.to_string(),
            author_id: post.author_id.to_string(),
            content: post.content.clone(),
            image: post.image.clone(),
            comment_count: post.comment_count,
            reactions: post.reactions.into(),
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self::from(&post)
    }
}

impl From<&Comment> for CommentResponse {
    fn from(comment: &Comment) -> Self {
        Self {
            id: comment.id.to_string(),
            post_id: comment.post_id.to_string(),
            author_id: comment.author_id.to_string(),
            content: comment.content.clone(),
            reactions: comment.reactions.into(),
            created_at: comment.created_at,
            updated_at: comment.updated_at,
        }
    }
}

impl From<Comment> for CommentResponse {
    fn from(comment: Comment) -> Self {
        Self::from(&comment)
    }
}
