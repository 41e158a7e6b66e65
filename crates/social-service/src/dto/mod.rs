//! Data transfer objects for service inputs and outputs
//!
//! This module provides:
//! - Request DTOs with validation for caller inputs
//! - Response DTOs for serializing outputs
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

// Re-export commonly used request types
pub use requests::{
    CreateCommentRequest, CreatePostRequest, ListQuery, SetReactionRequest, UpdateCommentRequest,
    UpdatePostRequest, UpdateProfileRequest,
};

// Re-export commonly used response types
pub use responses::{
    CommentResponse, FriendListResponse, FriendshipResponse, PostResponse, ReactionsResponse,
    UserResponse, UserWithFriendshipResponse,
};
