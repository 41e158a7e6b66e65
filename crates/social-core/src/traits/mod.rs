//! Repository traits (ports) for the entity store

mod repositories;

pub use repositories::{
    CommentRepository, FriendshipRepository, PostRepository, ReactionRepository, RepoResult,
    UserRepository,
};
