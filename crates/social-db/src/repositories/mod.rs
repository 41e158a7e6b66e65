//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in social-core.
//! Each repository handles database operations for a specific domain entity.

mod comment;
mod error;
mod friendship;
mod post;
mod reaction;
mod user;

pub use comment::PgCommentRepository;
pub use friendship::PgFriendshipRepository;
pub use post::PgPostRepository;
pub use reaction::PgReactionRepository;
pub use user::PgUserRepository;
