//! Entity to model mappers
//!
//! This module provides conversions between domain entities (social-core) and
//! database models.
//! - `From<Model> for Entity`: infallible conversions
//! - `TryFrom<Model> for Entity`: conversions that decode closed enum sets
//!   (friendship status, reaction target/emoji) and surface invalid stored
//!   values as InvalidState errors instead of coercing them

mod comment;
mod friendship;
mod post;
mod reaction;
mod user;
