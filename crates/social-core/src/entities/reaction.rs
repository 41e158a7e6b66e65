//! Reaction entity - one user's stance (like/dislike) on a post or comment

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;
use crate::value_objects::Snowflake;

/// The kind of entity a reaction points at
///
/// A closed set: dispatch on this enum selects the concrete target table.
/// Anything else on the wire or in storage is rejected as an invariant
/// violation, never looked up dynamically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TargetKind {
    Post,
    Comment,
}

impl TargetKind {
    /// Stable storage/wire representation
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Post => "Post",
            Self::Comment => "Comment",
        }
    }
}

impl fmt::Display for TargetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TargetKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Post" => Ok(Self::Post),
            "Comment" => Ok(Self::Comment),
            other => Err(DomainError::UnknownTargetKind(other.to_string())),
        }
    }
}

/// The reaction emoji
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReactionEmoji {
    Like,
    Dislike,
}

impl ReactionEmoji {
    /// Stable storage/wire representation
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Like => "like",
            Self::Dislike => "dislike",
        }
    }
}

impl fmt::Display for ReactionEmoji {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReactionEmoji {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "like" => Ok(Self::Like),
            "dislike" => Ok(Self::Dislike),
            other => Err(DomainError::UnknownEmoji(other.to_string())),
        }
    }
}

/// Reaction entity
///
/// Identity is (author, target kind, target id): a user holds at most one
/// stance per target. Switching emoji mutates the record in place so the
/// original `created_at` survives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reaction {
    pub author_id: Snowflake,
    pub target_kind: TargetKind,
    pub target_id: Snowflake,
    pub emoji: ReactionEmoji,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Reaction {
    /// Create a new Reaction
    pub fn new(
        author_id: Snowflake,
        target_kind: TargetKind,
        target_id: Snowflake,
        emoji: ReactionEmoji,
    ) -> Self {
        let now = Utc::now();
        Self {
            author_id,
            target_kind,
            target_id,
            emoji,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check if the reaction carries a specific emoji
    #[inline]
    pub fn is_emoji(&self, emoji: ReactionEmoji) -> bool {
        self.emoji == emoji
    }

    /// Switch to a different emoji, keeping the record's identity
    pub fn switch(&mut self, emoji: ReactionEmoji) {
        self.emoji = emoji;
        self.updated_at = Utc::now();
    }
}

/// Cached like/dislike counts stored on a reaction target
///
/// Derived from the reaction rows for the target; never a source of truth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ReactionTally {
    pub like: i64,
    pub dislike: i64,
}

impl ReactionTally {
    /// Create a tally with explicit counts
    pub const fn new(like: i64, dislike: i64) -> Self {
        Self { like, dislike }
    }

    /// Add one reaction to the tally
    pub fn record(&mut self, emoji: ReactionEmoji) {
        match emoji {
            ReactionEmoji::Like => self.like += 1,
            ReactionEmoji::Dislike => self.dislike += 1,
        }
    }

    /// Total number of reactions counted
    pub const fn total(&self) -> i64 {
        self.like + self.dislike
    }
}
