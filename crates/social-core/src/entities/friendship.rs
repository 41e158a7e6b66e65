//! Friendship entity - the single canonical record for a pair of users
//!
//! A friendship starts life as a directed request (`requester_id` ->
//! `recipient_id`) and becomes an undirected edge once accepted. At most one
//! record ever exists per unordered pair; a declined record is reused
//! (reopened) instead of inserting a second row.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;
use crate::value_objects::Snowflake;

/// Lifecycle state of a friendship record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FriendshipStatus {
    Pending,
    Accepted,
    Declined,
}

impl FriendshipStatus {
    /// Stable storage/wire representation
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Accepted => "accepted",
            Self::Declined => "declined",
        }
    }
}

impl fmt::Display for FriendshipStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FriendshipStatus {
    type Err = DomainError;

    /// Any value outside the known set is an invariant violation and must be
    /// surfaced, never coerced to a default.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "accepted" => Ok(Self::Accepted),
            "declined" => Ok(Self::Declined),
            other => Err(DomainError::UnknownFriendshipStatus(other.to_string())),
        }
    }
}

/// The recipient's decision on a pending request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestDecision {
    Accepted,
    Declined,
}

impl RequestDecision {
    /// The status a record moves to under this decision
    pub const fn as_status(self) -> FriendshipStatus {
        match self {
            Self::Accepted => FriendshipStatus::Accepted,
            Self::Declined => FriendshipStatus::Declined,
        }
    }
}

/// Friendship entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Friendship {
    /// The user who sent the (current) request
    pub requester_id: Snowflake,
    /// The user the request was sent to
    pub recipient_id: Snowflake,
    pub status: FriendshipStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Friendship {
    /// Create a new pending request from `requester_id` to `recipient_id`
    pub fn new(requester_id: Snowflake, recipient_id: Snowflake) -> Self {
        let now = Utc::now();
        Self {
            requester_id,
            recipient_id,
            status: FriendshipStatus::Pending,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check whether a user is on either side of this record
    #[inline]
    pub fn involves(&self, user_id: Snowflake) -> bool {
        self.requester_id == user_id || self.recipient_id == user_id
    }

    /// The counterpart of `user_id` in this record, or None if `user_id` is
    /// on neither side. Both list and mutate paths go through this instead of
    /// re-deriving direction locally.
    pub fn other_party(&self, user_id: Snowflake) -> Option<Snowflake> {
        if self.requester_id == user_id {
            Some(self.recipient_id)
        } else if self.recipient_id == user_id {
            Some(self.requester_id)
        } else {
            None
        }
    }

    /// Check for a pending request sent by `user_id`
    #[inline]
    pub fn is_pending_from(&self, user_id: Snowflake) -> bool {
        self.status == FriendshipStatus::Pending && self.requester_id == user_id
    }

    /// Resolve a pending request with the recipient's decision
    pub fn resolve(&mut self, decision: RequestDecision) {
        self.status = decision.as_status();
        self.updated_at = Utc::now();
    }

    /// Reopen a declined record as a fresh pending request
    ///
    /// The record is reused rather than replaced: direction is reassigned to
    /// the new requester (who may be either party) and `updated_at` refreshed.
    pub fn reopen(&mut self, requester_id: Snowflake, recipient_id: Snowflake) {
        self.requester_id = requester_id;
        self.recipient_id = recipient_id;
        self.status = FriendshipStatus::Pending;
        self.updated_at = Utc::now();
    }
}
