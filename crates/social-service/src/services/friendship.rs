//! Friendship service
//!
//! Owns the friend-request state machine. One record per unordered pair of
//! users, moving through pending -> accepted/declined, with declined records
//! reopened in place rather than duplicated.

use tracing::{info, instrument};
use validator::Validate;

use social_core::entities::{Friendship, FriendshipStatus, RequestDecision, User};
use social_core::error::DomainError;
use social_core::value_objects::Snowflake;

use crate::dto::requests::ListQuery;
use crate::dto::responses::{FriendListResponse, FriendshipResponse};
use crate::dto::UserWithFriendshipResponse;

use super::context::ServiceContext;
use super::counters;
use super::error::{ServiceError, ServiceResult};

/// Friendship service
pub struct FriendshipService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> FriendshipService<'a> {
    /// Create a new FriendshipService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Send a friend request, or reopen a previously declined one
    ///
    /// The unordered pair {requester, recipient} has at most one record:
    /// - none -> a new pending request is created
    /// - pending -> conflict, with the message distinguishing which side the
    ///   caller is on
    /// - accepted -> conflict, already friends
    /// - declined -> the record is reopened as a fresh pending request from
    ///   the caller, whichever party originally declined
    #[instrument(skip(self))]
    pub async fn send_request(
        &self,
        requester_id: Snowflake,
        recipient_id: Snowflake,
    ) -> ServiceResult<FriendshipResponse> {
        if requester_id == recipient_id {
            return Err(ServiceError::validation(
                "Cannot send a friend request to yourself",
            ));
        }
        self.require_user(requester_id).await?;
        self.require_user(recipient_id).await?;

        let friendships = self.ctx.friendship_repo();
        match friendships.find_pair(requester_id, recipient_id).await? {
            None => {
                let friendship = Friendship::new(requester_id, recipient_id);
                // A concurrent duplicate insert loses against the store's
                // pair-uniqueness constraint and surfaces as a conflict here
                friendships.create(&friendship).await?;

                info!(%requester_id, %recipient_id, "Friend request sent");
                Ok(FriendshipResponse::from(friendship))
            }
            Some(existing) => match existing.status {
                FriendshipStatus::Pending => {
                    if existing.is_pending_from(requester_id) {
                        Err(DomainError::RequestAlreadySent.into())
                    } else {
                        Err(DomainError::RequestAlreadyReceived.into())
                    }
                }
                FriendshipStatus::Accepted => Err(DomainError::AlreadyFriends.into()),
                FriendshipStatus::Declined => {
                    let mut friendship = existing;
                    friendship.reopen(requester_id, recipient_id);
                    friendships.update(&friendship).await?;

                    info!(%requester_id, %recipient_id, "Declined request reopened");
                    Ok(FriendshipResponse::from(friendship))
                }
            },
        }
    }

    /// Accept or decline a pending request addressed to `recipient_id`
    ///
    /// Only the recipient of a still-pending request can resolve it: the
    /// lookup is keyed on the exact direction and pending status, so a
    /// requester resolving their own request or a re-resolution of a settled
    /// request both come back as not found.
    #[instrument(skip(self))]
    pub async fn react_to_request(
        &self,
        recipient_id: Snowflake,
        requester_id: Snowflake,
        decision: RequestDecision,
    ) -> ServiceResult<FriendshipResponse> {
        let friendships = self.ctx.friendship_repo();
        let mut friendship = friendships
            .find_pending(requester_id, recipient_id)
            .await?
            .ok_or(DomainError::RequestNotFound)?;

        friendship.resolve(decision);
        friendships.update(&friendship).await?;

        if decision == RequestDecision::Accepted {
            // A new edge exists; both endpoints' cached counts are stale
            counters::sync_friend_count(friendships, self.ctx.user_repo(), recipient_id).await?;
            counters::sync_friend_count(friendships, self.ctx.user_repo(), requester_id).await?;
        }

        info!(%requester_id, %recipient_id, decision = ?decision, "Friend request resolved");
        Ok(FriendshipResponse::from(friendship))
    }

    /// Cancel an outgoing request that is still pending
    #[instrument(skip(self))]
    pub async fn cancel_request(
        &self,
        requester_id: Snowflake,
        recipient_id: Snowflake,
    ) -> ServiceResult<FriendshipResponse> {
        let friendships = self.ctx.friendship_repo();
        let friendship = friendships
            .find_pending(requester_id, recipient_id)
            .await?
            .ok_or(DomainError::RequestNotFound)?;

        friendships.delete_pair(requester_id, recipient_id).await?;

        info!(%requester_id, %recipient_id, "Friend request cancelled");
        Ok(FriendshipResponse::from(friendship))
    }

    /// Remove an accepted friendship, from either side
    #[instrument(skip(self))]
    pub async fn remove_friend(
        &self,
        user_id: Snowflake,
        friend_id: Snowflake,
    ) -> ServiceResult<FriendshipResponse> {
        let friendships = self.ctx.friendship_repo();
        let friendship = friendships
            .find_pair(user_id, friend_id)
            .await?
            .filter(|f| f.status == FriendshipStatus::Accepted)
            .ok_or(DomainError::FriendNotFound)?;

        friendships.delete_pair(user_id, friend_id).await?;

        // The edge is gone; both endpoints' cached counts are stale
        counters::sync_friend_count(friendships, self.ctx.user_repo(), user_id).await?;
        counters::sync_friend_count(friendships, self.ctx.user_repo(), friend_id).await?;

        info!(%user_id, %friend_id, "Friend removed");
        Ok(FriendshipResponse::from(friendship))
    }

    /// List pending requests addressed to a user
    #[instrument(skip(self, query))]
    pub async fn list_incoming(
        &self,
        recipient_id: Snowflake,
        query: &ListQuery,
    ) -> ServiceResult<FriendListResponse> {
        query.validate()?;
        let relationships = self.ctx.friendship_repo().find_incoming(recipient_id).await?;
        self.page_counterparts(recipient_id, &relationships, query).await
    }

    /// List pending requests a user has sent
    #[instrument(skip(self, query))]
    pub async fn list_outgoing(
        &self,
        requester_id: Snowflake,
        query: &ListQuery,
    ) -> ServiceResult<FriendListResponse> {
        query.validate()?;
        let relationships = self.ctx.friendship_repo().find_outgoing(requester_id).await?;
        self.page_counterparts(requester_id, &relationships, query).await
    }

    /// List a user's accepted friends
    #[instrument(skip(self, query))]
    pub async fn list_friends(
        &self,
        user_id: Snowflake,
        query: &ListQuery,
    ) -> ServiceResult<FriendListResponse> {
        query.validate()?;
        let relationships = self.ctx.friendship_repo().find_accepted(user_id).await?;
        self.page_counterparts(user_id, &relationships, query).await
    }

    /// Resolve relationship records to the counterpart users, filter by name,
    /// paginate newest-first, and annotate each user with their record
    async fn page_counterparts(
        &self,
        user_id: Snowflake,
        relationships: &[Friendship],
        query: &ListQuery,
    ) -> ServiceResult<FriendListResponse> {
        let ids: Vec<Snowflake> = relationships
            .iter()
            .filter_map(|f| f.other_party(user_id))
            .collect();

        let users = self.ctx.user_repo();
        let count = users.count_in_ids(&ids, query.name_filter()).await?;
        let total_pages = if count == 0 {
            0
        } else {
            (count as u64).div_ceil(query.limit() as u64) as i64
        };

        let page = users
            .find_in_ids(&ids, query.name_filter(), query.offset(), query.limit())
            .await?;

        let users = page
            .iter()
            .map(|user| {
                let friendship = relationships.iter().find(|f| f.involves(user.id));
                UserWithFriendshipResponse::new(user, friendship)
            })
            .collect();

        Ok(FriendListResponse {
            users,
            total_pages,
            count,
        })
    }

    async fn require_user(&self, id: Snowflake) -> ServiceResult<User> {
        self.ctx
            .user_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::UserNotFound(id).into())
    }
}
