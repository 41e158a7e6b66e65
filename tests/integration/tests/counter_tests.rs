//! Counter synchronization tests
//!
//! The sync functions take their repositories as explicit parameters, so they
//! are also exercised directly here, outside any service.

use integration_tests::TestHarness;
use social_core::entities::{Friendship, RequestDecision};
use social_core::traits::{FriendshipRepository, PostRepository, UserRepository};
use social_service::dto::requests::{CreateCommentRequest, CreatePostRequest};
use social_service::services::counters;
use social_service::{CommentService, FriendshipService, PostService};

// ============================================================================
// Post count
// ============================================================================

#[tokio::test]
async fn test_post_count_tracks_creates_and_deletes() {
    let harness = TestHarness::new();
    let alice = harness.seed_user("Alice").await;

    let service = PostService::new(&harness.ctx);
    let mut post_ids = Vec::new();
    for i in 0..3 {
        let response = service
            .create_post(
                alice,
                CreatePostRequest {
                    content: format!("post {i}"),
                    image: None,
                },
            )
            .await
            .unwrap();
        post_ids.push(response.id.parse().unwrap());
    }
    assert_eq!(harness.post_count(alice).await, 3);

    service.delete_post(alice, post_ids[0]).await.unwrap();
    assert_eq!(harness.post_count(alice).await, 2);
}

// ============================================================================
// Comment count
// ============================================================================

#[tokio::test]
async fn test_comment_count_tracks_creates_and_deletes() {
    let harness = TestHarness::new();
    let alice = harness.seed_user("Alice").await;
    let bob = harness.seed_user("Bob").await;

    let post_id = PostService::new(&harness.ctx)
        .create_post(
            alice,
            CreatePostRequest {
                content: "a post".to_string(),
                image: None,
            },
        )
        .await
        .unwrap()
        .id
        .parse()
        .unwrap();

    let service = CommentService::new(&harness.ctx);
    let first = service
        .create_comment(
            alice,
            CreateCommentRequest {
                post_id,
                content: "first".to_string(),
            },
        )
        .await
        .unwrap();
    service
        .create_comment(
            bob,
            CreateCommentRequest {
                post_id,
                content: "second".to_string(),
            },
        )
        .await
        .unwrap();

    let stored = harness.posts.find_by_id(post_id).await.unwrap().unwrap();
    assert_eq!(stored.comment_count, 2);

    service
        .delete_comment(alice, first.id.parse().unwrap())
        .await
        .unwrap();
    let stored = harness.posts.find_by_id(post_id).await.unwrap().unwrap();
    assert_eq!(stored.comment_count, 1);
}

// ============================================================================
// Recompute-from-source semantics
// ============================================================================

#[tokio::test]
async fn test_sync_friend_count_is_idempotent() {
    let harness = TestHarness::new();
    let alice = harness.seed_user("Alice").await;
    let bob = harness.seed_user("Bob").await;

    let service = FriendshipService::new(&harness.ctx);
    service.send_request(alice, bob).await.unwrap();
    service
        .react_to_request(bob, alice, RequestDecision::Accepted)
        .await
        .unwrap();

    for _ in 0..3 {
        let count =
            counters::sync_friend_count(harness.ctx.friendship_repo(), harness.ctx.user_repo(), alice)
                .await
                .unwrap();
        assert_eq!(count, 1);
    }
    assert_eq!(harness.friend_count(alice).await, 1);
}

#[tokio::test]
async fn test_sync_repairs_drifted_friend_count() {
    let harness = TestHarness::new();
    let alice = harness.seed_user("Alice").await;
    let bob = harness.seed_user("Bob").await;

    let mut friendship = Friendship::new(alice, bob);
    friendship.resolve(RequestDecision::Accepted);
    harness.friendships.create(&friendship).await.unwrap();

    // Simulate drift from a missed update
    harness.users.set_friend_count(alice, 99).await.unwrap();
    assert_eq!(harness.friend_count(alice).await, 99);

    let count =
        counters::sync_friend_count(harness.ctx.friendship_repo(), harness.ctx.user_repo(), alice)
            .await
            .unwrap();
    assert_eq!(count, 1);
    assert_eq!(harness.friend_count(alice).await, 1);
}

#[tokio::test]
async fn test_sync_repairs_drifted_post_count() {
    let harness = TestHarness::new();
    let alice = harness.seed_user("Alice").await;

    PostService::new(&harness.ctx)
        .create_post(
            alice,
            CreatePostRequest {
                content: "only post".to_string(),
                image: None,
            },
        )
        .await
        .unwrap();

    harness.users.set_post_count(alice, 0).await.unwrap();

    let count = counters::sync_post_count(harness.ctx.post_repo(), harness.ctx.user_repo(), alice)
        .await
        .unwrap();
    assert_eq!(count, 1);
    assert_eq!(harness.post_count(alice).await, 1);
}
