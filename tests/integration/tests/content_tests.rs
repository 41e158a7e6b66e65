//! Post/comment CRUD and profile update tests

use integration_tests::TestHarness;
use social_core::entities::FriendshipStatus;
use social_service::dto::requests::{
    CreateCommentRequest, CreatePostRequest, UpdatePostRequest, UpdateProfileRequest,
};
use social_service::{CommentService, FriendshipService, PostService, UserService};

// ============================================================================
// Posts
// ============================================================================

#[tokio::test]
async fn test_only_author_can_update_post() {
    let harness = TestHarness::new();
    let alice = harness.seed_user("Alice").await;
    let bob = harness.seed_user("Bob").await;

    let service = PostService::new(&harness.ctx);
    let post_id = service
        .create_post(
            alice,
            CreatePostRequest {
                content: "original".to_string(),
                image: None,
            },
        )
        .await
        .unwrap()
        .id
        .parse()
        .unwrap();

    let err = service
        .update_post(
            bob,
            post_id,
            UpdatePostRequest {
                content: Some("hijacked".to_string()),
                image: None,
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), 403);
    assert_eq!(err.error_code(), "NOT_POST_AUTHOR");

    let updated = service
        .update_post(
            alice,
            post_id,
            UpdatePostRequest {
                content: Some("edited".to_string()),
                image: None,
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.content, "edited");
}

#[tokio::test]
async fn test_deleted_post_is_gone_but_only_for_its_author() {
    let harness = TestHarness::new();
    let alice = harness.seed_user("Alice").await;
    let bob = harness.seed_user("Bob").await;

    let service = PostService::new(&harness.ctx);
    let post_id = service
        .create_post(
            alice,
            CreatePostRequest {
                content: "to be removed".to_string(),
                image: None,
            },
        )
        .await
        .unwrap()
        .id
        .parse()
        .unwrap();

    // Someone else's delete matches nothing
    let err = service.delete_post(bob, post_id).await.unwrap_err();
    assert_eq!(err.error_code(), "UNKNOWN_POST");

    service.delete_post(alice, post_id).await.unwrap();
    let err = service.get_post(post_id).await.unwrap_err();
    assert_eq!(err.error_code(), "UNKNOWN_POST");

    // Deleting twice matches nothing either
    let err = service.delete_post(alice, post_id).await.unwrap_err();
    assert_eq!(err.error_code(), "UNKNOWN_POST");
}

#[tokio::test]
async fn test_post_content_validation() {
    let harness = TestHarness::new();
    let alice = harness.seed_user("Alice").await;

    let err = PostService::new(&harness.ctx)
        .create_post(
            alice,
            CreatePostRequest {
                content: String::new(),
                image: None,
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), 400);
    assert_eq!(err.error_code(), "VALIDATION_ERROR");
}

// ============================================================================
// Comments
// ============================================================================

#[tokio::test]
async fn test_commenting_on_missing_post_fails() {
    let harness = TestHarness::new();
    let alice = harness.seed_user("Alice").await;
    let ghost = harness.ctx.generate_id();

    let err = CommentService::new(&harness.ctx)
        .create_comment(
            alice,
            CreateCommentRequest {
                post_id: ghost,
                content: "into the void".to_string(),
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err.error_code(), "UNKNOWN_POST");
}

#[tokio::test]
async fn test_only_author_can_delete_comment() {
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
    let comment_id = service
        .create_comment(
            bob,
            CreateCommentRequest {
                post_id,
                content: "bob's comment".to_string(),
            },
        )
        .await
        .unwrap()
        .id
        .parse()
        .unwrap();

    let err = service.delete_comment(alice, comment_id).await.unwrap_err();
    assert_eq!(err.status_code(), 403);
    assert_eq!(err.error_code(), "NOT_COMMENT_AUTHOR");

    service.delete_comment(bob, comment_id).await.unwrap();
    let err = service.get_comment(comment_id).await.unwrap_err();
    assert_eq!(err.error_code(), "UNKNOWN_COMMENT");
}

// ============================================================================
// Profiles
// ============================================================================

#[tokio::test]
async fn test_profile_update_applies_whitelisted_fields() {
    let harness = TestHarness::new();
    let alice = harness.seed_user("Alice").await;

    let service = UserService::new(&harness.ctx);
    let response = service
        .update_profile(
            alice,
            alice,
            UpdateProfileRequest {
                name: Some("Alice Liddell".to_string()),
                city: Some("Oxford".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(response.name, "Alice Liddell");
    assert_eq!(response.city.as_deref(), Some("Oxford"));

    // Untouched fields survive a partial update
    let response = service
        .update_profile(
            alice,
            alice,
            UpdateProfileRequest {
                job_title: Some("Explorer".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(response.name, "Alice Liddell");
    assert_eq!(response.city.as_deref(), Some("Oxford"));
    assert_eq!(response.job_title.as_deref(), Some("Explorer"));
}

#[tokio::test]
async fn test_profile_update_is_owner_only() {
    let harness = TestHarness::new();
    let alice = harness.seed_user("Alice").await;
    let bob = harness.seed_user("Bob").await;

    let err = UserService::new(&harness.ctx)
        .update_profile(
            bob,
            alice,
            UpdateProfileRequest {
                name: Some("Mallory".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), 403);
    assert_eq!(err.error_code(), "NOT_PROFILE_OWNER");
}

#[tokio::test]
async fn test_get_user_carries_viewer_friendship() {
    let harness = TestHarness::new();
    let alice = harness.seed_user("Alice").await;
    let bob = harness.seed_user("Bob").await;
    let carol = harness.seed_user("Carol").await;

    FriendshipService::new(&harness.ctx)
        .send_request(alice, bob)
        .await
        .unwrap();

    let service = UserService::new(&harness.ctx);

    let viewed = service.get_user(alice, bob).await.unwrap();
    let friendship = viewed.friendship.expect("annotation present");
    assert_eq!(friendship.status, FriendshipStatus::Pending);
    assert_eq!(friendship.from, alice.to_string());

    // No relationship, no annotation
    let viewed = service.get_user(carol, bob).await.unwrap();
    assert!(viewed.friendship.is_none());
}
