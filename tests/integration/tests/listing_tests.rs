//! Friend/request listing tests: direction, annotation, filtering, pagination

use integration_tests::TestHarness;
use social_core::entities::{FriendshipStatus, RequestDecision};
use social_service::dto::ListQuery;
use social_service::FriendshipService;

fn query(page: i64, limit: i64, name: Option<&str>) -> ListQuery {
    ListQuery {
        page: Some(page),
        limit: Some(limit),
        name: name.map(String::from),
    }
}

#[tokio::test]
async fn test_list_incoming_and_outgoing_directions() {
    let harness = TestHarness::new();
    let alice = harness.seed_user("Alice").await;
    let bob = harness.seed_user("Bob").await;
    let carol = harness.seed_user("Carol").await;

    let service = FriendshipService::new(&harness.ctx);
    service.send_request(bob, alice).await.unwrap();
    service.send_request(carol, alice).await.unwrap();

    let incoming = service
        .list_incoming(alice, &ListQuery::default())
        .await
        .unwrap();
    assert_eq!(incoming.count, 2);
    let names: Vec<&str> = incoming.users.iter().map(|u| u.user.name.as_str()).collect();
    // Newest identity first
    assert_eq!(names, vec!["Carol", "Bob"]);
    for user in &incoming.users {
        let friendship = user.friendship.as_ref().expect("annotation present");
        assert_eq!(friendship.status, FriendshipStatus::Pending);
        assert_eq!(friendship.to, alice.to_string());
    }

    // Alice sent nothing; Bob sent exactly one
    let outgoing = service
        .list_outgoing(alice, &ListQuery::default())
        .await
        .unwrap();
    assert_eq!(outgoing.count, 0);
    assert!(outgoing.users.is_empty());

    let outgoing = service
        .list_outgoing(bob, &ListQuery::default())
        .await
        .unwrap();
    assert_eq!(outgoing.count, 1);
    assert_eq!(outgoing.users[0].user.name, "Alice");
}

#[tokio::test]
async fn test_list_friends_sees_both_sides() {
    let harness = TestHarness::new();
    let alice = harness.seed_user("Alice").await;
    let bob = harness.seed_user("Bob").await;
    let carol = harness.seed_user("Carol").await;

    let service = FriendshipService::new(&harness.ctx);
    // Alice requested Bob; Carol requested Alice. Both accepted.
    service.send_request(alice, bob).await.unwrap();
    service
        .react_to_request(bob, alice, RequestDecision::Accepted)
        .await
        .unwrap();
    service.send_request(carol, alice).await.unwrap();
    service
        .react_to_request(alice, carol, RequestDecision::Accepted)
        .await
        .unwrap();

    let friends = service
        .list_friends(alice, &ListQuery::default())
        .await
        .unwrap();
    assert_eq!(friends.count, 2);
    let names: Vec<&str> = friends.users.iter().map(|u| u.user.name.as_str()).collect();
    assert_eq!(names, vec!["Carol", "Bob"]);
    for user in &friends.users {
        let friendship = user.friendship.as_ref().expect("annotation present");
        assert_eq!(friendship.status, FriendshipStatus::Accepted);
    }

    // Pending and declined records never show up as friends
    let friends = service
        .list_friends(bob, &ListQuery::default())
        .await
        .unwrap();
    assert_eq!(friends.count, 1);
    assert_eq!(friends.users[0].user.name, "Alice");
}

#[tokio::test]
async fn test_list_friends_name_filter_is_case_insensitive() {
    let harness = TestHarness::new();
    let alice = harness.seed_user("Alice").await;
    let bob = harness.seed_user("Bobby Tables").await;
    let carol = harness.seed_user("Carol").await;

    let service = FriendshipService::new(&harness.ctx);
    for friend in [bob, carol] {
        service.send_request(alice, friend).await.unwrap();
        service
            .react_to_request(friend, alice, RequestDecision::Accepted)
            .await
            .unwrap();
    }

    let friends = service
        .list_friends(alice, &query(1, 10, Some("bOb")))
        .await
        .unwrap();
    assert_eq!(friends.count, 1);
    assert_eq!(friends.users[0].user.name, "Bobby Tables");

    let friends = service
        .list_friends(alice, &query(1, 10, Some("zzz")))
        .await
        .unwrap();
    assert_eq!(friends.count, 0);
    assert_eq!(friends.total_pages, 0);
}

#[tokio::test]
async fn test_list_friends_pagination() {
    let harness = TestHarness::new();
    let alice = harness.seed_user("Alice").await;
    let service = FriendshipService::new(&harness.ctx);

    let mut friends = Vec::new();
    for i in 0..5 {
        let friend = harness.seed_user(&format!("Friend {i}")).await;
        service.send_request(alice, friend).await.unwrap();
        service
            .react_to_request(friend, alice, RequestDecision::Accepted)
            .await
            .unwrap();
        friends.push(friend);
    }

    let page1 = service.list_friends(alice, &query(1, 2, None)).await.unwrap();
    assert_eq!(page1.count, 5);
    assert_eq!(page1.total_pages, 3);
    assert_eq!(page1.users.len(), 2);
    // Newest first: the last seeded friend leads
    assert_eq!(page1.users[0].user.name, "Friend 4");
    assert_eq!(page1.users[1].user.name, "Friend 3");

    let page3 = service.list_friends(alice, &query(3, 2, None)).await.unwrap();
    assert_eq!(page3.users.len(), 1);
    assert_eq!(page3.users[0].user.name, "Friend 0");
}

#[tokio::test]
async fn test_list_rejects_invalid_pagination() {
    let harness = TestHarness::new();
    let alice = harness.seed_user("Alice").await;

    let service = FriendshipService::new(&harness.ctx);
    let err = service
        .list_friends(alice, &query(0, 10, None))
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), 400);

    let err = service
        .list_friends(alice, &query(1, 1000, None))
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), 400);
}
