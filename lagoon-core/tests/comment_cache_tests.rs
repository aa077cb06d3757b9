// SPDX-FileCopyrightText: 2026 Lagoon Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tests for the comment cache operations against the mock backend.

mod common;

use serde_json::json;

use lagoon_core::ReactionEmoji;

use common::*;

#[tokio::test]
async fn fetched_page_is_stored_reversed() {
    let mut lagoon = test_client();
    lagoon.backend().queue_data(json!({
        "comments": [comment_json("c1", "first"), comment_json("c2", "second")],
        "count": 2,
    }));

    lagoon.fetch_comments("p1", 1).await.unwrap();

    let state = &lagoon.store().comment;
    // server order [c1, c2] lands as [c2, c1]
    assert_eq!(state.comments_by_post["p1"], vec!["c2", "c1"]);
    assert_eq!(state.total_comments_by_post["p1"], 2);
    assert_eq!(state.current_page_by_post["p1"], 1);
    for id in &state.comments_by_post["p1"] {
        assert!(state.comments_by_id.contains_key(id));
    }

    let request = &lagoon.backend().requests()[0];
    assert_eq!(request.url, "http://backend.test/api/posts/p1/comments");
    assert!(request
        .query
        .contains(&("limit".to_string(), COMMENTS_PER_PAGE.to_string())));
}

#[tokio::test]
async fn fetch_overwrites_instead_of_merging() {
    let mut lagoon = test_client();
    lagoon.backend().queue_data(json!({
        "comments": [comment_json("c1", "a"), comment_json("c2", "b")],
        "count": 4,
    }));
    lagoon.fetch_comments("p1", 1).await.unwrap();

    lagoon.backend().queue_data(json!({
        "comments": [comment_json("c3", "c"), comment_json("c4", "d")],
        "count": 4,
    }));
    lagoon.fetch_comments("p1", 2).await.unwrap();

    let state = &lagoon.store().comment;
    assert_eq!(state.comments_by_post["p1"], vec!["c4", "c3"]);
    assert_eq!(state.current_page_by_post["p1"], 2);
}

#[tokio::test]
async fn create_comment_triggers_full_refetch() {
    let mut lagoon = test_client();
    lagoon.backend().queue_data(comment_json("c9", "fresh"));
    lagoon.backend().queue_data(json!({
        "comments": [comment_json("c9", "fresh")],
        "count": 1,
    }));

    lagoon.create_comment("p1", "fresh").await.unwrap();

    let state = &lagoon.store().comment;
    assert_eq!(state.comments_by_post["p1"], vec!["c9"]);
    assert!(state.error.is_none());

    let urls: Vec<String> = lagoon
        .backend()
        .requests()
        .iter()
        .map(|request| request.url.clone())
        .collect();
    assert_eq!(
        urls,
        vec![
            "http://backend.test/api/comments",
            "http://backend.test/api/posts/p1/comments",
        ]
    );
    let create = &lagoon.backend().requests()[0];
    assert_eq!(create.body.as_ref().unwrap()["postId"], "p1");
}

#[tokio::test]
async fn delete_comment_triggers_full_refetch() {
    let mut lagoon = test_client();
    lagoon.backend().queue_data(json!({
        "comments": [comment_json("c1", "a"), comment_json("c2", "b")],
        "count": 2,
    }));
    lagoon.fetch_comments("p1", 1).await.unwrap();

    lagoon.backend().queue_response(200, "{}");
    lagoon.backend().queue_data(json!({
        "comments": [comment_json("c2", "b")],
        "count": 1,
    }));
    lagoon.delete_comment("c1", "p1").await.unwrap();

    let state = &lagoon.store().comment;
    assert_eq!(state.comments_by_post["p1"], vec!["c2"]);
    assert_eq!(state.total_comments_by_post["p1"], 1);
}

#[tokio::test]
async fn update_comment_patches_content_in_place() {
    let mut lagoon = test_client();
    lagoon.backend().queue_data(json!({
        "comments": [comment_json("c1", "before")],
        "count": 1,
    }));
    lagoon.fetch_comments("p1", 1).await.unwrap();

    lagoon.backend().queue_data(comment_json("c1", "after"));
    lagoon.update_comment("c1", "after").await.unwrap();

    let state = &lagoon.store().comment;
    assert_eq!(state.comments_by_id["c1"].content, "after");
    // membership untouched, no refetch
    assert_eq!(state.comments_by_post["p1"], vec!["c1"]);
    assert_eq!(lagoon.backend().requests().len(), 2);
}

#[tokio::test]
async fn comment_reactions_mirror_the_server_tally() {
    let mut lagoon = test_client();
    lagoon.backend().queue_data(json!({
        "comments": [comment_json("c1", "a")],
        "count": 1,
    }));
    lagoon.fetch_comments("p1", 1).await.unwrap();

    lagoon.backend().queue_data(json!({ "like": 0, "dislike": 2 }));
    lagoon
        .react_to_comment("c1", ReactionEmoji::Dislike)
        .await
        .unwrap();

    assert_eq!(lagoon.store().comment.comments_by_id["c1"].reactions.dislike, 2);

    let request = &lagoon.backend().requests()[1];
    assert_eq!(request.body.as_ref().unwrap()["targetType"], "Comment");
    assert_eq!(request.body.as_ref().unwrap()["targetId"], "c1");
}

#[tokio::test]
async fn fetch_failure_keeps_existing_comments() {
    let mut lagoon = test_client();
    lagoon.backend().queue_data(json!({
        "comments": [comment_json("c1", "a")],
        "count": 1,
    }));
    lagoon.fetch_comments("p1", 1).await.unwrap();

    lagoon.backend().queue_error(500, "comments unavailable");
    let result = lagoon.fetch_comments("p1", 2).await;
    assert!(result.is_err());

    let state = &lagoon.store().comment;
    assert_eq!(state.error.as_deref(), Some("comments unavailable"));
    // the previously loaded page survives
    assert_eq!(state.comments_by_post["p1"], vec!["c1"]);
}
