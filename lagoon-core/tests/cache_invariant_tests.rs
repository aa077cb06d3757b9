// SPDX-FileCopyrightText: 2026 Lagoon Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Property tests for the cache invariants.
//!
//! After any successful patch, every id in an ordered list must resolve
//! in the id map, and page-1 lists carry no duplicates.

use std::collections::HashSet;

use proptest::prelude::*;

use lagoon_core::{
    Post, PostAuthor, PostEvent, PostState, Reactions,
};

fn make_post(id: &str) -> Post {
    Post {
        id: id.into(),
        author: PostAuthor {
            id: "author".into(),
            name: "Author".into(),
            avatar_url: String::new(),
        },
        created_at: "2026-01-15T10:00:00Z".parse().unwrap(),
        content: String::new(),
        image: None,
        reactions: Reactions::default(),
        extra: Default::default(),
    }
}

fn id_strategy() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec("[a-f0-9]{1,6}", 0..24)
}

proptest! {
    #[test]
    fn page_loaded_upholds_list_subset_of_map(
        first_page in id_strategy(),
        second_page in id_strategy(),
        count in 0u64..1000,
    ) {
        let mut state = PostState::default();
        state.apply(PostEvent::PageLoaded {
            posts: first_page.iter().map(|id| make_post(id)).collect(),
            count,
        });
        state.apply(PostEvent::PageLoaded {
            posts: second_page.iter().map(|id| make_post(id)).collect(),
            count,
        });

        // no duplicates
        let unique: HashSet<_> = state.current_page_posts.iter().collect();
        prop_assert_eq!(unique.len(), state.current_page_posts.len());

        // every listed id resolves in the map
        for id in &state.current_page_posts {
            prop_assert!(state.posts_by_id.contains_key(id));
        }
    }

    #[test]
    fn create_and_delete_preserve_resolution(
        page in id_strategy(),
        page_size in 1usize..10,
    ) {
        let mut state = PostState::default();
        state.apply(PostEvent::PageLoaded {
            posts: page.iter().map(|id| make_post(id)).collect(),
            count: page.len() as u64,
        });

        state.apply(PostEvent::Created {
            post: make_post("zz-created"),
            page_size,
        });
        state.apply(PostEvent::Deleted { post_id: "zz-created".into() });

        for id in &state.current_page_posts {
            prop_assert!(state.posts_by_id.contains_key(id));
        }
        // the new post is first until deleted, then gone from the list
        prop_assert!(!state.current_page_posts.contains(&"zz-created".to_string()));
        // but still resolvable as an orphan
        prop_assert!(state.posts_by_id.contains_key("zz-created"));
    }
}
