//! Blog page: loads the `blogs` collection once per mount, then derives a
//! filtered/sorted card list from the search text and sort direction.

mod content;
mod toolbar;

use std::collections::HashSet;

use blogview_types::view::derive_view;
use blogview_types::{MalformedDates, Post, SortOrder};
use chrono::Utc;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{StoreClient, BLOGS_COLLECTION};
use content::BlogContent;
use toolbar::Toolbar;

/// Progress of the one read-all request issued per mount.
#[derive(Clone, PartialEq, Eq)]
pub(crate) enum LoadState {
    Loading,
    Loaded,
    Failed(String),
}

/// Flip the expand state for one post id.
///
/// Keyed by the store-assigned id, so re-filtering or re-sorting the list
/// never changes which post is expanded.
pub(crate) fn toggle_expanded(expanded: &mut HashSet<String>, id: &str) {
    if !expanded.remove(id) {
        let _ = expanded.insert(id.to_string());
    }
}

#[component]
pub fn Blog() -> impl IntoView {
    let store = expect_context::<StoreClient>();

    let posts = RwSignal::new(Vec::<Post>::new());
    let load_state = RwSignal::new(LoadState::Loading);
    let search_date = RwSignal::new(String::new());
    let sort_order = RwSignal::new(SortOrder::Descending);
    let expanded_ids = RwSignal::new(HashSet::<String>::new());

    // One read-all per mount; the UI stays responsive while it resolves.
    Effect::new(move |_| {
        let store = store.clone();
        spawn_local(async move {
            match store.list_posts(BLOGS_COLLECTION).await {
                Ok(list) => {
                    log::debug!("Fetched {} blog posts", list.len());
                    posts.set(list);
                    load_state.set(LoadState::Loaded);
                }
                Err(err) => {
                    log::error!("Failed to load blog posts: {err}");
                    load_state.set(LoadState::Failed(err.to_string()));
                }
            }
        });
    });

    let sorted_posts = Memo::new(move |_| {
        derive_view(
            &posts.get(),
            &search_date.get(),
            sort_order.get(),
            MalformedDates::SortAsNow,
            Utc::now(),
        )
    });

    let on_toggle = Callback::new(move |id: String| {
        expanded_ids.update(|ids| toggle_expanded(ids, &id));
    });

    view! {
        <div class="blog-page">
            <div class="blog-header">
                <h1 class="blog-main-title">"Our Blog"</h1>
            </div>

            <Toolbar search_date=search_date sort_order=sort_order />

            <BlogContent
                load_state=load_state
                sorted_posts=sorted_posts
                expanded_ids=expanded_ids
                on_toggle=on_toggle
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_even_activations_collapse() {
        let mut expanded = HashSet::new();
        for _ in 0..4 {
            toggle_expanded(&mut expanded, "p1");
        }
        assert!(!expanded.contains("p1"));
    }

    #[test]
    fn test_odd_activations_expand() {
        let mut expanded = HashSet::new();
        for _ in 0..3 {
            toggle_expanded(&mut expanded, "p1");
        }
        assert!(expanded.contains("p1"));
    }

    #[test]
    fn test_toggle_is_per_post() {
        let mut expanded = HashSet::new();
        toggle_expanded(&mut expanded, "p1");
        toggle_expanded(&mut expanded, "p2");
        toggle_expanded(&mut expanded, "p2");
        assert!(expanded.contains("p1"));
        assert!(!expanded.contains("p2"));
    }
}
