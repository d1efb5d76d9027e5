use std::collections::HashSet;

use blogview_types::Post;
use leptos::prelude::*;

use super::LoadState;
use crate::components::BlogCard;

/// Card list with loading, failed, and empty states.
#[component]
pub(crate) fn BlogContent(
    load_state: RwSignal<LoadState>,
    sorted_posts: Memo<Vec<Post>>,
    expanded_ids: RwSignal<HashSet<String>>,
    on_toggle: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="blog-section">
            {move || match load_state.get() {
                LoadState::Loading => view! {
                    <div class="load-state">
                        <p>"Loading blogs..."</p>
                    </div>
                }.into_any(),
                LoadState::Failed(message) => view! {
                    <div class="load-state load-state--error">
                        <p>"Failed to load blogs: "{message}</p>
                    </div>
                }.into_any(),
                LoadState::Loaded => view! {
                    <div class="blog-grid">
                        <For
                            each=move || sorted_posts.get()
                            key=|post| post.id.clone()
                            children=move |post: Post| {
                                let id = post.id.clone();
                                let toggle_id = post.id.clone();
                                view! {
                                    <BlogCard
                                        post=post
                                        is_expanded=Signal::derive(move || expanded_ids.get().contains(&id))
                                        on_toggle=Callback::new(move |_| on_toggle.run(toggle_id.clone()))
                                    />
                                }
                            }
                        />

                        <Show when=move || sorted_posts.get().is_empty()>
                            <p class="empty-state">"No blogs found for this date"</p>
                        </Show>
                    </div>
                }.into_any(),
            }}
        </div>
    }
}
