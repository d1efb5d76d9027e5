//! Blog card component

use blogview_types::Post;
use leptos::prelude::*;

use crate::formatters::body_preview;

#[component]
pub fn BlogCard(
    #[prop(into)] post: Post,
    #[prop(into)] is_expanded: Signal<bool>,
    #[prop(into)] on_toggle: Callback<()>,
) -> impl IntoView {
    let body = post.body.clone();

    view! {
        <div class="blog-card">
            <div class="blog-icon">"✒"</div>
            <h4 class="blog-date">{post.date.clone()}</h4>
            <h3 class="blog-title">{post.title.clone()}</h3>
            <p class="blog-description">
                {move || body_preview(&body, is_expanded.get())}
            </p>
            <button class="blog-read-more" on:click=move |_| on_toggle.run(())>
                {move || if is_expanded.get() { "Read Less" } else { "Read More" }}
                <span class="read-more-arrow">
                    {move || if is_expanded.get() { " ↑" } else { " →" }}
                </span>
            </button>
        </div>
    }
}
