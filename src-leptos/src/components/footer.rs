//! Shared site footer

use leptos::prelude::*;

/// Version string embedded at build time.
const VERSION: &str = env!("GIT_VERSION");

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <p class="footer-copy">"© Blogview"</p>
            <span class="footer-version">"v"{VERSION}</span>
        </footer>
    }
}
