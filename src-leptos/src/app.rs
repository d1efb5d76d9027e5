//! Main App component with routing

use crate::api::{StoreClient, DEFAULT_STORE_BASE};
use crate::components::Footer;
use crate::pages::Blog;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

/// Root App component
#[component]
pub fn App() -> impl IntoView {
    // The store client is an explicit dependency of every page; tests can
    // provide a client pointed at a fake store.
    provide_context(StoreClient::new(DEFAULT_STORE_BASE));

    view! {
        <Router>
            <div class="app-container">
                <main class="main-content">
                    <Routes fallback=|| "Page not found">
                        <Route path=path!("/") view=Blog />
                    </Routes>
                </main>
                <Footer />
            </div>
        </Router>
    }
}
