//! Blogview - Leptos Frontend
//!
//! CSR frontend for the blog page. All persistence and querying is handled
//! by the external document store; this binary only mounts the app.

// Dependencies used in lib.rs submodules, acknowledged here for bin target
use blogview_types as _;
use chrono as _;
use leptos_router as _;
use serde as _;
use serde_wasm_bindgen as _;
use wasm_bindgen as _;
use wasm_bindgen_futures as _;
use web_sys as _;

use blogview_leptos::app::App;
use leptos::prelude::*;

fn main() {
    // Initialize panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging (ignore error if already initialized)
    drop(console_log::init_with_level(log::Level::Debug));

    log::info!("Blogview frontend starting...");

    // Mount the app
    mount_to_body(App);
}
