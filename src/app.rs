//! Root application component and shared reactive context.
//!
//! The tree store is constructed once here and handed to the component
//! tree through Leptos context; nothing in the app reaches for module
//! globals. All state changes flow through the store signal, and every
//! render is a pure projection of it.

use leptos::prelude::*;
use treegrid_core::{FileApi, TreeStore, fragment};

use crate::api::HttpFileApi;
use crate::components::Browser;
use crate::utils::dom;

/// Application-wide reactive context.
///
/// `Copy` because the only field is a Leptos signal handle.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Last-fetched snapshot plus navigation state.
    pub store: RwSignal<TreeStore>,
}

impl AppContext {
    /// Create the context, starting at the path encoded in the URL
    /// fragment (root when there is none).
    pub fn new() -> Self {
        let initial_path = fragment::decode(&dom::get_hash());
        Self {
            store: RwSignal::new(TreeStore::new(initial_path)),
        }
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Fetch a fresh snapshot and install it.
///
/// Failures are logged and skipped: the last-known-good snapshot stays on
/// screen and the next trigger (poll tick, push event, or mutation
/// settlement) tries again. A refresh never crashes or blanks the view.
pub async fn refresh(ctx: AppContext) {
    match HttpFileApi.fetch_snapshot().await {
        Ok(root) => ctx.store.update(|store| store.replace_snapshot(root)),
        Err(err) => {
            web_sys::console::warn_1(&format!("treegrid: refresh skipped: {err}").into());
        }
    }
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);

    // Browser back/forward drive navigation: the hash is re-decoded on
    // every hashchange and written into the store.
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::prelude::Closure;

        let closure = Closure::wrap(Box::new(move || {
            let path = fragment::decode(&dom::get_hash());
            ctx.store.update(|store| store.set_path(path));
        }) as Box<dyn Fn()>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref());
        }

        // Keep the closure alive for the lifetime of the app.
        closure.forget();
    }

    // Initial snapshot, then the two standing refresh triggers.
    wasm_bindgen_futures::spawn_local(async move { refresh(ctx).await });
    crate::feed::start(ctx);

    view! { <Browser /> }
}
