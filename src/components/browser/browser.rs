//! Main browser component: the page shell around the toolbar and grid.

use leptos::prelude::*;

use super::{Grid, Toolbar};

stylance::import_crate_style!(css, "src/components/browser/browser.module.css");

/// File browser view component.
#[component]
pub fn Browser() -> impl IntoView {
    view! {
        <div class=css::shell>
            <header class=css::header>
                <h1 class=css::title>"treegrid"</h1>
                <Toolbar />
            </header>
            <main class=css::body>
                <Grid />
            </main>
        </div>
    }
}
