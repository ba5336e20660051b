//! Toolbar component: upload form, folder creation, and the search input.
//!
//! Every gesture here becomes a typed [`Command`]; the toolbar itself
//! never touches the store or the network.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::app::AppContext;
use crate::commands::{self, Command};
use crate::utils::{dom, format};

stylance::import_crate_style!(css, "src/components/browser/browser.module.css");

#[component]
pub fn Toolbar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let upload_input = NodeRef::<leptos::html::Input>::new();

    // Uploads land in the currently viewed directory.
    let on_upload = move |ev: SubmitEvent| {
        ev.prevent_default();
        let Some(input) = upload_input.get_untracked() else {
            return;
        };
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        let directory = ctx
            .store
            .with_untracked(|store| store.current_path().to_string());
        commands::dispatch(ctx, Command::Upload { file, directory });
        input.set_value("");
    };

    let on_new_folder = move |_: leptos::ev::MouseEvent| {
        let Some(name) = dom::prompt("New folder name:") else {
            return;
        };
        let name = name.trim().to_string();
        if name.is_empty() {
            return;
        }
        let path = ctx
            .store
            .with_untracked(|store| format::join_path(store.current_path(), &name));
        commands::dispatch(ctx, Command::CreateFolder { path });
    };

    let on_search = move |ev: leptos::ev::Event| {
        commands::dispatch(ctx, Command::Filter(event_target_value(&ev)));
    };

    view! {
        <div class=css::toolbar>
            <form class=css::uploadForm on:submit=on_upload>
                <input class=css::fileInput type="file" node_ref=upload_input required />
                <button class=css::uploadButton type="submit">"Upload"</button>
            </form>
            <button class=css::newFolderButton on:click=on_new_folder>"New folder"</button>
            <input
                class=css::searchInput
                type="search"
                placeholder="Search this folder"
                on:input=on_search
            />
        </div>
    }
}
