//! One grid card: icon, name, tooltip, and the entry's action buttons.

use leptos::prelude::*;
use treegrid_core::{EntryAction, FileKind, ViewEntry};

use crate::api;
use crate::app::AppContext;
use crate::commands::{self, Command};
use crate::utils::dom;
use crate::utils::format::{format_modified, format_size};

stylance::import_crate_style!(css, "src/components/browser/grid.module.css");

/// Icon glyph for an entry based on its classification.
fn icon_for(entry: &ViewEntry) -> &'static str {
    if entry.is_dir {
        "📂"
    } else {
        match entry.kind {
            FileKind::Audio => "🎵",
            FileKind::Image => "🖼️",
            FileKind::Video => "🎬",
            FileKind::Other => "📄",
        }
    }
}

#[component]
pub fn EntryCard(entry: ViewEntry) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let icon = icon_for(&entry);
    let is_dir = entry.is_dir;
    let offers_open = entry.actions.contains(&EntryAction::OpenDirectory)
        || entry.actions.contains(&EntryAction::OpenInTab);
    let offers_file_actions = entry.actions.contains(&EntryAction::Download);

    let tooltip = (!is_dir).then(|| {
        format!(
            "Name: {}\nSize: {}\nModified: {}",
            entry.name,
            format_size(entry.size),
            format_modified(entry.modified.as_ref()),
        )
    });

    let name = entry.name.clone();
    let path = entry.path.clone();

    // Open: directories navigate, renderable files open in a new tab.
    let open_path = path.clone();
    let on_open = move |_: leptos::ev::MouseEvent| {
        if is_dir {
            commands::dispatch(ctx, Command::Navigate(open_path.clone()));
        } else if let Some(window) = dom::window() {
            let _ = window.open_with_url_and_target(&api::content_url(&open_path), "_blank");
        }
    };

    // Update: a hidden file input triggered by the button; picking a file
    // dispatches the replace.
    let replace_input = NodeRef::<leptos::html::Input>::new();
    let on_update = move |_: leptos::ev::MouseEvent| {
        if let Some(input) = replace_input.get_untracked() {
            input.click();
        }
    };
    let replace_path = path.clone();
    let on_replace_picked = move |_: leptos::ev::Event| {
        if let Some(input) = replace_input.get_untracked() {
            if let Some(file) = input.files().and_then(|files| files.get(0)) {
                commands::dispatch(
                    ctx,
                    Command::Replace {
                        file,
                        path: replace_path.clone(),
                    },
                );
            }
            input.set_value("");
        }
    };

    // Delete requires an explicit confirmation before anything is sent.
    let delete_name = name.clone();
    let delete_path = path.clone();
    let on_delete = move |_: leptos::ev::MouseEvent| {
        if dom::confirm(&format!(
            "Are you sure you want to delete '{delete_name}'?"
        )) {
            commands::dispatch(
                ctx,
                Command::Delete {
                    path: delete_path.clone(),
                },
            );
        }
    };

    let download_href = api::content_url(&path);
    let download_name = name.clone();

    view! {
        <div class=css::card>
            {tooltip.map(|text| view! { <div class=css::tooltip>{text}</div> })}
            <div class=css::icon>{icon}</div>
            <div class=css::name title=name.clone()>{name.clone()}</div>
            <div class=css::buttons>
                {offers_open
                    .then(|| {
                        view! {
                            <button class=css::openButton on:click=on_open>"Open"</button>
                        }
                    })}
                {offers_file_actions
                    .then(|| {
                        view! {
                            <a class=css::downloadButton href=download_href download=download_name>
                                "Download"
                            </a>
                            <button class=css::updateButton on:click=on_update>"Update"</button>
                            <input
                                class=css::hiddenInput
                                type="file"
                                node_ref=replace_input
                                on:change=on_replace_picked
                            />
                            <button class=css::deleteButton on:click=on_delete>"Delete"</button>
                        }
                    })}
            </div>
        </div>
    }
}
