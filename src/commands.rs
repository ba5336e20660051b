//! Typed commands produced by user gestures.
//!
//! Input handling never talks to the network or the store directly: every
//! gesture becomes a [`Command`], and [`dispatch`] is the single consumer.
//! Navigation and filtering mutate the store synchronously; mutations run
//! the coordinator on the event loop and settle with a blocking
//! notification plus the coordinator's unconditional refresh.

use leptos::prelude::Update;
use wasm_bindgen_futures::spawn_local;

use treegrid_core::{FilePayload, Mutation, coordinator, fragment};

use crate::api::HttpFileApi;
use crate::app::AppContext;
use crate::utils::dom;

/// One user gesture, typed.
pub enum Command {
    /// Show a directory (hash is updated so the URL stays shareable).
    Navigate(String),
    /// Change the search filter.
    Filter(String),
    /// Upload a new file into a directory.
    Upload { file: web_sys::File, directory: String },
    /// Replace the content of an existing file.
    Replace { file: web_sys::File, path: String },
    /// Delete an entry (confirmation already obtained by the caller).
    Delete { path: String },
    /// Create a folder.
    CreateFolder { path: String },
}

pub fn dispatch(ctx: AppContext, command: Command) {
    match command {
        Command::Navigate(path) => {
            dom::set_hash(&format!("#{}", fragment::encode(&path)));
            ctx.store.update(|store| store.set_path(path));
        }
        Command::Filter(text) => {
            ctx.store.update(|store| store.set_filter(&text));
        }
        Command::Upload { file, directory } => {
            run_with_file(ctx, file, "Upload failed!", move |payload| {
                (
                    Mutation::Upload {
                        file: payload,
                        directory,
                    },
                    "Upload successful!",
                )
            });
        }
        Command::Replace { file, path } => {
            run_with_file(ctx, file, "Update failed!", move |payload| {
                (
                    Mutation::Replace {
                        file: payload,
                        path,
                    },
                    "File updated!",
                )
            });
        }
        Command::Delete { path } => {
            spawn_local(settle(
                ctx,
                Mutation::Delete { path },
                "File deleted!",
                "Delete failed!",
            ));
        }
        Command::CreateFolder { path } => {
            spawn_local(settle(
                ctx,
                Mutation::CreateFolder { path },
                "Folder created!",
                "Create folder failed!",
            ));
        }
    }
}

/// Read the picked browser file into memory, then run the mutation built
/// from it. If reading fails the server is never contacted, so no refresh
/// is owed.
fn run_with_file(
    ctx: AppContext,
    file: web_sys::File,
    error_prefix: &'static str,
    build: impl FnOnce(FilePayload) -> (Mutation, &'static str) + 'static,
) {
    spawn_local(async move {
        match read_file(&file).await {
            Ok(payload) => {
                let (mutation, success_message) = build(payload);
                settle(ctx, mutation, success_message, error_prefix).await;
            }
            Err(err) => {
                dom::alert(&format!("{error_prefix} could not read file: {err:?}"));
            }
        }
    });
}

/// Run one mutation through the coordinator, report the outcome to the
/// user (blocking), and install the settle-time snapshot if it arrived.
async fn settle(
    ctx: AppContext,
    mutation: Mutation,
    success_message: &'static str,
    error_prefix: &'static str,
) {
    let report = coordinator::apply(&HttpFileApi, mutation).await;

    match &report.outcome {
        Ok(()) => dom::alert(success_message),
        Err(rejected) => dom::alert(&format!("{error_prefix} {rejected}")),
    }

    match report.refresh {
        Ok(root) => ctx.store.update(|store| store.replace_snapshot(root)),
        Err(err) => {
            web_sys::console::warn_1(&format!("treegrid: refresh skipped: {err}").into());
        }
    }
}

async fn read_file(file: &web_sys::File) -> Result<FilePayload, wasm_bindgen::JsValue> {
    let buffer = wasm_bindgen_futures::JsFuture::from(file.array_buffer()).await?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    Ok(FilePayload {
        name: file.name(),
        bytes,
    })
}
