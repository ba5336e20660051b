//! HTTP implementation of the core [`FileApi`] over the server contract.
//!
//! Same-origin requests via gloo-net. No timeout and no retry: a hung
//! call stalls only its own triggering path, and the next poll tick or
//! user action is the only retry mechanism.

use gloo_net::http::{Request, Response};
use treegrid_core::{FileApi, FilePayload, OperationRejected, SnapshotError, TreeNode, fragment};
use wasm_bindgen::JsValue;
use web_sys::FormData;

use crate::config::{
    CREATE_FOLDER_ENDPOINT, DELETE_ENDPOINT, FILES_ENDPOINT, TREE_ENDPOINT, UPDATE_ENDPOINT,
    UPLOAD_ENDPOINT,
};

/// Stateless client for the file-system service.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpFileApi;

/// Direct content URL for a path. Used for both "open in new tab" and
/// download links; download anchors suggest the original filename.
pub fn content_url(path: &str) -> String {
    format!("{}/{}", FILES_ENDPOINT, fragment::encode(path))
}

impl FileApi for HttpFileApi {
    async fn fetch_snapshot(&self) -> Result<TreeNode, SnapshotError> {
        let response = Request::get(TREE_ENDPOINT)
            .send()
            .await
            .map_err(transport)?;
        if !response.ok() {
            return Err(SnapshotError::Transport(format!(
                "HTTP {}",
                response.status()
            )));
        }
        let payload = response.text().await.map_err(transport)?;
        Ok(TreeNode::from_json(&payload)?)
    }

    async fn upload(&self, file: &FilePayload, directory: &str) -> Result<(), OperationRejected> {
        let form = multipart(file, "target_path", directory)?;
        post_form(UPLOAD_ENDPOINT, form).await
    }

    async fn replace(&self, file: &FilePayload, path: &str) -> Result<(), OperationRejected> {
        let form = multipart(file, "replace_path", path)?;
        post_form(UPDATE_ENDPOINT, form).await
    }

    async fn remove(&self, path: &str) -> Result<(), OperationRejected> {
        post_json(DELETE_ENDPOINT, path).await
    }

    async fn create_directory(&self, path: &str) -> Result<(), OperationRejected> {
        post_json(CREATE_FOLDER_ENDPOINT, path).await
    }
}

fn transport(err: gloo_net::Error) -> SnapshotError {
    SnapshotError::Transport(err.to_string())
}

fn js_rejected(err: JsValue) -> OperationRejected {
    OperationRejected::transport(format!("{err:?}"))
}

/// Build a multipart body carrying the file bytes plus one path field.
fn multipart(
    file: &FilePayload,
    path_field: &str,
    path_value: &str,
) -> Result<FormData, OperationRejected> {
    let form = FormData::new().map_err(js_rejected)?;

    let bytes = js_sys::Uint8Array::from(file.bytes.as_slice());
    let parts = js_sys::Array::new();
    parts.push(&bytes.buffer());
    let blob = web_sys::Blob::new_with_u8_array_sequence(&parts).map_err(js_rejected)?;

    form.append_with_blob_and_filename("file", &blob, &file.name)
        .map_err(js_rejected)?;
    form.append_with_str(path_field, path_value)
        .map_err(js_rejected)?;
    Ok(form)
}

async fn post_form(endpoint: &str, form: FormData) -> Result<(), OperationRejected> {
    let response = Request::post(endpoint)
        .body(form)
        .map_err(|e| OperationRejected::transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| OperationRejected::transport(e.to_string()))?;
    settle(response).await
}

async fn post_json(endpoint: &str, path: &str) -> Result<(), OperationRejected> {
    let response = Request::post(endpoint)
        .json(&serde_json::json!({ "path": path }))
        .map_err(|e| OperationRejected::transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| OperationRejected::transport(e.to_string()))?;
    settle(response).await
}

/// Map the response to the mutation outcome; a non-2xx body is the
/// server's failure text and is passed through verbatim.
async fn settle(response: Response) -> Result<(), OperationRejected> {
    if response.ok() {
        return Ok(());
    }
    let message = response.text().await.unwrap_or_default();
    Err(OperationRejected {
        status: Some(response.status()),
        message,
    })
}
