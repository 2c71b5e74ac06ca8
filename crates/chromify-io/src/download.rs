//! File download via a temporary anchor element.
//!
//! Dioxus has no built-in file download API.  This module triggers a
//! save-as by programmatically clicking a temporary
//! `<a download="filename">` element pointed at an existing object URL.
//! The URL stays owned by its [`BlobUrl`](crate::blob::BlobUrl) guard —
//! downloading must not revoke a reference that is still displayed.
//!
//! All functions in this module require a browser environment
//! (`wasm32-unknown-unknown` target).

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;

/// Errors that can occur when triggering a file download.
#[derive(Debug, thiserror::Error)]
pub enum DownloadError {
    /// A browser API call returned an error.
    #[error("browser API error: {0}")]
    JsError(String),
}

impl From<JsValue> for DownloadError {
    fn from(value: JsValue) -> Self {
        Self::JsError(format!("{value:?}"))
    }
}

/// Trigger a save-as for the blob behind `url`.
///
/// Creates a temporary `<a href=url download=filename>` element,
/// clicks it, and removes it again.
///
/// # Errors
///
/// Returns [`DownloadError::JsError`] if the window, document, or body
/// is unavailable or element creation fails.
pub fn trigger_download(url: &str, filename: &str) -> Result<(), DownloadError> {
    let window =
        web_sys::window().ok_or_else(|| DownloadError::JsError("no global window".into()))?;
    let document = window
        .document()
        .ok_or_else(|| DownloadError::JsError("no document".into()))?;

    let anchor: web_sys::HtmlAnchorElement = document
        .create_element("a")?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|e| DownloadError::JsError(format!("failed to cast element: {e:?}")))?;

    anchor.set_href(url);
    anchor.set_download(filename);

    // Append to body, click, and remove.
    let body = document
        .body()
        .ok_or_else(|| DownloadError::JsError("no document body".into()))?;
    body.append_child(&anchor)?;
    anchor.click();

    // Best-effort cleanup — the download is already initiated.
    let _ = body.remove_child(&anchor);

    Ok(())
}
