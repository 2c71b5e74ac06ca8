//! Owned Blob URLs for displaying binary image data.
//!
//! Converts raw image bytes into browser-displayable object URLs via
//! the Web API, without re-encoding (no base64 round trip). The URL is
//! an acquired resource: [`BlobUrl`] revokes it on drop, so one guard
//! exists per displayed blob and replacing or discarding the guard
//! releases the browser-side allocation.
//!
//! All functions in this module require a browser environment
//! (`wasm32-unknown-unknown` target).

use std::fmt;

use wasm_bindgen::JsValue;
use web_sys::BlobPropertyBag;

/// Errors that can occur when creating a Blob URL.
#[derive(Debug, thiserror::Error)]
pub enum BlobError {
    /// A browser API call returned an error.
    #[error("browser API error: {0}")]
    JsError(String),
}

impl From<JsValue> for BlobError {
    fn from(value: JsValue) -> Self {
        Self::JsError(format!("{value:?}"))
    }
}

/// An object URL owning its underlying `Blob` registration.
///
/// The URL is revoked when the guard is dropped. Clone-free by design:
/// share it as `Rc<BlobUrl>` so the last user releases it.
#[derive(Debug)]
pub struct BlobUrl {
    url: String,
}

impl BlobUrl {
    /// Register `bytes` as a `Blob` with the given MIME type and return
    /// an owned object URL for it, suitable for an `<img src>`.
    ///
    /// # Errors
    ///
    /// Returns [`BlobError::JsError`] if `Blob` or URL creation fails.
    pub fn from_bytes(bytes: &[u8], mime_type: &str) -> Result<Self, BlobError> {
        let array = js_sys::Uint8Array::from(bytes);
        let parts = js_sys::Array::new();
        parts.push(&array);

        let opts = BlobPropertyBag::new();
        opts.set_type(mime_type);
        let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &opts)?;

        let url = web_sys::Url::create_object_url_with_blob(&blob)?;
        Ok(Self { url })
    }

    /// The `blob:` URL string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.url
    }
}

impl fmt::Display for BlobUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

impl Drop for BlobUrl {
    /// Best-effort revocation; the URL may already be gone if the
    /// document was torn down first.
    fn drop(&mut self) {
        let _ = web_sys::Url::revoke_object_url(&self.url);
    }
}
