//! The colorize HTTP call.
//!
//! One request, one response: the uploaded image goes out as a
//! single-part form and the colorized image comes back as a binary
//! body. No caller-side timeout (the transport's own limits apply),
//! no retry -- the user re-uploads to try again.

use chromify_core::MediaType;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::BlobPropertyBag;

/// The colorization backend endpoint.
///
/// Served by `chromify-server` during development; a deployment points
/// this at the real inference service.
pub const COLORIZE_ENDPOINT: &str = "http://localhost:8000/colorize";

/// Form field name the backend expects the image under.
pub const IMAGE_FIELD: &str = "image";

/// Errors that can occur during the colorize exchange.
///
/// The UI collapses every variant into one generic message; the
/// distinction exists only for console logging.
#[derive(Debug, thiserror::Error)]
pub enum ColorizeError {
    /// The server answered with a non-success status.
    #[error("colorize request failed with status {0}")]
    Status(u16),

    /// The request never completed (refused, dropped, CORS-blocked).
    #[error("network error: {0}")]
    Network(String),

    /// A browser API call failed while building or reading the exchange.
    #[error("browser API error: {0}")]
    JsError(String),
}

impl From<JsValue> for ColorizeError {
    fn from(value: JsValue) -> Self {
        Self::JsError(format!("{value:?}"))
    }
}

/// POST `bytes` to the colorize endpoint and return the response body.
///
/// Builds a `FormData` payload with the image as its single part and
/// awaits the fetch. A 2xx response yields the binary body; anything
/// else is an error.
///
/// # Errors
///
/// Returns [`ColorizeError::Status`] for a non-2xx response,
/// [`ColorizeError::Network`] when the fetch itself rejects, and
/// [`ColorizeError::JsError`] if a browser API call fails.
#[allow(clippy::future_not_send)] // WASM is single-threaded; Send is not needed
pub async fn colorize(bytes: &[u8], media_type: MediaType) -> Result<Vec<u8>, ColorizeError> {
    let window = web_sys::window().ok_or_else(|| ColorizeError::JsError("no global window".into()))?;

    // Wrap the bytes in a Blob carrying the declared type, then into a
    // single-part form under the field name the backend expects.
    let array = js_sys::Uint8Array::from(bytes);
    let parts = js_sys::Array::new();
    parts.push(&array);
    let opts = BlobPropertyBag::new();
    opts.set_type(media_type.mime());
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &opts)?;

    let form = web_sys::FormData::new()?;
    form.append_with_blob_and_filename(IMAGE_FIELD, &blob, "upload")?;

    let init = web_sys::RequestInit::new();
    init.set_method("POST");
    init.set_body(&JsValue::from(form));

    let response = JsFuture::from(window.fetch_with_str_and_init(COLORIZE_ENDPOINT, &init))
        .await
        .map_err(|e| ColorizeError::Network(format!("{e:?}")))?;
    let response: web_sys::Response = response
        .dyn_into()
        .map_err(|e| ColorizeError::JsError(format!("fetch returned a non-Response: {e:?}")))?;

    if !response.ok() {
        return Err(ColorizeError::Status(response.status()));
    }

    let buffer = JsFuture::from(response.array_buffer()?)
        .await
        .map_err(|e| ColorizeError::Network(format!("{e:?}")))?;
    Ok(js_sys::Uint8Array::new(&buffer).to_vec())
}
