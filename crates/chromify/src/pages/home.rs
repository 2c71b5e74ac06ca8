//! Landing page and colorization workspace.
//!
//! Owns the per-visit [`Session`] and wires intake, the colorize call,
//! and the comparison widget together: intake acquires the original's
//! display reference and starts a cycle; the spawned request commits
//! its outcome only if its ticket is still current, so a response
//! landing after a reset is dropped (releasing its Blob) instead of
//! resurrecting cleared state.

use std::rc::Rc;

use chromify_core::{MediaType, Session};
use chromify_io::{colorize, BlobUrl, Comparison, ImageUploader};
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdImage, LdRefreshCw, LdUpload};
use dioxus_free_icons::Icon;
use wasm_bindgen::JsValue;

/// Log the underlying cause to the console; the user only ever sees
/// the generic session message.
fn log_error(context: &str, err: &dyn std::fmt::Display) {
    web_sys::console::error_1(&JsValue::from_str(&format!("{context}: {err}")));
}

/// The landing page: hero copy, the upload/comparison workspace, and
/// the marketing sections below it.
#[component]
pub fn Home() -> Element {
    let mut session = use_signal(Session::<Rc<BlobUrl>>::new);

    // --- Upload handler: acquire, begin, fire the request ---
    let on_upload = move |(bytes, media_type): (Vec<u8>, MediaType)| {
        let original = match BlobUrl::from_bytes(&bytes, media_type.mime()) {
            Ok(url) => Rc::new(url),
            Err(e) => {
                log_error("failed to create display reference", &e);
                return;
            }
        };

        // The uploader is hidden while a cycle is in flight, but the
        // session enforces single-flight regardless.
        let ticket = match session.write().begin(original) {
            Ok(ticket) => ticket,
            Err(e) => {
                log_error("upload rejected", &e);
                return;
            }
        };

        spawn(async move {
            match colorize(&bytes, media_type).await {
                Ok(result_bytes) => match BlobUrl::from_bytes(&result_bytes, media_type.mime()) {
                    Ok(url) => {
                        session.write().succeed(ticket, Rc::new(url));
                    }
                    Err(e) => {
                        log_error("failed to create result reference", &e);
                        session.write().fail(ticket);
                    }
                },
                Err(e) => {
                    log_error("colorize request failed", &e);
                    session.write().fail(ticket);
                }
            }
        });
    };

    // Snapshot the session for rendering. Rc clones are cheap and keep
    // the display references alive across the borrow.
    let (original, result, processing, error) = {
        let s = session.read();
        (
            s.original().cloned(),
            s.result().cloned(),
            s.is_processing(),
            s.error(),
        )
    };

    rsx! {
        section { class: "hero",
            h1 { class: "hero-title", "Transform Grayscale to Vibrant Color" }
            p { class: "hero-tagline",
                "Upload your grayscale images and watch as our AI brings them to life with stunning colors."
            }
        }

        section { class: "workspace",
            if let Some(original) = original {
                div { class: "workspace-actions",
                    button {
                        class: "button button-outline",
                        onclick: move |_| session.write().reset(),
                        Icon { icon: LdRefreshCw, width: 16, height: 16 }
                        "Upload New Image"
                    }
                }

                if processing {
                    div { class: "processing",
                        div { class: "spinner" }
                        p { class: "processing-title", "Colorizing your image..." }
                        p { class: "processing-hint", "This may take a few moments" }
                    }
                } else if let Some(err) = error {
                    div { class: "error-panel", "{err}" }
                } else {
                    Comparison { original, colorized: result }
                }
            } else {
                ImageUploader { on_upload }
            }
        }

        section { class: "feature-grid",
            div { class: "feature-card",
                div { class: "feature-badge",
                    Icon { icon: LdUpload, width: 24, height: 24 }
                }
                h3 { "Easy Upload" }
                p { "Simply drag and drop your grayscale images or click to browse your files." }
            }
            div { class: "feature-card",
                div { class: "feature-badge",
                    Icon { icon: LdRefreshCw, width: 24, height: 24 }
                }
                h3 { "AI Processing" }
                p { "Our advanced AI model analyzes your image and applies realistic colorization." }
            }
            div { class: "feature-card",
                div { class: "feature-badge",
                    Icon { icon: LdImage, width: 24, height: 24 }
                }
                h3 { "Instant Results" }
                p { "Get your colorized image instantly and download it in high quality." }
            }
        }

        section { class: "steps",
            h2 { "How It Works" }
            div { class: "steps-grid",
                div { class: "step",
                    span { class: "step-number", "1" }
                    h3 { "Upload" }
                    p { "Upload your grayscale image" }
                }
                div { class: "step",
                    span { class: "step-number", "2" }
                    h3 { "Process" }
                    p { "Our AI analyzes and colorizes" }
                }
                div { class: "step",
                    span { class: "step-number", "3" }
                    h3 { "Download" }
                    p { "Get your colorized image" }
                }
            }
        }
    }
}
