//! Original/colorized comparison widget.
//!
//! Renders one of three view modes over the two display references and,
//! in split mode, a drag-controlled reveal boundary. The colorized
//! reference is optional so the widget can render while the result is
//! still in flight.

use std::rc::Rc;

use chromify_core::{Direction, RevealPosition, ViewMode};
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdChevronLeft, LdChevronRight, LdDownload};
use dioxus_free_icons::Icon;

use crate::blob::BlobUrl;
use crate::download;

/// Fixed filename for the save-as action.
pub const RESULT_FILENAME: &str = "colorized-image.png";

/// Props for the [`Comparison`] component.
#[derive(Props, Clone)]
pub struct ComparisonProps {
    /// Display reference for the uploaded original.
    original: Rc<BlobUrl>,
    /// Display reference for the colorized result; `None` while the
    /// request is in flight.
    colorized: Option<Rc<BlobUrl>>,
}

impl PartialEq for ComparisonProps {
    fn eq(&self, other: &Self) -> bool {
        let colorized_eq = match (&self.colorized, &other.colorized) {
            (Some(a), Some(b)) => Rc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        };
        Rc::ptr_eq(&self.original, &other.original) && colorized_eq
    }
}

/// Comparison widget with split, side-by-side, and before/after views.
///
/// The mode cycles through the fixed three-element sequence with
/// wraparound in both directions. The download action is offered only
/// when a colorized result exists and saves it under a fixed name.
#[component]
pub fn Comparison(props: ComparisonProps) -> Element {
    let mut reveal = use_signal(RevealPosition::default);
    let mut mode = use_signal(ViewMode::default);
    let mut download_error = use_signal(|| Option::<String>::None);

    let has_result = props.colorized.is_some();

    let download_click = {
        let colorized = props.colorized.clone();
        move |_| {
            if let Some(ref url) = colorized {
                match download::trigger_download(url.as_str(), RESULT_FILENAME) {
                    Ok(()) => download_error.set(None),
                    Err(e) => download_error.set(Some(format!("Download failed: {e}"))),
                }
            }
        }
    };

    // Render the selected mode's body up front; the control bar below
    // is mode-independent.
    let body = match mode() {
        ViewMode::Split => render_split(&props, reveal),
        ViewMode::SideBySide => rsx! {
            div { class: "compare-panes compare-panes-row",
                {render_pane(Some(&props.original), "Original grayscale", "Original")}
                {render_pane(props.colorized.as_ref(), "Colorized", "Colorized")}
            }
        },
        ViewMode::BeforeAfter => rsx! {
            div { class: "compare-panes compare-panes-column",
                {render_pane(Some(&props.original), "Original grayscale", "Before")}
                {render_pane(props.colorized.as_ref(), "Colorized", "After")}
            }
        },
    };

    rsx! {
        div { class: "compare",
            // Control bar: mode cycling and download.
            div { class: "compare-controls",
                div { class: "compare-mode",
                    button {
                        class: "button button-outline button-icon",
                        aria_label: "Previous view mode",
                        onclick: move |_| mode.set(mode().cycled(Direction::Prev)),
                        Icon { icon: LdChevronLeft, width: 16, height: 16 }
                    }
                    span { class: "compare-mode-label", "{mode()}" }
                    button {
                        class: "button button-outline button-icon",
                        aria_label: "Next view mode",
                        onclick: move |_| mode.set(mode().cycled(Direction::Next)),
                        Icon { icon: LdChevronRight, width: 16, height: 16 }
                    }
                }

                if has_result {
                    button {
                        class: "button button-outline",
                        onclick: download_click,
                        Icon { icon: LdDownload, width: 16, height: 16 }
                        "Download"
                    }
                }
            }

            if let Some(ref err) = download_error() {
                p { class: "compare-error", "{err}" }
            }

            {body}
        }
    }
}

/// Split view: original base layer, result overlay clipped to the
/// reveal percentage, divider line and slider at the same position.
fn render_split(props: &ComparisonProps, mut reveal: Signal<RevealPosition>) -> Element {
    let pct = reveal().percent();

    rsx! {
        div { class: "compare-frame",
            img {
                class: "compare-base",
                src: "{props.original}",
                alt: "Original grayscale",
            }

            if let Some(ref colorized) = props.colorized {
                div {
                    class: "compare-overlay",
                    style: "width: {pct}%;",
                    img {
                        class: "compare-overlay-img",
                        src: "{colorized}",
                        alt: "Colorized",
                    }
                }
            }

            div { class: "compare-divider", style: "left: {pct}%;" }

            div { class: "compare-slider-wrap",
                input {
                    class: "compare-slider",
                    r#type: "range",
                    min: "{RevealPosition::MIN}",
                    max: "{RevealPosition::MAX}",
                    step: "{RevealPosition::STEP}",
                    value: "{pct}",
                    aria_label: "Reveal position",
                    // Out-of-range or unparsable slider values are
                    // dropped; the renderer only ever sees [0, 100].
                    oninput: move |evt| {
                        if let Ok(parsed) = evt.value().parse::<f64>()
                            && let Ok(pos) = RevealPosition::new(parsed)
                        {
                            reveal.set(pos);
                        }
                    },
                }
            }

            span { class: "compare-badge compare-badge-left", "Original" }
            span { class: "compare-badge compare-badge-right", "Colorized" }
        }
    }
}

/// One fixed-size pane: the image when its reference exists, otherwise
/// a "Processing…" placeholder.
fn render_pane(url: Option<&Rc<BlobUrl>>, alt: &'static str, label: &'static str) -> Element {
    rsx! {
        figure { class: "compare-pane",
            if let Some(url) = url {
                img { class: "compare-pane-img", src: "{url}", alt: "{alt}" }
            } else {
                div { class: "compare-placeholder", "Processing…" }
            }
            figcaption { class: "compare-pane-label", "{label}" }
        }
    }
}
