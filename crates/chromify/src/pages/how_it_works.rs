//! Marketing explainer for the colorization flow.

use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdCheck;
use dioxus_free_icons::Icon;

use crate::Route;

/// The four analysis steps shown under "The Science of Colorization".
const SCIENCE_STEPS: [(&str, &str); 4] = [
    (
        "Image Analysis:",
        "The model examines textures, shapes, and patterns in your grayscale image.",
    ),
    (
        "Context Understanding:",
        "Objects and scenes are recognized so colors match what they actually are.",
    ),
    (
        "Color Mapping:",
        "Plausible colors are predicted for every region based on learned examples.",
    ),
    (
        "Enhancement:",
        "The result is refined for natural saturation and consistent lighting.",
    ),
];

/// The how-it-works page.
#[component]
pub fn HowItWorks() -> Element {
    rsx! {
        section { class: "hero",
            h1 { class: "hero-title", "How It Works" }
            p { class: "hero-tagline",
                "A look at what happens between your upload and the colorized result"
            }
        }

        section { class: "science",
            h2 { "The Science of Colorization" }
            ul { class: "science-list",
                for (name, detail) in SCIENCE_STEPS {
                    li { class: "science-item",
                        span { class: "science-check",
                            Icon { icon: LdCheck, width: 16, height: 16 }
                        }
                        div {
                            strong { "{name}" }
                            " {detail}"
                        }
                    }
                }
            }
            p { class: "science-formats", "Supported formats: JPEG, PNG, GIF, WEBP" }
        }

        section { class: "cta",
            h2 { "Ready to Try It?" }
            Link { class: "button button-primary", to: Route::Home {},
                "Get Started Now"
            }
        }
    }
}
