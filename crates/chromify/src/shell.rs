//! Shared page chrome: header, footer, and the layout wrapping every
//! route.

use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdGithub, LdInstagram, LdMoon, LdSun, LdTwitter};
use dioxus_free_icons::Icon;

use crate::theme::Theme;
use crate::Route;

/// Layout component: header above, footer below, the routed page in
/// between.
#[component]
pub fn PageShell() -> Element {
    rsx! {
        div { class: "shell",
            Header {}
            main { class: "shell-main",
                Outlet::<Route> {}
            }
            Footer {}
        }
    }
}

/// Sticky site header with brand mark, navigation, and theme toggle.
#[component]
fn Header() -> Element {
    let mut theme: Signal<Theme> = use_context();
    let route: Route = use_route();

    let nav_class = |target: &Route| {
        if route == *target {
            "nav-link nav-link-active"
        } else {
            "nav-link"
        }
    };
    let home_class = nav_class(&Route::Home {});
    let gallery_class = nav_class(&Route::Gallery {});
    let how_class = nav_class(&Route::HowItWorks {});

    rsx! {
        header { class: "site-header",
            Link { class: "brand", to: Route::Home {},
                span { class: "brand-mark", "C" }
                span { class: "brand-name", "Chromify" }
            }

            nav { class: "site-nav",
                Link { class: "{home_class}", to: Route::Home {}, "Home" }
                Link { class: "{gallery_class}", to: Route::Gallery {}, "Gallery" }
                Link { class: "{how_class}", to: Route::HowItWorks {}, "How It Works" }
            }

            button {
                class: "button button-ghost button-icon",
                aria_label: "Toggle theme",
                onclick: move |_| {
                    let next = theme().toggled();
                    theme.set(next);
                },
                if theme().is_dark() {
                    Icon { icon: LdSun, width: 20, height: 20 }
                } else {
                    Icon { icon: LdMoon, width: 20, height: 20 }
                }
            }
        }
    }
}

/// Site footer: brand, blurb, and social links.
#[component]
fn Footer() -> Element {
    rsx! {
        footer { class: "site-footer",
            div { class: "footer-brand",
                span { class: "brand-mark", "C" }
                span { class: "brand-name", "Chromify" }
            }
            p { class: "footer-blurb",
                "Bringing life to grayscale images with advanced AI colorization technology."
            }
            div { class: "footer-social",
                a { href: "#", aria_label: "GitHub",
                    Icon { icon: LdGithub, width: 18, height: 18 }
                }
                a { href: "#", aria_label: "Twitter",
                    Icon { icon: LdTwitter, width: 18, height: 18 }
                }
                a { href: "#", aria_label: "Instagram",
                    Icon { icon: LdInstagram, width: 18, height: 18 }
                }
            }
        }
    }
}
