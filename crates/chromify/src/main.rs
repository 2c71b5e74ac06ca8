use dioxus::prelude::*;

use crate::pages::{Gallery, Home, HowItWorks};
use crate::shell::PageShell;
use crate::theme::Theme;

mod pages;
mod shell;
mod theme;

fn main() {
    dioxus::launch(app);
}

/// Site routes.
///
/// All pages share the [`PageShell`] layout (header, footer, theme).
#[derive(Debug, Clone, PartialEq, Routable)]
enum Route {
    #[layout(PageShell)]
    #[route("/")]
    Home {},
    #[route("/gallery")]
    Gallery {},
    #[route("/how-it-works")]
    HowItWorks {},
}

/// Root application component.
///
/// Provides the theme as explicit context (a signal handed down to the
/// rendering layer, not a global) and mounts the router.
fn app() -> Element {
    let theme = use_context_provider(|| Signal::new(Theme::default()));

    rsx! {
        style { dangerous_inner_html: include_str!("../assets/style.css") }

        div { class: "app {theme().class()}",
            Router::<Route> {}
        }
    }
}
