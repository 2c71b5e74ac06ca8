//! Example gallery: curated before/after pairs by category.
//!
//! The demo ships no photographs; tiles are hue-derived placeholders,
//! grayscale on the "before" side and a saturated wash on the "after"
//! side.

use dioxus::prelude::*;

/// Gallery categories in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Category {
    #[default]
    Landscapes,
    Portraits,
    Architecture,
}

impl Category {
    const ALL: [Self; 3] = [Self::Landscapes, Self::Portraits, Self::Architecture];

    const fn label(self) -> &'static str {
        match self {
            Self::Landscapes => "Landscapes",
            Self::Portraits => "Portraits",
            Self::Architecture => "Architecture",
        }
    }

    const fn items(self) -> &'static [GalleryItem] {
        match self {
            Self::Landscapes => &[
                GalleryItem {
                    id: 1,
                    title: "Mountain Sunset",
                    description: "A stunning mountain landscape transformed from grayscale to vibrant sunset colors.",
                },
                GalleryItem {
                    id: 2,
                    title: "Forest Path",
                    description: "A serene forest path with rich greens and natural lighting.",
                },
                GalleryItem {
                    id: 3,
                    title: "Ocean View",
                    description: "Dramatic ocean waves with deep blues and white foam.",
                },
            ],
            Self::Portraits => &[
                GalleryItem {
                    id: 4,
                    title: "Vintage Portrait",
                    description: "A classic portrait with natural skin tones and subtle background colors.",
                },
                GalleryItem {
                    id: 5,
                    title: "Street Photography",
                    description: "Urban street photography with realistic skin tones and vibrant clothing.",
                },
                GalleryItem {
                    id: 6,
                    title: "Artistic Portrait",
                    description: "An artistic portrait with dramatic lighting and rich color palette.",
                },
            ],
            Self::Architecture => &[
                GalleryItem {
                    id: 7,
                    title: "Historic Building",
                    description: "A historic building with detailed stonework and period-accurate colors.",
                },
                GalleryItem {
                    id: 8,
                    title: "Modern Skyscraper",
                    description: "A modern glass skyscraper with reflective surfaces and urban surroundings.",
                },
                GalleryItem {
                    id: 9,
                    title: "Ancient Temple",
                    description: "An ancient temple with weathered stone and natural surroundings.",
                },
            ],
        }
    }
}

/// One before/after gallery entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct GalleryItem {
    id: u16,
    title: &'static str,
    description: &'static str,
}

impl GalleryItem {
    /// Placeholder hue for the colorized tile, spread across the wheel.
    const fn hue(self) -> u16 {
        (self.id * 40) % 360
    }
}

/// The gallery page.
#[component]
pub fn Gallery() -> Element {
    let mut selected = use_signal(Category::default);

    rsx! {
        section { class: "hero",
            h1 { class: "hero-title", "Gallery" }
            p { class: "hero-tagline",
                "Explore our collection of before and after colorization examples"
            }
        }

        section { class: "gallery",
            div { class: "gallery-tabs", role: "tablist",
                for category in Category::ALL {
                    button {
                        role: "tab",
                        class: if selected() == category { "gallery-tab gallery-tab-active" } else { "gallery-tab" },
                        "aria-selected": "{selected() == category}",
                        onclick: move |_| selected.set(category),
                        "{category.label()}"
                    }
                }
            }

            div { class: "gallery-grid",
                for item in selected().items() {
                    {render_card(*item)}
                }
            }
        }
    }
}

/// One gallery card: before/after tiles plus title and description.
fn render_card(item: GalleryItem) -> Element {
    let hue = item.hue();

    rsx! {
        div { class: "gallery-card", key: "{item.id}",
            div { class: "gallery-pair",
                div {
                    class: "gallery-tile",
                    style: "background: hsl(0, 0%, 80%);",
                    span { class: "gallery-tile-label", "Grayscale" }
                }
                div {
                    class: "gallery-tile",
                    style: "background: hsl({hue}, 70%, 70%);",
                    span { class: "gallery-tile-label", "Colorized" }
                }
            }
            h3 { class: "gallery-card-title", "{item.title}" }
            p { class: "gallery-card-text", "{item.description}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_category_has_three_items() {
        for category in Category::ALL {
            assert_eq!(category.items().len(), 3);
        }
    }

    #[test]
    fn item_ids_are_unique_across_categories() {
        let mut seen = std::collections::HashSet::new();
        for category in Category::ALL {
            for item in category.items() {
                assert!(seen.insert(item.id), "duplicate gallery id {}", item.id);
            }
        }
    }

    #[test]
    fn hues_stay_on_the_color_wheel() {
        for category in Category::ALL {
            for item in category.items() {
                assert!(item.hue() < 360);
            }
        }
    }
}
