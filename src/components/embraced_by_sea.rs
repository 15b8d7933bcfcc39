use crate::components::{gallery_items, lightbox_labels, resolve_image, ResponsiveImg};
use crate::config::config;
use crate::content::{SEA_FEATURES, SECTION_PALAPA};
use crate::i18n::Lang;
use dioxus::prelude::*;
use dioxus_gallery::{Lightbox, LightboxState};
use dioxus_i18n::t;

/// Palapa beach lounge section with a clickable photo grid
#[component]
pub fn EmbracedBySea(lang: Lang) -> Element {
    let cfg = config();
    let mut viewer = use_signal(|| LightboxState::new(SEA_FEATURES.len(), cfg.slider.lightbox_zoom));

    let title = t!("palapa-title");
    let paths: Vec<&str> = SEA_FEATURES.iter().map(|f| f.image).collect();
    let items = gallery_items(&paths, &cfg.images.section_widths, &title);

    rsx! {
        section { id: SECTION_PALAPA, class: "palapa",
            div { class: "section-header",
                p { class: "section-eyebrow", {t!("palapa-eyebrow")} }
                h2 { class: "section-title", "{title}" }
                p { class: "section-lead", {t!("palapa-lead")} }
            }

            div { class: "palapa-grid",
                for (index, feature) in SEA_FEATURES.iter().enumerate() {
                    button {
                        key: "{feature.image}",
                        class: "palapa-tile",
                        onclick: move |_| {
                            viewer.write().open(index);
                        },
                        ResponsiveImg {
                            image: resolve_image(feature.image, &cfg.images.section_widths, "(min-width: 768px) 25vw, 50vw", false),
                            alt: format!("{} {}", title, index + 1),
                            class: "palapa-image".to_string(),
                        }
                        if let Some(caption) = feature.title {
                            span { class: "palapa-caption", "{caption.get(lang)}" }
                        }
                    }
                }
            }

            p { class: "palapa-closing", {t!("palapa-closing")} }
            p { class: "section-text", {t!("palapa-description")} }

            Lightbox { items, state: viewer, labels: lightbox_labels() }
        }
    }
}
