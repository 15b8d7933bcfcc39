use crate::components::{gallery_items, lightbox_labels, resolve_image, ResponsiveImg};
use crate::config::config;
use crate::models::Suite;
use dioxus::prelude::*;
use dioxus_gallery::{Lightbox, LightboxState, SlideCycle};
use dioxus_i18n::t;

/// Main photo with thumbnails; the main photo opens the lightbox at fit size
#[component]
pub fn SuiteGallery(suite: &'static Suite) -> Element {
    let cfg = config();
    let mut cycle = use_signal(|| SlideCycle::new(suite.gallery.len()));
    let mut viewer = use_signal(|| LightboxState::new(suite.gallery.len(), cfg.slider.suite_lightbox_zoom));

    let Some(main_path) = suite.gallery.get(cycle.read().active()).copied() else {
        return rsx! {};
    };
    let active = cycle.read().active();
    let items = gallery_items(suite.gallery, &cfg.images.section_widths, suite.heading());
    let thumb_label = t!("lightbox-thumbnail");

    rsx! {
        div { class: "suite-gallery",
            h2 { class: "section-title", {t!("suite-gallery")} }
            button {
                class: "suite-gallery-main",
                onclick: move |_| {
                    viewer.write().open(active);
                },
                ResponsiveImg {
                    image: resolve_image(main_path, &cfg.images.section_widths, "(min-width: 1024px) 66vw, 100vw", false),
                    alt: format!("{} {}", suite.heading(), active + 1),
                    class: "suite-gallery-image".to_string(),
                }
            }
            div { class: "suite-gallery-thumbs",
                for (index, path) in suite.gallery.iter().enumerate() {
                    button {
                        key: "{path}",
                        class: if index == active { "suite-thumb suite-thumb--active" } else { "suite-thumb" },
                        aria_label: "{thumb_label} {index + 1}",
                        onclick: move |_| cycle.write().select(index),
                        ResponsiveImg {
                            image: resolve_image(path, &cfg.images.card_widths, "120px", false),
                            alt: format!("{} {}", suite.heading(), index + 1),
                            class: "suite-thumb-image".to_string(),
                        }
                    }
                }
            }

            Lightbox { items, state: viewer, labels: lightbox_labels() }
        }
    }
}
