use crate::components::{lightbox_labels, resolve_image, ResponsiveImg};
use crate::config::config;
use crate::content::{DISHES, SECTION_KITCHEN};
use crate::i18n::Lang;
use dioxus::prelude::*;
use dioxus_gallery::{sleep, use_reduced_motion, Autoplay, Lightbox, LightboxState, Marquee};
use dioxus_i18n::t;
use std::time::Duration;

/// Local kitchen section with an endless strip of dishes
#[component]
pub fn FusionCuisine(lang: Lang) -> Element {
    let cfg = config();
    let mut marquee = use_signal(|| Marquee::new(cfg.marquee.speed_px));
    let mut viewer = use_signal(|| LightboxState::new(DISHES.len(), cfg.slider.lightbox_zoom));
    let mut hovered = use_signal(|| false);
    let reduced_motion = use_reduced_motion();
    let frame = Duration::from_millis(cfg.marquee.frame_ms.max(1));

    use_future(move || async move {
        loop {
            sleep(frame).await;
            let autoplay = Autoplay {
                paused: *hovered.peek() || viewer.peek().is_open(),
                reduced_motion: *reduced_motion.peek(),
            };
            if autoplay.should_run() && marquee.peek().period() > 0.0 {
                marquee.write().tick();
            }
        }
    });

    let items: Vec<_> = DISHES
        .iter()
        .map(|dish| {
            resolve_image(dish.image, &cfg.images.section_widths, "100vw", false)
                .to_gallery_item(dish.image, dish.name.get(lang))
        })
        .collect();
    let track_style = format!("transform: {};", marquee.read().transform());

    rsx! {
        section { id: SECTION_KITCHEN, class: "kitchen", aria_label: t!("kitchen-title"),
            div { class: "section-header",
                h2 { class: "section-title kitchen-heading",
                    span { {t!("kitchen-heading-line1")} }
                    br {}
                    span { class: "kitchen-heading-accent", {t!("kitchen-heading-line2")} }
                }
                p { class: "section-lead", {t!("kitchen-lead")} }
            }

            div {
                class: "marquee",
                onmouseenter: move |_| hovered.set(true),
                onmouseleave: move |_| hovered.set(false),
                div {
                    class: "marquee-track",
                    style: "{track_style}",
                    onmounted: move |evt: MountedEvent| async move {
                        match evt.get_client_rect().await {
                            Ok(rect) => marquee.write().set_track_width(rect.width()),
                            Err(e) => log::warn!("could not measure dish strip: {:?}", e),
                        }
                    },
                    // Rendered twice so the strip wraps without a gap
                    for copy in 0..2 {
                        for (index, dish) in DISHES.iter().enumerate() {
                            button {
                                key: "{copy}-{dish.image}",
                                class: "dish-card",
                                aria_hidden: if copy == 1 { "true" } else { "false" },
                                tabindex: if copy == 1 { "-1" } else { "0" },
                                onclick: move |_| {
                                    viewer.write().open(index);
                                },
                                ResponsiveImg {
                                    image: resolve_image(dish.image, &cfg.images.card_widths, "(min-width: 768px) 20vw, 60vw", false),
                                    alt: dish.name.get(lang).to_string(),
                                    class: "dish-image".to_string(),
                                }
                                span { class: "dish-name", "{dish.name.get(lang)}" }
                            }
                        }
                    }
                }
            }

            p { class: "section-text", {t!("kitchen-description")} }

            Lightbox { items, state: viewer, labels: lightbox_labels() }
        }
    }
}
