use crate::components::{gallery_items, lightbox_labels, resolve_image, ResponsiveImg};
use crate::config::config;
use crate::content::ABOUT_IMAGES;
use dioxus::prelude::*;
use dioxus_gallery::{
    sleep, use_reduced_motion, Autoplay, AutoplayTimer, Lightbox, LightboxState, SlideCycle, SlideDots,
};
use dioxus_i18n::t;

/// "About" section: text beside an autoplaying image slider that opens a zoomed lightbox
#[component]
pub fn AboutSlider() -> Element {
    let cfg = config();
    let mut cycle = use_signal(|| SlideCycle::new(ABOUT_IMAGES.len()));
    let mut viewer = use_signal(|| LightboxState::new(ABOUT_IMAGES.len(), cfg.slider.lightbox_zoom));
    let mut hovered = use_signal(|| false);
    let reduced_motion = use_reduced_motion();
    let interval = cfg.slider.about_interval();

    use_future(move || async move {
        let mut timer = AutoplayTimer::new(interval);
        loop {
            sleep(AutoplayTimer::POLL).await;
            let autoplay = Autoplay {
                paused: *hovered.peek() || viewer.peek().is_open(),
                reduced_motion: *reduced_motion.peek(),
            };
            if timer.tick(AutoplayTimer::POLL, autoplay) {
                cycle.write().advance();
            }
        }
    });

    let active = cycle.read().active();
    let alt = t!("about-image-alt");
    let items = gallery_items(&ABOUT_IMAGES, &cfg.images.section_widths, &alt);

    rsx! {
        section { id: "about", class: "about",
            div { class: "about-text",
                h2 { class: "section-title", {t!("about-title")} }
                p { class: "section-eyebrow", {t!("about-intro")} }
                p { class: "section-lead", {t!("about-description")} }
            }

            div {
                class: "about-slider",
                onmouseenter: move |_| hovered.set(true),
                onmouseleave: move |_| hovered.set(false),

                for (index, path) in ABOUT_IMAGES.iter().enumerate() {
                    button {
                        key: "{path}",
                        class: if index == active { "about-slide about-slide--active" } else { "about-slide" },
                        aria_label: "{alt} {index + 1}",
                        onclick: move |_| {
                            viewer.write().open(index);
                        },
                        ResponsiveImg {
                            image: resolve_image(path, &cfg.images.section_widths, "(min-width: 1024px) 50vw, 100vw", false),
                            alt: format!("{} {}", alt, index + 1),
                            class: "about-image".to_string(),
                        }
                    }
                }

                button {
                    class: "slider-arrow slider-arrow--prev",
                    aria_label: t!("lightbox-previous"),
                    onclick: move |_| cycle.write().retreat(),
                    "‹"
                }
                button {
                    class: "slider-arrow slider-arrow--next",
                    aria_label: t!("lightbox-next"),
                    onclick: move |_| cycle.write().advance(),
                    "›"
                }
                div { class: "slider-dots",
                    SlideDots {
                        count: ABOUT_IMAGES.len(),
                        active,
                        label: t!("slider-dot-label"),
                        on_select: move |index| cycle.write().select(index),
                    }
                }
            }

            Lightbox { items, state: viewer, labels: lightbox_labels() }
        }
    }
}
