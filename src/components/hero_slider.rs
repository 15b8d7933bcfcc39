use crate::components::{resolve_image, ResponsiveImg};
use crate::config::config;
use crate::content::{HERO_SLIDES, SECTION_HOME, SECTION_SUITES};
use crate::i18n::Lang;
use crate::services::booking_url;
use dioxus::prelude::*;
use dioxus_gallery::{sleep, use_reduced_motion, Autoplay, AutoplayTimer, SlideCycle, SlideDots};
use dioxus_i18n::t;

/// Full-screen cross-fading slider at the top of the home page
#[component]
pub fn HeroSlider(lang: Lang) -> Element {
    let cfg = config();
    let mut cycle = use_signal(|| SlideCycle::new(HERO_SLIDES.len()));
    let mut hovered = use_signal(|| false);
    let reduced_motion = use_reduced_motion();
    let interval = cfg.slider.hero_interval();

    use_future(move || async move {
        let mut timer = AutoplayTimer::new(interval);
        let mut running = true;
        loop {
            sleep(AutoplayTimer::POLL).await;
            let autoplay = Autoplay {
                paused: *hovered.peek(),
                reduced_motion: *reduced_motion.peek(),
            };
            if autoplay.should_run() != running {
                running = autoplay.should_run();
                log::debug!("hero autoplay {}", if running { "resumed" } else { "paused" });
            }
            if timer.tick(AutoplayTimer::POLL, autoplay) {
                cycle.write().advance();
            }
        }
    });

    let active = cycle.read().active();
    let book_href = booking_url(&cfg.booking.villa_room, lang, &cfg.booking);
    let discover_href = lang.href(&format!("/#{}", SECTION_SUITES));
    let slide_label = t!("slider-slide-label");

    rsx! {
        section {
            id: SECTION_HOME,
            class: "hero",
            onmouseenter: move |_| hovered.set(true),
            onmouseleave: move |_| hovered.set(false),

            for (index, slide) in HERO_SLIDES.iter().enumerate() {
                div {
                    key: "{slide.image}",
                    class: if index == active { "hero-slide hero-slide--active" } else { "hero-slide" },
                    aria_hidden: "{index != active}",
                    role: "group",
                    aria_label: "{slide_label} {index + 1}",
                    ResponsiveImg {
                        image: resolve_image(slide.image, &cfg.images.hero_widths, "100vw", index == 0),
                        alt: t!(slide.alt_key),
                        class: "hero-image".to_string(),
                    }
                    div { class: "hero-overlay" }
                    div { class: "hero-content",
                        p { class: "hero-location", {t!("hero-location")} }
                        h1 { class: "hero-title", {t!(slide.title_key)} }
                        p { class: "hero-caption", {t!(slide.caption_key)} }
                    }
                }
            }

            div { class: "hero-actions",
                a {
                    class: "btn btn-book",
                    href: "{book_href}",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    {t!("hero-cta-book")}
                }
                a { class: "btn btn-ghost", href: "{discover_href}", {t!("hero-cta-discover")} }
            }

            div { class: "hero-dots",
                SlideDots {
                    count: HERO_SLIDES.len(),
                    active,
                    label: t!("slider-dot-label"),
                    on_select: move |index| cycle.write().select(index),
                }
            }
        }
    }
}
