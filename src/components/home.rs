use crate::components::{
    resolve_image, AboutSlider, EmbracedBySea, FusionCuisine, HeroSlider, ResponsiveImg,
};
use crate::config::config;
use crate::content::{SECTION_SUITES, SUITES};
use crate::i18n::Lang;
use dioxus::prelude::*;
use dioxus_i18n::t;

#[component]
pub fn HomePage(lang: Lang) -> Element {
    rsx! {
        HeroSlider { lang }
        AboutSlider {}
        SuitesOverview { lang }
        EmbracedBySea { lang }
        FusionCuisine { lang }
    }
}

/// Cards linking to each suite page
#[component]
pub fn SuitesOverview(lang: Lang) -> Element {
    let cfg = config();

    rsx! {
        section { id: SECTION_SUITES, class: "suites",
            div { class: "section-header",
                h2 { class: "section-title", {t!("suites-title")} }
                p { class: "section-lead", {t!("suites-intro")} }
            }
            div { class: "suites-grid",
                for suite in SUITES.iter() {
                    Link {
                        key: "{suite.room_code}",
                        class: "suite-card",
                        to: lang.href(&format!("/suites/{}", suite.slug())),
                        ResponsiveImg {
                            image: resolve_image(suite.hero_image, &cfg.images.section_widths, "(min-width: 1024px) 25vw, (min-width: 640px) 50vw, 100vw", false),
                            alt: suite.heading().to_string(),
                            class: "suite-card-image".to_string(),
                        }
                        div { class: "suite-card-body",
                            h3 { "{suite.heading()}" }
                            p { class: "suite-card-tagline", "{suite.tagline}" }
                            p { class: "suite-card-meta",
                                "{suite.size} · "
                                {t!("suite-guest-count", count: suite.guests)}
                            }
                            span { class: "suite-card-link", {t!("suites-discover")} " →" }
                        }
                    }
                }
            }
        }
    }
}
