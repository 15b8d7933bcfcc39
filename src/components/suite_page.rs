use crate::components::{resolve_image, NotFound, ResponsiveImg, SuiteGallery};
use crate::config::config;
use crate::content::{find_suite, SECTION_SUITES};
use crate::error::AppError;
use crate::i18n::Lang;
use crate::services::booking_url;
use dioxus::prelude::*;
use dioxus_i18n::t;

#[component]
pub fn SuitePage(lang: Lang, slug: String) -> Element {
    let cfg = config();
    let Some(suite) = find_suite(&slug) else {
        log::warn!("{}", AppError::NotFound(format!("suite '{}'", slug)));
        return rsx! {
            NotFound { lang }
        };
    };
    let book_href = booking_url(suite.room_code, lang, &cfg.booking);
    let back_href = lang.href(&format!("/#{}", SECTION_SUITES));

    rsx! {
        article { class: "suite",
            div { class: "suite-hero",
                ResponsiveImg {
                    image: resolve_image(suite.hero_image, &cfg.images.hero_widths, "100vw", true),
                    alt: suite.heading().to_string(),
                    class: "suite-hero-image".to_string(),
                }
                div { class: "hero-overlay" }
                div { class: "suite-hero-content",
                    h1 { class: "suite-title", "{suite.heading()}" }
                    p { class: "suite-tagline", "{suite.tagline}" }
                }
            }

            div { class: "suite-body",
                a { class: "suite-back", href: "{back_href}", "← " {t!("suite-back")} }

                dl { class: "suite-facts",
                    div { dt { {t!("suite-size")} } dd { "{suite.size}" } }
                    div { dt { {t!("suite-guests")} } dd { {t!("suite-guest-count", count: suite.guests)} } }
                    div { dt { {t!("suite-bed")} } dd { "{suite.bed}" } }
                    div { dt { {t!("suite-view")} } dd { "{suite.view}" } }
                }

                p { class: "section-lead", "{suite.description}" }

                if !suite.highlights.is_empty() {
                    h2 { class: "section-title", {t!("suite-highlights")} }
                    ul { class: "suite-highlights",
                        for highlight in suite.highlights.iter() {
                            li { key: "{highlight}", "{highlight}" }
                        }
                    }
                }

                div { class: "suite-details",
                    for detail in suite.details.iter() {
                        figure { key: "{detail.label}", class: "suite-detail",
                            ResponsiveImg {
                                image: resolve_image(detail.image, &cfg.images.section_widths, "(min-width: 768px) 50vw, 100vw", false),
                                alt: format!("{} – {}", suite.heading(), detail.label),
                                class: "suite-detail-image".to_string(),
                            }
                            figcaption {
                                strong { "{detail.label}" }
                                " {detail.copy}"
                            }
                        }
                    }
                }

                SuiteGallery { key: "{slug}", suite }

                h2 { class: "section-title", {t!("suite-amenities")} }
                ul { class: "suite-amenities",
                    for amenity in suite.amenities.iter() {
                        li { key: "{amenity}", "{amenity}" }
                    }
                }

                div { class: "suite-booking",
                    div { class: "suite-rate",
                        span { class: "suite-rate-label", {t!("suite-rate")} }
                        if let Some(original) = suite.rate_original {
                            s { class: "suite-rate-original", "{original}" }
                        }
                        span { class: "suite-rate-value", "{suite.rate} {cfg.booking.currency}" }
                        span { class: "suite-rate-unit", {t!("suite-rate-per-night")} }
                    }
                    a {
                        class: "btn btn-book",
                        href: "{book_href}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        {t!("suite-book")}
                    }
                }
            }
        }
    }
}
