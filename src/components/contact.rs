use crate::config::config;
use dioxus::prelude::*;
use dioxus_i18n::t;

#[component]
pub fn ContactPage() -> Element {
    let site = &config().site;
    let phone_href = format!("tel:{}", site.phone.replace(' ', ""));
    let page_title = format!("{} | {}", t!("contact-title"), site.name);

    rsx! {
        document::Title { "{page_title}" }
        section { class: "page-hero",
            h1 { class: "page-title", {t!("contact-hero-title")} }
            p { class: "page-subtitle", {t!("contact-hero-subtitle")} }
        }

        div { class: "contact",
            div { class: "contact-card",
                h2 { class: "section-title", {t!("contact-info-title")} }
                dl { class: "contact-list",
                    dt { {t!("contact-info-address")} }
                    dd { "{site.address}" }
                    if !site.phone.is_empty() {
                        dt { {t!("contact-info-phone")} }
                        dd { a { href: "{phone_href}", "{site.phone}" } }
                    }
                    if !site.email.is_empty() {
                        dt { {t!("contact-info-email")} }
                        dd { a { href: "mailto:{site.email}", "{site.email}" } }
                    }
                }
            }
            div { class: "contact-card",
                h2 { class: "section-title", {t!("contact-location-title")} }
                p { {t!("contact-location-description")} }
            }
        }
    }
}
