use crate::config::config;
use crate::content::NAV_LINKS;
use crate::i18n::Lang;
use chrono::Datelike;
use dioxus::prelude::*;
use dioxus_i18n::t;

#[component]
pub fn Footer(lang: Lang) -> Element {
    let site = &config().site;
    let year = chrono::Local::now().year();

    rsx! {
        footer { class: "site-footer",
            div { class: "footer-brand",
                p { class: "footer-name", "{site.name}" }
                p { class: "footer-tagline", {t!("footer-tagline")} }
                p { class: "footer-address", "{site.address}" }
            }
            nav { class: "footer-nav",
                for link in NAV_LINKS.iter() {
                    a { key: "{link.label_key}", href: link.href(lang), {t!(link.label_key)} }
                }
            }
            div { class: "footer-legal",
                span { "© {year} {site.name}. " {t!("footer-rights")} }
                Link { to: lang.href("/privacy"), {t!("footer-privacy")} }
            }
        }
    }
}
