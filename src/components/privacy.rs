use dioxus::prelude::*;
use dioxus_i18n::t;

#[component]
pub fn PrivacyPage() -> Element {
    rsx! {
        article { class: "legal",
            h1 { class: "page-title", {t!("privacy-title")} }
            p { {t!("privacy-intro")} }
            p { {t!("privacy-data")} }
            p { {t!("privacy-contact")} }
        }
    }
}
