use crate::i18n::Lang;
use dioxus::prelude::*;
use dioxus_i18n::t;

#[component]
pub fn NotFound(lang: Lang) -> Element {
    rsx! {
        section { class: "not-found",
            h1 { class: "page-title", {t!("not-found-title")} }
            p { {t!("not-found-text")} }
            Link { class: "btn btn-ghost", to: lang.href("/"), {t!("not-found-home")} }
        }
    }
}
