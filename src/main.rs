use dioxus::prelude::*;
use dioxus_i18n::prelude::use_init_i18n;

mod components;
mod config;
mod content;
mod error;
mod i18n;
mod models;
mod services;
mod slug;

use components::{ContactPage, HomePage, PageShell, PrivacyPage, SuitePage};
use i18n::Lang;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    dioxus::launch(App);
}

/// Site routes; every page exists once per language
#[derive(Routable, Clone, PartialEq, Debug)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/es")]
    HomeEs {},
    #[route("/suites/:slug")]
    SuiteEn { slug: String },
    #[route("/es/suites/:slug")]
    SuiteEs { slug: String },
    #[route("/contact")]
    Contact {},
    #[route("/es/contact")]
    ContactEs {},
    #[route("/privacy")]
    Privacy {},
    #[route("/es/privacy")]
    PrivacyEs {},
    #[route("/:..segments")]
    PageNotFound { segments: Vec<String> },
}

impl Route {
    pub fn lang(&self) -> Lang {
        match self {
            Route::HomeEs {} | Route::SuiteEs { .. } | Route::ContactEs {} | Route::PrivacyEs {} => {
                Lang::Es
            }
            Route::PageNotFound { segments } => {
                if segments.first().map(String::as_str) == Some("es") {
                    Lang::Es
                } else {
                    Lang::En
                }
            }
            _ => Lang::En,
        }
    }

    /// Pages whose sections the header can scroll to
    pub fn is_home(&self) -> bool {
        matches!(self, Route::Home {} | Route::HomeEs {})
    }
}

#[component]
fn App() -> Element {
    use_init_i18n(i18n::init_i18n);

    use_hook(|| {
        let catalog = services::catalog();
        log::info!("{} ready with {} images", config::config().site.name, catalog.len());
    });

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Router::<Route> {}
    }
}

#[component]
fn Home() -> Element {
    rsx! {
        PageShell { lang: Lang::En, HomePage { lang: Lang::En } }
    }
}

#[component]
fn HomeEs() -> Element {
    rsx! {
        PageShell { lang: Lang::Es, HomePage { lang: Lang::Es } }
    }
}

#[component]
fn SuiteEn(slug: String) -> Element {
    rsx! {
        PageShell { lang: Lang::En, SuitePage { lang: Lang::En, slug } }
    }
}

#[component]
fn SuiteEs(slug: String) -> Element {
    rsx! {
        PageShell { lang: Lang::Es, SuitePage { lang: Lang::Es, slug } }
    }
}

#[component]
fn Contact() -> Element {
    rsx! {
        PageShell { lang: Lang::En, ContactPage {} }
    }
}

#[component]
fn ContactEs() -> Element {
    rsx! {
        PageShell { lang: Lang::Es, ContactPage {} }
    }
}

#[component]
fn Privacy() -> Element {
    rsx! {
        PageShell { lang: Lang::En, PrivacyPage {} }
    }
}

#[component]
fn PrivacyEs() -> Element {
    rsx! {
        PageShell { lang: Lang::Es, PrivacyPage {} }
    }
}

#[component]
fn PageNotFound(segments: Vec<String>) -> Element {
    let lang = Route::PageNotFound { segments: segments.clone() }.lang();
    log::warn!("no route for /{}", segments.join("/"));

    rsx! {
        PageShell { lang, components::NotFound { lang } }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_routes_parse_per_language() {
        assert_eq!(Route::from_str("/").unwrap(), Route::Home {});
        assert_eq!(Route::from_str("/es").unwrap(), Route::HomeEs {});
        assert_eq!(
            Route::from_str("/es/suites/romance").unwrap(),
            Route::SuiteEs { slug: "romance".to_string() }
        );
        assert_eq!(Route::from_str("/contact").unwrap(), Route::Contact {});
    }

    #[test]
    fn test_suite_slug_is_decoded_once() {
        let route = Route::from_str("/suites/inspiraci%C3%B3n").unwrap();
        assert_eq!(route, Route::SuiteEn { slug: "inspiración".to_string() });
        if let Route::SuiteEn { slug } = route {
            assert_eq!(content::find_suite(&slug).unwrap().room_code, "SNI");
        }
    }

    #[test]
    fn test_route_language() {
        assert_eq!(Route::PrivacyEs {}.lang(), Lang::Es);
        assert_eq!(Route::SuiteEn { slug: "romance".to_string() }.lang(), Lang::En);
        let missing = Route::PageNotFound {
            segments: vec!["es".to_string(), "nada".to_string()],
        };
        assert_eq!(missing.lang(), Lang::Es);
    }

    #[test]
    fn test_language_switch_lands_on_a_route() {
        for path in ["/", "/contact", "/privacy", "/suites/romance"] {
            let spanish = Lang::switch_path(path);
            let route = Route::from_str(&spanish).unwrap();
            assert_eq!(route.lang(), Lang::Es, "{}", spanish);
            assert_eq!(Lang::switch_path(&spanish), path);
        }
    }

    #[test]
    fn test_only_home_routes_scroll_to_sections() {
        assert!(Route::Home {}.is_home());
        assert!(Route::HomeEs {}.is_home());
        assert!(!Route::Contact {}.is_home());
    }
}
