use dioxus::prelude::*;
use dioxus_i18n::prelude::*;
use serde::{Deserialize, Serialize};
use std::cell::Cell;
use std::rc::Rc;
use unic_langid::{langid, LanguageIdentifier};

/// Site languages; the URL path prefix selects one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    #[default]
    En,
    Es,
}

impl Lang {
    /// Language of a URL path: `/es` and `/es/...` are Spanish, everything else English
    pub fn from_path(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        match path.trim_start_matches('/').split('/').next() {
            Some("es") => Lang::Es,
            _ => Lang::En,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Es => "es",
        }
    }

    /// Name of the language in itself
    pub fn label(self) -> &'static str {
        match self {
            Lang::En => "English",
            Lang::Es => "Español",
        }
    }

    pub fn langid(self) -> LanguageIdentifier {
        match self {
            Lang::En => langid!("en-US"),
            Lang::Es => langid!("es-MX"),
        }
    }

    /// Locale parameter understood by the reservation engine
    pub fn booking_locale(self) -> &'static str {
        match self {
            Lang::En => "en-US",
            Lang::Es => "es-MX",
        }
    }

    pub fn prefix(self) -> &'static str {
        match self {
            Lang::En => "",
            Lang::Es => "/es",
        }
    }

    pub fn other(self) -> Self {
        match self {
            Lang::En => Lang::Es,
            Lang::Es => Lang::En,
        }
    }

    /// Prefixes an English site path (`/`, `/contact`, `/#suites`) for this language
    pub fn href(self, path: &str) -> String {
        match self {
            Lang::En if path.is_empty() => "/".to_string(),
            Lang::En => path.to_string(),
            Lang::Es if path.is_empty() || path == "/" => "/es".to_string(),
            Lang::Es if path.starts_with("/#") => format!("/es{}", &path[1..]),
            Lang::Es => format!("/es{}", path),
        }
    }

    /// Same page in the other language
    pub fn switch_path(current_path: &str) -> String {
        match Lang::from_path(current_path) {
            Lang::En => Lang::Es.href(current_path),
            Lang::Es => {
                let rest = current_path.strip_prefix("/es").unwrap_or(current_path);
                if rest.is_empty() {
                    "/".to_string()
                } else if rest.starts_with('#') || rest.starts_with('?') {
                    format!("/{}", rest)
                } else {
                    rest.to_string()
                }
            }
        }
    }
}

/// Initialize i18n configuration with English as default and fallback language
pub fn init_i18n() -> I18nConfig {
    I18nConfig::new(langid!("en-US"))
        .with_locale(Locale::new_static(
            langid!("en-US"),
            include_str!("../locales/en-US.ftl"),
        ))
        .with_locale(Locale::new_static(
            langid!("es-MX"),
            include_str!("../locales/es-MX.ftl"),
        ))
        .with_fallback(langid!("en-US"))
}

/// Language last handed to the translator by one page shell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ActiveLang(Option<Lang>);

impl ActiveLang {
    /// Records `lang`; true when the translator has to switch
    pub fn apply(&mut self, lang: Lang) -> bool {
        if self.0 == Some(lang) {
            return false;
        }
        self.0 = Some(lang);
        true
    }
}

/// Makes `lang` the active translation language for the current page
///
/// Runs in the caller's body, before its children render, so the first
/// frame of a Spanish page is already Spanish.
pub fn use_lang(lang: Lang) {
    let active = use_hook(|| Rc::new(Cell::new(ActiveLang::default())));
    let mut current = active.get();
    if current.apply(lang) {
        active.set(current);
        i18n().set_language(lang.langid());
        log::debug!("active language: {}", lang.code());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn message_ids(ftl: &str) -> BTreeSet<String> {
        ftl.lines()
            .filter(|line| !line.starts_with([' ', '#', '\t']) && !line.trim().is_empty())
            .filter_map(|line| line.split_once('='))
            .map(|(id, _)| id.trim().to_string())
            .collect()
    }

    #[test]
    fn test_lang_from_path() {
        assert_eq!(Lang::from_path("/"), Lang::En);
        assert_eq!(Lang::from_path("/es"), Lang::Es);
        assert_eq!(Lang::from_path("/es/suites/romance"), Lang::Es);
        assert_eq!(Lang::from_path("/es#suites"), Lang::Es);
        assert_eq!(Lang::from_path("/estate"), Lang::En);
        assert_eq!(Lang::from_path("/contact"), Lang::En);
    }

    #[test]
    fn test_href() {
        assert_eq!(Lang::En.href("/#suites"), "/#suites");
        assert_eq!(Lang::Es.href("/#suites"), "/es#suites");
        assert_eq!(Lang::Es.href("/"), "/es");
        assert_eq!(Lang::Es.href("/contact"), "/es/contact");
    }

    #[test]
    fn test_switch_path() {
        assert_eq!(Lang::switch_path("/"), "/es");
        assert_eq!(Lang::switch_path("/suites/romance"), "/es/suites/romance");
        assert_eq!(Lang::switch_path("/es"), "/");
        assert_eq!(Lang::switch_path("/es/contact"), "/contact");
        assert_eq!(Lang::switch_path("/es#suites"), "/#suites");
    }

    #[test]
    fn test_locales() {
        assert_eq!(Lang::Es.booking_locale(), "es-MX");
        assert_eq!(Lang::En.langid(), langid!("en-US"));
        assert_eq!(Lang::Es.other(), Lang::En);
        assert_eq!(Lang::Es.label(), "Español");
        assert_eq!(Lang::En.label(), "English");
    }

    #[test]
    fn test_active_lang_switches_once() {
        let mut active = ActiveLang::default();
        assert!(active.apply(Lang::Es));
        assert!(!active.apply(Lang::Es));
        assert!(active.apply(Lang::En));
        assert!(!active.apply(Lang::En));
    }

    fn rust_sources(dir: &std::path::Path, out: &mut String) {
        for entry in std::fs::read_dir(dir).unwrap() {
            let path = entry.unwrap().path();
            if path.is_dir() {
                rust_sources(&path, out);
            } else if path.extension().is_some_and(|ext| ext == "rs") {
                out.push_str(&std::fs::read_to_string(&path).unwrap());
            }
        }
    }

    #[test]
    fn test_every_message_is_looked_up() {
        let mut sources = String::new();
        rust_sources(&std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("src"), &mut sources);
        let unused: Vec<_> = message_ids(include_str!("../locales/en-US.ftl"))
            .into_iter()
            .filter(|id| !sources.contains(&format!("\"{}\"", id)))
            .collect();
        assert!(unused.is_empty(), "messages never looked up: {:?}", unused);
    }

    #[test]
    fn test_dictionaries_define_same_keys() {
        let en = message_ids(include_str!("../locales/en-US.ftl"));
        let es = message_ids(include_str!("../locales/es-MX.ftl"));
        assert!(en.len() > 50);
        let only_en: Vec<_> = en.difference(&es).collect();
        let only_es: Vec<_> = es.difference(&en).collect();
        assert!(only_en.is_empty(), "missing in es-MX: {:?}", only_en);
        assert!(only_es.is_empty(), "missing in en-US: {:?}", only_es);
    }
}
