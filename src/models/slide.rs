use crate::i18n::Lang;
use serde::Serialize;

/// Hero slide; title, caption and alt are translation keys
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Slide {
    pub image: &'static str,
    pub title_key: &'static str,
    pub caption_key: &'static str,
    pub alt_key: &'static str,
}

/// Text kept in the content table in both site languages
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Localized {
    pub en: &'static str,
    pub es: &'static str,
}

impl Localized {
    pub fn get(&self, lang: Lang) -> &'static str {
        match lang {
            Lang::En => self.en,
            Lang::Es if self.es.is_empty() => self.en,
            Lang::Es => self.es,
        }
    }
}

/// Cuisine strip entry
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Dish {
    pub name: Localized,
    pub image: &'static str,
}

/// Beach lounge grid tile
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Feature {
    pub image: &'static str,
    pub title: Option<Localized>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_localized_falls_back_to_english() {
        let text = Localized {
            en: "Sunset Dinner",
            es: "",
        };
        assert_eq!(text.get(Lang::Es), "Sunset Dinner");

        let text = Localized {
            en: "Beach Dining",
            es: "Cena junto a la playa",
        };
        assert_eq!(text.get(Lang::Es), "Cena junto a la playa");
        assert_eq!(text.get(Lang::En), "Beach Dining");
    }
}
