//! Hand-authored site content: suites, slides, dishes and navigation

pub mod sections;
pub mod suites;

use crate::models::{HeaderSuite, NavLink, NavTarget, Suite};

pub use sections::{ABOUT_IMAGES, DISHES, HERO_SLIDES, SEA_FEATURES};
pub use suites::SUITES;

/// Section ids of the home page
pub const SECTION_HOME: &str = "home";
pub const SECTION_SUITES: &str = "suites";
pub const SECTION_PALAPA: &str = "palapa-beach-lounge";
pub const SECTION_KITCHEN: &str = "local-kitchen";

pub static NAV_LINKS: [NavLink; 5] = [
    NavLink {
        label_key: "nav-home",
        target: NavTarget::Section(SECTION_HOME),
        has_mega_menu: false,
    },
    NavLink {
        label_key: "nav-suites",
        target: NavTarget::Section(SECTION_SUITES),
        has_mega_menu: true,
    },
    NavLink {
        label_key: "nav-palapa",
        target: NavTarget::Section(SECTION_PALAPA),
        has_mega_menu: false,
    },
    NavLink {
        label_key: "nav-meal-plans",
        target: NavTarget::Section(SECTION_KITCHEN),
        has_mega_menu: false,
    },
    NavLink {
        label_key: "nav-contact",
        target: NavTarget::Contact,
        has_mega_menu: false,
    },
];

/// Suite whose title slugifies to `slug`
///
/// Route segments arrive already percent-decoded by the router.
pub fn find_suite(slug: &str) -> Option<&'static Suite> {
    SUITES.iter().find(|suite| suite.slug() == slug)
}

/// Mega-menu cards, in suite order
pub fn header_suites() -> Vec<HeaderSuite> {
    SUITES.iter().map(HeaderSuite::from).collect()
}

/// Every image path referenced by any content table
pub fn all_image_paths() -> Vec<&'static str> {
    let mut paths: Vec<&'static str> = Vec::new();
    paths.extend(HERO_SLIDES.iter().map(|s| s.image));
    paths.extend(ABOUT_IMAGES.iter().copied());
    paths.extend(SEA_FEATURES.iter().map(|f| f.image));
    paths.extend(DISHES.iter().map(|d| d.image));
    for suite in SUITES.iter() {
        paths.extend(suite.image_paths());
    }
    paths.sort_unstable();
    paths.dedup();
    paths
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_suite_by_slug() {
        for suite in SUITES.iter() {
            let found = find_suite(&suite.slug()).unwrap();
            assert_eq!(found.title, suite.title);
        }
        assert_eq!(find_suite("crepúsculo").unwrap().room_code, "CRE");
        assert_eq!(find_suite("inspiración").unwrap().room_code, "SNI");
        assert!(find_suite("inspiraci%C3%B3n").is_none());
        assert!(find_suite("penthouse").is_none());
    }

    #[test]
    fn test_suite_slugs_unique() {
        let mut slugs: Vec<String> = SUITES.iter().map(|s| s.slug()).collect();
        slugs.sort();
        slugs.dedup();
        assert_eq!(slugs.len(), SUITES.len());
    }

    #[test]
    fn test_header_suites_follow_suite_table() {
        let cards = header_suites();
        assert_eq!(cards.len(), 4);
        assert_eq!(cards[0].title, "Inspiración");
        assert_eq!(cards[3].image, "/images/suites/Talis/1.webp");
        assert_eq!(cards[1].size, "165 m² / 1,775 ft²");
    }

    #[test]
    fn test_only_suites_link_has_mega_menu() {
        let with_menu: Vec<_> = NAV_LINKS.iter().filter(|l| l.has_mega_menu).collect();
        assert_eq!(with_menu.len(), 1);
        assert_eq!(with_menu[0].label_key, "nav-suites");
    }

    #[test]
    fn test_all_image_paths() {
        let paths = all_image_paths();
        assert!(paths.contains(&"/images/suites/Insp/9.webp"));
        assert!(paths.contains(&DISHES[7].image));
        assert_eq!(paths.len(), 6 + 10 + 4 + 8 + 9 + 6 + 6 + 5);
    }
}
