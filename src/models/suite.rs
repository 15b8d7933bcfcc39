use crate::slug::slugify;
use serde::Serialize;

/// One captioned close-up of a suite
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct SuiteDetail {
    pub label: &'static str,
    pub copy: &'static str,
    pub image: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Suite {
    pub title: &'static str,
    /// Overrides `title` in headings when set
    pub display_title: Option<&'static str>,
    pub tagline: &'static str,
    pub description: &'static str,
    pub size: &'static str,
    pub guests: u32,
    pub bed: &'static str,
    pub view: &'static str,
    pub rate: &'static str,
    /// Struck-through rate shown next to a promotional `rate`
    pub rate_original: Option<&'static str>,
    /// Room code of the reservation engine
    pub room_code: &'static str,
    pub hero_image: &'static str,
    pub highlights: &'static [&'static str],
    pub details: &'static [SuiteDetail],
    pub gallery: &'static [&'static str],
    pub amenities: &'static [&'static str],
}

impl Suite {
    pub fn slug(&self) -> String {
        slugify(self.title)
    }

    pub fn heading(&self) -> &'static str {
        self.display_title.unwrap_or(self.title)
    }

    /// Every image the suite page and menus may show, hero first, without duplicates
    pub fn image_paths(&self) -> Vec<&'static str> {
        let mut paths = vec![self.hero_image];
        let rest = self
            .details
            .iter()
            .map(|d| d.image)
            .chain(self.gallery.iter().copied());
        for path in rest {
            if !paths.contains(&path) {
                paths.push(path);
            }
        }
        paths
    }
}

/// Mega-menu card for a suite
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderSuite {
    pub title: &'static str,
    pub slug_source: &'static str,
    pub image: &'static str,
    pub size: &'static str,
    pub guests: u32,
}

impl From<&Suite> for HeaderSuite {
    fn from(suite: &Suite) -> Self {
        Self {
            title: suite.heading(),
            slug_source: suite.title,
            image: suite.hero_image,
            size: suite.size,
            guests: suite.guests,
        }
    }
}

impl HeaderSuite {
    pub fn slug(&self) -> String {
        slugify(self.slug_source)
    }
}
