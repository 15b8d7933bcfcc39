use crate::i18n::Lang;

/// Target of a header link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTarget {
    /// Section of the home page, by element id
    Section(&'static str),
    Contact,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    /// Translation key of the label
    pub label_key: &'static str,
    pub target: NavTarget,
    pub has_mega_menu: bool,
}

impl NavLink {
    pub fn href(&self, lang: Lang) -> String {
        match self.target {
            NavTarget::Section(id) => lang.href(&format!("/#{}", id)),
            NavTarget::Contact => lang.href("/contact"),
        }
    }

    /// Element id for links that scroll within the home page
    pub fn anchor(&self) -> Option<&'static str> {
        match self.target {
            NavTarget::Section(id) => Some(id),
            NavTarget::Contact => None,
        }
    }
}
