mod about_slider;
mod contact;
mod embraced_by_sea;
mod footer;
mod fusion_cuisine;
mod header;
mod hero_slider;
mod home;
mod not_found;
mod privacy;
mod suite_gallery;
mod suite_page;

pub use about_slider::AboutSlider;
pub use contact::ContactPage;
pub use embraced_by_sea::EmbracedBySea;
pub use footer::Footer;
pub use fusion_cuisine::FusionCuisine;
pub use header::Header;
pub use hero_slider::HeroSlider;
pub use home::{HomePage, SuitesOverview};
pub use not_found::NotFound;
pub use privacy::PrivacyPage;
pub use suite_gallery::SuiteGallery;
pub use suite_page::SuitePage;

use crate::i18n::{use_lang, Lang};
use crate::models::{ImageOptions, ResponsiveImage};
use crate::services::catalog;
use dioxus::prelude::*;
use dioxus_gallery::{GalleryItem, LightboxLabels};
use dioxus_i18n::t;

/// Resolves `path` through the image catalog, falling back to a bare `src`
pub(crate) fn resolve_image(path: &str, widths: &[u32], sizes: &str, priority: bool) -> ResponsiveImage {
    let options = ImageOptions::new(widths, sizes).with_priority(priority);
    catalog().responsive_or_placeholder(path, &options)
}

/// Lightbox items for a list of image paths, all sharing one alt text prefix
pub(crate) fn gallery_items(paths: &[&str], widths: &[u32], alt: &str) -> Vec<GalleryItem> {
    paths
        .iter()
        .enumerate()
        .map(|(i, path)| {
            resolve_image(path, widths, "100vw", false)
                .to_gallery_item(path, format!("{} {}", alt, i + 1))
        })
        .collect()
}

/// Lightbox strings in the active language
pub(crate) fn lightbox_labels() -> LightboxLabels {
    LightboxLabels {
        close: t!("lightbox-close"),
        close_title: t!("lightbox-close-title"),
        zoom_in: t!("lightbox-zoom-in"),
        zoom_out: t!("lightbox-zoom-out"),
        previous: t!("lightbox-previous"),
        next: t!("lightbox-next"),
        thumbnail: t!("lightbox-thumbnail"),
        image_alt: t!("lightbox-image-alt"),
    }
}

/// `<img>` with the catalog's responsive attributes
#[component]
pub fn ResponsiveImg(
    image: ResponsiveImage,
    alt: String,
    #[props(default)] class: String,
    #[props(default)] style: String,
) -> Element {
    let width = (image.width > 0).then(|| image.width.to_string());
    let height = (image.height > 0).then(|| image.height.to_string());

    rsx! {
        img {
            class: "{class}",
            style: "{style}",
            src: "{image.src}",
            srcset: image.srcset.clone(),
            sizes: image.sizes.clone(),
            width,
            height,
            alt: "{alt}",
            loading: image.loading.as_str(),
            decoding: image.decoding.as_str(),
            "fetchpriority": image.fetch_priority.as_str(),
        }
    }
}

/// Header, page body and footer in the given language
#[component]
pub fn PageShell(lang: Lang, children: Element) -> Element {
    use_lang(lang);

    rsx! {
        div { class: "page", lang: lang.code(),
            Header { lang }
            main { class: "page-main", {children} }
            Footer { lang }
        }
    }
}
