//! Responsive image map.
//!
//! Variants are produced outside this repository. The manifest only records each
//! logical path with the intrinsic size of its source; variant URLs follow the
//! `<stem>-<width>w.<ext>` convention of the image pipeline.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::error::AppError;
use crate::models::{Decoding, FetchPriority, ImageOptions, ImageSource, Loading, ResponsiveImage};

const MANIFEST: &str = include_str!("../../assets/images/manifest.json");

#[derive(Debug, Clone, Default)]
pub struct ImageCatalog {
    sources: HashMap<String, ImageSource>,
}

impl ImageCatalog {
    pub fn from_json(json: &str) -> Result<Self, AppError> {
        let entries: Vec<ImageSource> = serde_json::from_str(json)?;
        Ok(Self::from_sources(entries))
    }

    pub fn from_sources(entries: impl IntoIterator<Item = ImageSource>) -> Self {
        let sources = entries
            .into_iter()
            .map(|entry| (entry.path.clone(), entry))
            .collect();
        Self { sources }
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    pub fn metadata(&self, path: &str) -> Result<&ImageSource, AppError> {
        self.sources
            .get(path)
            .ok_or_else(|| AppError::MissingImage(path.to_string()))
    }

    /// Build the `<img>` attributes for `path`
    pub fn responsive(&self, path: &str, options: &ImageOptions) -> Result<ResponsiveImage, AppError> {
        let source = self.metadata(path)?;

        let mut widths: Vec<u32> = options
            .widths
            .iter()
            .copied()
            .filter(|w| *w > 0 && *w <= source.width)
            .collect();
        widths.push(source.width);
        widths.sort_unstable();
        widths.dedup();

        let srcset = widths
            .iter()
            .map(|w| format!("{} {}w", variant_url(path, *w), w))
            .collect::<Vec<_>>()
            .join(", ");

        let (loading, decoding, fetch_priority) = if options.priority {
            (Loading::Eager, Decoding::Sync, FetchPriority::High)
        } else {
            (Loading::Lazy, Decoding::Async, FetchPriority::Auto)
        };

        Ok(ResponsiveImage {
            src: path.to_string(),
            srcset: Some(srcset),
            sizes: options.sizes.clone(),
            width: source.width,
            height: source.height,
            loading,
            decoding,
            fetch_priority,
        })
    }

    /// Like [`responsive`](Self::responsive), but logs and degrades to a plain `src`
    pub fn responsive_or_placeholder(&self, path: &str, options: &ImageOptions) -> ResponsiveImage {
        match self.responsive(path, options) {
            Ok(image) => image,
            Err(e) => {
                log::error!("{}", e);
                ResponsiveImage::placeholder(path)
            }
        }
    }

    /// Every path in `paths` that the manifest does not know
    pub fn check_paths<'a>(&self, paths: impl IntoIterator<Item = &'a str>) -> Vec<&'a str> {
        paths
            .into_iter()
            .filter(|path| !self.sources.contains_key(*path))
            .collect()
    }
}

/// `/images/a/b.webp` at 800px → `/images/a/b-800w.webp`
pub fn variant_url(path: &str, width: u32) -> String {
    let file_start = path.rfind('/').map(|i| i + 1).unwrap_or(0);
    match path[file_start..].rfind('.') {
        Some(dot) => {
            let dot = file_start + dot;
            format!("{}-{}w{}", &path[..dot], width, &path[dot..])
        }
        None => format!("{}-{}w", path, width),
    }
}

/// Catalog built from the embedded manifest, checked once against the content tables
pub fn catalog() -> &'static ImageCatalog {
    static CATALOG: OnceLock<ImageCatalog> = OnceLock::new();
    CATALOG.get_or_init(|| {
        let catalog = match ImageCatalog::from_json(MANIFEST) {
            Ok(catalog) => catalog,
            Err(e) => {
                log::error!("Failed to load image manifest: {}", e);
                ImageCatalog::default()
            }
        };
        let paths = crate::content::all_image_paths();
        for missing in catalog.check_paths(paths.iter().copied()) {
            log::warn!("Image not in manifest: {}", missing);
        }
        log::debug!("Image catalog loaded with {} entries", catalog.len());
        catalog
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ImageCatalog {
        ImageCatalog::from_sources(vec![ImageSource {
            path: "/images/suites/roma/1.webp".to_string(),
            width: 1200,
            height: 800,
        }])
    }

    #[test]
    fn test_variant_url() {
        assert_eq!(
            variant_url("/images/suites/roma/1.webp", 640),
            "/images/suites/roma/1-640w.webp"
        );
        assert_eq!(variant_url("/images/v1.2/photo", 320), "/images/v1.2/photo-320w");
    }

    #[test]
    fn test_metadata_missing_path() {
        let catalog = sample();
        assert_eq!(catalog.metadata("/images/suites/roma/1.webp").unwrap().width, 1200);
        match catalog.metadata("/images/nope.webp") {
            Err(AppError::MissingImage(path)) => assert_eq!(path, "/images/nope.webp"),
            other => panic!("expected MissingImage, got {:?}", other),
        }
    }

    #[test]
    fn test_srcset_skips_widths_above_intrinsic() {
        let catalog = sample();
        let options = ImageOptions::new(&[480, 960, 1600], "100vw");
        let image = catalog.responsive("/images/suites/roma/1.webp", &options).unwrap();

        assert_eq!(
            image.srcset.as_deref(),
            Some(
                "/images/suites/roma/1-480w.webp 480w, \
                 /images/suites/roma/1-960w.webp 960w, \
                 /images/suites/roma/1-1200w.webp 1200w"
            )
        );
        assert_eq!(image.sizes.as_deref(), Some("100vw"));
        assert_eq!((image.width, image.height), (1200, 800));
    }

    #[test]
    fn test_priority_hints() {
        let catalog = sample();
        let path = "/images/suites/roma/1.webp";

        let lazy = catalog.responsive(path, &ImageOptions::new(&[640], "50vw")).unwrap();
        assert_eq!(lazy.loading, Loading::Lazy);
        assert_eq!(lazy.decoding, Decoding::Async);
        assert_eq!(lazy.fetch_priority, FetchPriority::Auto);

        let hero = catalog
            .responsive(path, &ImageOptions::new(&[640], "100vw").with_priority(true))
            .unwrap();
        assert_eq!(hero.loading, Loading::Eager);
        assert_eq!(hero.decoding, Decoding::Sync);
        assert_eq!(hero.fetch_priority, FetchPriority::High);
    }

    #[test]
    fn test_placeholder_for_missing_image() {
        let image = sample().responsive_or_placeholder("/images/gone.webp", &ImageOptions::default());
        assert_eq!(image.src, "/images/gone.webp");
        assert!(image.srcset.is_none());
    }

    #[test]
    fn test_invalid_manifest() {
        assert!(matches!(
            ImageCatalog::from_json("{not json"),
            Err(AppError::Manifest(_))
        ));
    }

    #[test]
    fn test_every_content_image_is_in_manifest() {
        let catalog = ImageCatalog::from_json(MANIFEST).unwrap();
        let paths = crate::content::all_image_paths();
        let missing = catalog.check_paths(paths.iter().copied());
        assert!(missing.is_empty(), "missing from manifest: {:?}", missing);
        assert_eq!(catalog.len(), paths.len());
    }
}
