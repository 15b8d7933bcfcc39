use dioxus_gallery::GalleryItem;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Loading {
    Lazy,
    Eager,
}

impl Loading {
    pub fn as_str(&self) -> &'static str {
        match self {
            Loading::Lazy => "lazy",
            Loading::Eager => "eager",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Decoding {
    Async,
    Sync,
}

impl Decoding {
    pub fn as_str(&self) -> &'static str {
        match self {
            Decoding::Async => "async",
            Decoding::Sync => "sync",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FetchPriority {
    Auto,
    High,
    Low,
}

impl FetchPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            FetchPriority::Auto => "auto",
            FetchPriority::High => "high",
            FetchPriority::Low => "low",
        }
    }
}

/// Manifest entry: a logical image path and the intrinsic size of its source
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ImageSource {
    pub path: String,
    pub width: u32,
    pub height: u32,
}

/// What a component asks for when resolving an image
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ImageOptions {
    /// Candidate variant widths in pixels
    pub widths: Vec<u32>,
    /// `sizes` attribute
    pub sizes: Option<String>,
    /// Above-the-fold image: load eagerly with high fetch priority
    pub priority: bool,
}

impl ImageOptions {
    pub fn new(widths: &[u32], sizes: &str) -> Self {
        Self {
            widths: widths.to_vec(),
            sizes: Some(sizes.to_string()),
            priority: false,
        }
    }

    pub fn with_priority(mut self, priority: bool) -> Self {
        self.priority = priority;
        self
    }
}

/// Attributes for one `<img>`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResponsiveImage {
    pub src: String,
    pub srcset: Option<String>,
    pub sizes: Option<String>,
    pub width: u32,
    pub height: u32,
    pub loading: Loading,
    pub decoding: Decoding,
    pub fetch_priority: FetchPriority,
}

impl ResponsiveImage {
    /// Gallery item for the lightbox and thumbnail strip
    pub fn to_gallery_item(&self, key: &str, alt: impl Into<String>) -> GalleryItem {
        GalleryItem {
            key: key.to_string(),
            src: self.src.clone(),
            srcset: self.srcset.clone(),
            sizes: self.sizes.clone(),
            width: Some(self.width),
            height: Some(self.height),
            alt: alt.into(),
            loading: Some(self.loading.as_str().to_string()),
            decoding: Some(self.decoding.as_str().to_string()),
        }
    }

    /// Stand-in used when an image is missing from the manifest
    pub fn placeholder(path: &str) -> Self {
        Self {
            src: path.to_string(),
            srcset: None,
            sizes: None,
            width: 0,
            height: 0,
            loading: Loading::Lazy,
            decoding: Decoding::Async,
            fetch_priority: FetchPriority::Low,
        }
    }
}
