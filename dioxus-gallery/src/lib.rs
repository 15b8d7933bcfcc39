//! # Dioxus Gallery
//!
//! Reusable image presentation pieces for Dioxus sites:
//! - a full-screen lightbox with stepped zoom (1× to 4×), drag-to-pan,
//!   keyboard, wheel and thumbnail navigation
//! - slide rotation with pause-on-hover and reduced-motion deference
//! - an endlessly scrolling marquee strip
//! - header helpers (hide on scroll down, hover menus with a close delay)
//!
//! The state types (`LightboxState`, `SlideCycle`, `Marquee`, `ScrollVisibility`,
//! `HoverMenu`) are plain Rust and carry all the interaction rules; the
//! components only translate DOM events into calls on them.
//!
//! ## Example Usage
//!
//! ```rust,ignore
//! use dioxus_gallery::{GalleryItem, Lightbox, LightboxState};
//!
//! let mut viewer = use_signal(|| LightboxState::new(items.len(), 2.5));
//! viewer.write().open(3);
//! ```

pub mod carousel;
pub mod components;
pub mod header;
pub mod platform;
pub mod viewer;

pub use carousel::{Autoplay, AutoplayTimer, Marquee, SlideCycle};
pub use components::{GalleryItem, Lightbox, LightboxLabels, SlideDots, ThumbnailStrip, ZoomBar};
pub use header::{CloseTicket, HoverMenu, ScrollVisibility};
pub use platform::{
    scroll_to_anchor, sleep, use_reduced_motion, use_window_keydown, use_window_scroll,
    LIGHTBOX_OPEN_ATTR,
};
pub use viewer::{LightboxKey, LightboxState, Phase, Point, Zoom, MAX_ZOOM, MIN_ZOOM, ZOOM_STEP};
