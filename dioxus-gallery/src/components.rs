use crate::platform::use_window_keydown;
use crate::viewer::{LightboxKey, LightboxState, Phase, Point, Zoom};
use dioxus::prelude::*;

/// Represents a single image shown by the gallery components
#[derive(Clone, PartialEq, Debug, Default)]
pub struct GalleryItem {
    /// Unique key, usually the logical image path
    pub key: String,
    /// URL of the default variant
    pub src: String,
    /// `srcset` attribute, if variants exist
    pub srcset: Option<String>,
    /// `sizes` attribute
    pub sizes: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    /// Alternative text
    pub alt: String,
    /// `lazy` or `eager`
    pub loading: Option<String>,
    /// `async` or `sync`
    pub decoding: Option<String>,
}

impl GalleryItem {
    /// The item's own alt text, or `fallback` when it has none
    pub fn alt_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        if self.alt.trim().is_empty() {
            fallback
        } else {
            &self.alt
        }
    }

    /// Thumbnails load lazily unless the item says otherwise
    pub fn thumbnail_loading(&self) -> &str {
        self.loading.as_deref().unwrap_or("lazy")
    }
}

/// User-visible strings of the lightbox; callers pass them already translated
#[derive(Clone, PartialEq, Debug)]
pub struct LightboxLabels {
    pub close: String,
    pub close_title: String,
    pub zoom_in: String,
    pub zoom_out: String,
    pub previous: String,
    pub next: String,
    pub thumbnail: String,
    pub image_alt: String,
}

impl Default for LightboxLabels {
    fn default() -> Self {
        Self {
            close: "Close".to_string(),
            close_title: "Close (Esc)".to_string(),
            zoom_in: "Zoom in".to_string(),
            zoom_out: "Zoom out".to_string(),
            previous: "Previous".to_string(),
            next: "Next".to_string(),
            thumbnail: "Thumbnail".to_string(),
            image_alt: "Enlarged image".to_string(),
        }
    }
}

/// Full-screen viewer with zoom, pan, keyboard and thumbnail navigation
///
/// The parent owns the `LightboxState` signal and opens the viewer with
/// `state.write().open(index)`; the component renders nothing while closed.
///
/// # Example
/// ```rust,ignore
/// let mut viewer = use_signal(|| LightboxState::new(items.len(), 2.5));
/// rsx! {
///     img { onclick: move |_| { viewer.write().open(0); }, src: "{items[0].src}" }
///     Lightbox { items: items.clone(), state: viewer, labels: LightboxLabels::default() }
/// }
/// ```
#[component]
pub fn Lightbox(
    /// Images in navigation order
    items: Vec<GalleryItem>,
    /// Viewer state shared with the parent
    state: Signal<LightboxState>,
    #[props(default)] labels: LightboxLabels,
) -> Element {
    let mut state = state;
    let on_key = use_callback(move |name: String| {
        if state.peek().is_open() {
            state.write().handle_key(LightboxKey::from_key_name(&name));
        }
    });
    use_window_keydown(&LightboxKey::KEY_NAMES, on_key);

    let viewer = state.read().clone();
    let Some(index) = viewer.current() else {
        return rsx! {};
    };
    let Some(item) = items.get(index).cloned() else {
        return rsx! {};
    };

    let image_alt = item.alt_or(&labels.image_alt).to_string();
    let image_style = format!(
        "max-width: 90%; max-height: 90%; object-fit: contain; transition: transform 0.15s ease-out; transform-origin: center center; transform: {};",
        viewer.transform()
    );
    let stage_style = format!(
        "display: flex; align-items: center; justify-content: center; width: 100%; height: 100%; cursor: {};",
        viewer.cursor()
    );

    rsx! {
        div {
            class: "lightbox",
            style: "position: fixed; inset: 0; z-index: 1000; background: rgba(0, 0, 0, 0.95); display: flex; align-items: center; justify-content: center; overflow: hidden; outline: none;",
            tabindex: "0",
            role: "dialog",
            aria_modal: "true",
            "data-lightbox-open": "true",
            onmounted: move |evt: MountedEvent| async move {
                if let Err(e) = evt.set_focus(true).await {
                    log::debug!("lightbox focus failed: {:?}", e);
                }
            },
            onclick: move |_| state.write().close(),
            onwheel: move |evt: WheelEvent| {
                evt.prevent_default();
                let delta_y = evt.delta().strip_units().y;
                state.write().wheel(delta_y);
            },
            onmousemove: move |evt: MouseEvent| {
                if state.read().phase() == Phase::Dragging {
                    let p = evt.client_coordinates();
                    state.write().drag_to(Point::new(p.x, p.y));
                }
            },
            onmouseup: move |_| {
                if state.read().is_dragging() {
                    state.write().end_drag();
                }
            },
            onmouseleave: move |_| {
                if state.read().is_dragging() {
                    state.write().end_drag();
                }
            },

            // Close
            button {
                style: "position: absolute; top: 16px; right: 16px; z-index: 20; width: 52px; height: 52px; border-radius: 50%; border: none; background: white; color: black; font-size: 26px; font-weight: 700; cursor: pointer; box-shadow: 0 4px 12px rgba(0, 0, 0, 0.4);",
                aria_label: "{labels.close}",
                title: "{labels.close_title}",
                onclick: move |evt: MouseEvent| {
                    evt.stop_propagation();
                    state.write().close();
                },
                "✕"
            }

            ZoomBar {
                zoom: viewer.zoom(),
                zoom_in_label: labels.zoom_in.clone(),
                zoom_out_label: labels.zoom_out.clone(),
                on_zoom_in: move |_| state.write().zoom_in(),
                on_zoom_out: move |_| state.write().zoom_out(),
            }

            // Previous
            button {
                style: "position: absolute; left: 16px; top: 50%; transform: translateY(-50%); z-index: 10; width: 48px; height: 48px; border-radius: 50%; border: none; background: rgba(255, 255, 255, 0.1); color: white; font-size: 34px; cursor: pointer;",
                aria_label: "{labels.previous}",
                onclick: move |evt: MouseEvent| {
                    evt.stop_propagation();
                    state.write().prev();
                },
                "‹"
            }

            div { style: "{stage_style}",
                img {
                    key: "{item.key}",
                    src: "{item.src}",
                    srcset: item.srcset.clone(),
                    sizes: item.sizes.clone(),
                    width: item.width.map(|w| w.to_string()),
                    height: item.height.map(|h| h.to_string()),
                    alt: "{image_alt}",
                    decoding: item.decoding.clone().unwrap_or_else(|| "async".to_string()),
                    draggable: "false",
                    style: "{image_style}",
                    onclick: move |evt: MouseEvent| evt.stop_propagation(),
                    onmousedown: move |evt: MouseEvent| {
                        evt.prevent_default();
                        evt.stop_propagation();
                        let p = evt.client_coordinates();
                        state.write().begin_drag(Point::new(p.x, p.y));
                    },
                }
            }

            // Next
            button {
                style: "position: absolute; right: 96px; top: 50%; transform: translateY(-50%); z-index: 10; width: 48px; height: 48px; border-radius: 50%; border: none; background: rgba(255, 255, 255, 0.1); color: white; font-size: 34px; cursor: pointer;",
                aria_label: "{labels.next}",
                onclick: move |evt: MouseEvent| {
                    evt.stop_propagation();
                    state.write().next();
                },
                "›"
            }

            ThumbnailStrip {
                items: items.clone(),
                active: index,
                label: labels.thumbnail.clone(),
                on_select: move |i| state.write().select(i),
            }
        }
    }
}

/// Vertical zoom control with a fill bar and percentage
#[component]
pub fn ZoomBar(
    zoom: Zoom,
    zoom_in_label: String,
    zoom_out_label: String,
    on_zoom_in: EventHandler<()>,
    on_zoom_out: EventHandler<()>,
) -> Element {
    let fill = zoom.fill_percent();
    let button_style = "width: 40px; height: 40px; border-radius: 50%; border: none; background: rgba(255, 255, 255, 0.2); color: white; font-size: 20px; font-weight: 700; cursor: pointer;";

    rsx! {
        div {
            style: "position: absolute; right: 20px; top: 50%; transform: translateY(-50%); z-index: 10; display: flex; flex-direction: column; align-items: center; gap: 12px; padding: 12px; border-radius: 999px; background: rgba(255, 255, 255, 0.1);",
            onclick: move |evt: MouseEvent| evt.stop_propagation(),
            button {
                style: "{button_style}",
                aria_label: "{zoom_in_label}",
                disabled: zoom.is_max(),
                onclick: move |evt: MouseEvent| {
                    evt.stop_propagation();
                    on_zoom_in.call(());
                },
                "+"
            }
            div { style: "position: relative; width: 4px; height: 128px; border-radius: 999px; background: rgba(255, 255, 255, 0.2);",
                div { style: "position: absolute; bottom: 0; width: 100%; height: {fill}%; border-radius: 999px; background: white; transition: height 0.15s;" }
                div { style: "position: absolute; left: -6px; bottom: calc({fill}% - 8px); width: 16px; height: 16px; border-radius: 50%; background: white; transition: bottom 0.15s;" }
            }
            div { style: "padding: 4px 8px; border-radius: 4px; background: rgba(255, 255, 255, 0.2); color: white; font-size: 12px; font-weight: 600;",
                "{zoom.percent()}%"
            }
            button {
                style: "{button_style}",
                aria_label: "{zoom_out_label}",
                disabled: !zoom.is_magnified(),
                onclick: move |evt: MouseEvent| {
                    evt.stop_propagation();
                    on_zoom_out.call(());
                },
                "−"
            }
        }
    }
}

/// Row of thumbnails; the active one gets a white ring
#[component]
pub fn ThumbnailStrip(
    items: Vec<GalleryItem>,
    active: usize,
    /// Prefix for the alt text, followed by the 1-based position
    label: String,
    on_select: EventHandler<usize>,
) -> Element {
    rsx! {
        div {
            style: "position: absolute; bottom: 20px; left: 50%; transform: translateX(-50%); display: flex; gap: 8px; max-width: 90vw; overflow-x: auto;",
            for (index, item) in items.into_iter().enumerate() {
                div {
                    key: "{item.key}",
                    style: if index == active {
                        "flex-shrink: 0; width: 64px; height: 64px; border-radius: 4px; overflow: hidden; cursor: pointer; box-shadow: 0 0 0 2px white;"
                    } else {
                        "flex-shrink: 0; width: 64px; height: 64px; border-radius: 4px; overflow: hidden; cursor: pointer; opacity: 0.6;"
                    },
                    onclick: move |evt: MouseEvent| {
                        evt.stop_propagation();
                        on_select.call(index);
                    },
                    img {
                        src: "{item.src}",
                        srcset: item.srcset.clone(),
                        sizes: "64px",
                        alt: "{label} {index + 1}",
                        loading: item.thumbnail_loading().to_string(),
                        decoding: "async",
                        style: "width: 100%; height: 100%; object-fit: cover;",
                    }
                }
            }
        }
    }
}

/// Pagination dots of a slider
#[component]
pub fn SlideDots(
    count: usize,
    active: usize,
    /// Accessible label prefix, followed by the 1-based slide number
    label: String,
    on_select: EventHandler<usize>,
) -> Element {
    rsx! {
        div { style: "display: flex; align-items: center; gap: 8px;",
            for index in 0..count {
                button {
                    key: "{index}",
                    style: if index == active {
                        "height: 8px; width: 32px; border-radius: 999px; border: none; padding: 0; background: white; cursor: pointer; transition: all 0.3s;"
                    } else {
                        "height: 8px; width: 8px; border-radius: 999px; border: none; padding: 0; background: rgba(255, 255, 255, 0.5); cursor: pointer; transition: all 0.3s;"
                    },
                    aria_label: "{label} {index + 1}",
                    onclick: move |_| on_select.call(index),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alt_falls_back_to_label() {
        let mut item = GalleryItem {
            key: "/images/a.webp".to_string(),
            ..Default::default()
        };
        assert_eq!(item.alt_or("Enlarged image"), "Enlarged image");
        item.alt = "  ".to_string();
        assert_eq!(item.alt_or("Enlarged image"), "Enlarged image");
        item.alt = "Ocean view".to_string();
        assert_eq!(item.alt_or("Enlarged image"), "Ocean view");
    }

    #[test]
    fn test_thumbnail_loading_defaults_to_lazy() {
        let mut item = GalleryItem::default();
        assert_eq!(item.thumbnail_loading(), "lazy");
        item.loading = Some("eager".to_string());
        assert_eq!(item.thumbnail_loading(), "eager");
    }
}
