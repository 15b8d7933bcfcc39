//! Browser-facing hooks shared by the slider components
//!
//! Media queries and scroll positions are read through `document::eval`, so the
//! same code runs in the web renderer and in the desktop webview.

use dioxus::prelude::*;
use std::time::Duration;

const REDUCED_MOTION_JS: &str = r#"
    const query = window.matchMedia("(prefers-reduced-motion: reduce)");
    dioxus.send(query.matches);
    query.addEventListener("change", (event) => dioxus.send(event.matches));
    await new Promise(() => {});
"#;

const WINDOW_SCROLL_JS: &str = r#"
    dioxus.send(window.scrollY);
    window.addEventListener("scroll", () => dioxus.send(window.scrollY), { passive: true });
    await new Promise(() => {});
"#;

const SCROLL_TO_ANCHOR_JS: &str = r#"
    const id = await dioxus.recv();
    const element = document.getElementById(id);
    if (element) {
        element.scrollIntoView({ behavior: "smooth", block: "start" });
    }
    return element !== null;
"#;

/// Attribute set on the overlay of an open lightbox
pub const LIGHTBOX_OPEN_ATTR: &str = "data-lightbox-open";

/// Listener on `window`, so keys keep working when focus falls back to `<body>`
/// (a focused zoom button that becomes disabled drops focus). Only keys in `keys`
/// are forwarded, and only while a lightbox overlay is in the document.
fn window_keydown_js(keys: &[&str]) -> String {
    let list = keys
        .iter()
        .map(|key| format!("{:?}", key))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        r#"
    const keys = new Set([{list}]);
    window.addEventListener("keydown", (event) => {{
        if (keys.has(event.key) && document.querySelector("[{attr}]")) {{
            event.preventDefault();
            dioxus.send(event.key);
        }}
    }});
    await new Promise(() => {{}});
"#,
        list = list,
        attr = LIGHTBOX_OPEN_ATTR,
    )
}

/// Timer usable from component tasks on every renderer
pub async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;

    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}

/// Tracks `prefers-reduced-motion: reduce`, including changes while the page is open
pub fn use_reduced_motion() -> Signal<bool> {
    let mut reduced = use_signal(|| false);

    use_future(move || async move {
        let mut eval = document::eval(REDUCED_MOTION_JS);
        while let Ok(matches) = eval.recv::<bool>().await {
            if *reduced.peek() != matches {
                log::debug!("reduced motion preference: {}", matches);
                reduced.set(matches);
            }
        }
    });

    reduced
}

/// Calls `on_key` with the `key` of every matching `keydown` on `window`
pub fn use_window_keydown(keys: &'static [&'static str], on_key: Callback<String>) {
    use_future(move || async move {
        let mut eval = document::eval(&window_keydown_js(keys));
        while let Ok(key) = eval.recv::<String>().await {
            on_key.call(key);
        }
    });
}

/// Tracks `window.scrollY`
pub fn use_window_scroll() -> Signal<f64> {
    let mut scroll_y = use_signal(|| 0.0);

    use_future(move || async move {
        let mut eval = document::eval(WINDOW_SCROLL_JS);
        while let Ok(y) = eval.recv::<f64>().await {
            scroll_y.set(y);
        }
    });

    scroll_y
}

/// Smoothly scrolls to the element with `id`; returns false if it is not on the page
pub async fn scroll_to_anchor(id: &str) -> bool {
    let mut eval = document::eval(SCROLL_TO_ANCHOR_JS);
    if let Err(e) = eval.send(id.to_string()) {
        log::warn!("scroll to #{} failed: {:?}", id, e);
        return false;
    }
    eval.join::<bool>().await.unwrap_or(false)
}
