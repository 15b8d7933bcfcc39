use crate::components::{resolve_image, ResponsiveImg};
use crate::config::config;
use crate::content::{header_suites, NAV_LINKS, SUITES};
use crate::i18n::Lang;
use crate::models::NavLink;
use crate::services::booking_url;
use crate::Route;
use dioxus::prelude::*;
use dioxus_gallery::{scroll_to_anchor, sleep, use_window_scroll, HoverMenu, ScrollVisibility};
use dioxus_i18n::t;
use std::time::Duration;

#[component]
pub fn Header(lang: Lang) -> Element {
    let cfg = config();
    let route = use_route::<Route>();
    let on_home = route.is_home();
    let switch_href = Lang::switch_path(&route.to_string());
    let book_href = booking_url(&cfg.booking.villa_room, lang, &cfg.booking);

    let scroll_y = use_window_scroll();
    let mut visibility = use_signal(ScrollVisibility::default);
    use_effect(move || {
        let y = scroll_y();
        visibility.write().update(y);
    });

    let mut mega_menu = use_signal(HoverMenu::default);
    let mut mobile_open = use_signal(|| false);
    let close_delay = Duration::from_millis(cfg.menu.close_delay_ms);
    let scroll_delay = Duration::from_millis(cfg.menu.anchor_scroll_delay_ms);

    let schedule_close = move |_: MouseEvent| {
        let ticket = mega_menu.write().schedule_close();
        spawn(async move {
            sleep(close_delay).await;
            mega_menu.write().close_if_current(ticket);
        });
    };

    let header_class = if visibility.read().visible() {
        "site-header"
    } else {
        "site-header site-header--hidden"
    };
    let cards = header_suites();

    rsx! {
        header { class: "{header_class}",
            div { class: "header-bar",
                a { class: "header-logo", href: lang.href("/"), "{cfg.site.name}" }

                nav { class: "header-nav",
                    for link in NAV_LINKS.iter() {
                        if link.has_mega_menu {
                            div {
                                key: "{link.label_key}",
                                class: "header-nav-item",
                                onmouseenter: move |_| mega_menu.write().open(),
                                onmouseleave: schedule_close,
                                NavAnchor { link: *link, lang, on_home, scroll_delay: Duration::ZERO }
                            }
                        } else {
                            NavAnchor { key: "{link.label_key}", link: *link, lang, on_home, scroll_delay: Duration::ZERO }
                        }
                    }
                }

                div { class: "header-actions",
                    a {
                        class: "header-lang",
                        href: "{switch_href}",
                        title: t!("nav-switch-language"),
                        aria_label: lang.other().label(),
                        hreflang: lang.other().code(),
                        "{lang.other().code().to_uppercase()}"
                    }
                    a {
                        class: "btn btn-book",
                        href: "{book_href}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        {t!("nav-book")}
                    }
                    button {
                        class: "header-burger",
                        aria_label: t!("nav-menu"),
                        aria_expanded: "{mobile_open()}",
                        onclick: move |_| mobile_open.toggle(),
                        span {}
                        span {}
                        span {}
                    }
                }
            }

            if mega_menu.read().is_open() {
                div {
                    class: "mega-menu",
                    onmouseenter: move |_| mega_menu.write().open(),
                    onmouseleave: schedule_close,
                    div { class: "mega-menu-grid",
                        for card in cards.iter() {
                            Link {
                                key: "{card.slug_source}",
                                class: "mega-menu-card",
                                to: lang.href(&format!("/suites/{}", card.slug())),
                                onclick: move |_| mega_menu.write().close(),
                                ResponsiveImg {
                                    image: resolve_image(card.image, &cfg.images.card_widths, "(min-width: 1024px) 20vw, 50vw", false),
                                    alt: card.title.to_string(),
                                    class: "mega-menu-image".to_string(),
                                }
                                div { class: "mega-menu-title", "{card.title}" }
                                div { class: "mega-menu-meta",
                                    "{card.size} · "
                                    {t!("suite-guest-count", count: card.guests)}
                                }
                            }
                        }
                    }
                }
            }

            div { class: if mobile_open() { "mobile-menu mobile-menu--open" } else { "mobile-menu" },
                button {
                    class: "mobile-menu-close",
                    aria_label: t!("lightbox-close"),
                    onclick: move |_| mobile_open.set(false),
                    "×"
                }
                nav { class: "mobile-menu-nav",
                    for link in NAV_LINKS.iter() {
                        div { key: "{link.label_key}", class: "mobile-menu-item",
                            NavAnchor {
                                link: *link,
                                lang,
                                on_home,
                                scroll_delay,
                                on_follow: move |_| mobile_open.set(false),
                            }
                            if link.has_mega_menu {
                                ul { class: "mobile-menu-suites",
                                    for suite in SUITES.iter() {
                                        li { key: "{suite.room_code}",
                                            Link {
                                                to: lang.href(&format!("/suites/{}", suite.slug())),
                                                onclick: move |_| mobile_open.set(false),
                                                "{suite.heading()}"
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
                a {
                    class: "btn btn-book",
                    href: "{book_href}",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    {t!("nav-book")}
                }
            }
        }
    }
}

/// Navigation entry; section links on the home page scroll instead of reloading
#[component]
fn NavAnchor(
    link: NavLink,
    lang: Lang,
    on_home: bool,
    scroll_delay: Duration,
    #[props(default)] on_follow: EventHandler<()>,
) -> Element {
    let href = link.href(lang);
    let anchor = link.anchor();

    rsx! {
        a {
            class: "nav-link",
            href: "{href}",
            onclick: move |evt: MouseEvent| {
                on_follow.call(());
                if let (true, Some(id)) = (on_home, anchor) {
                    evt.prevent_default();
                    spawn(async move {
                        if !scroll_delay.is_zero() {
                            sleep(scroll_delay).await;
                        }
                        if !scroll_to_anchor(id).await {
                            log::debug!("section #{} not on this page", id);
                        }
                    });
                }
            },
            {t!(link.label_key)}
        }
    }
}
