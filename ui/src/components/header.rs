use dioxus::prelude::*;

use crate::components::LanguageSwitcher;
use crate::core::config::{SECTIONS, SITE};
use crate::i18n::{use_i18n, I18n};
use crate::t;

/// Fixed page header: brand, in-page navigation, booking CTA and the
/// language switcher.
///
/// The same links render twice: inline on wide screens and inside the
/// collapsible menu on narrow ones. Following a link from the collapsed menu
/// closes it.
#[component]
pub fn Header() -> Element {
    let i18n = use_i18n();
    let mut menu_open = use_signal(|| false);

    #[cfg(debug_assertions)]
    {
        tracing::trace!(lang = %i18n.locale(), "Header render");
    }

    rsx! {
        header { id: "top", class: "header",
            div { class: "header__inner container-wide",
                a { class: "header__brand", href: "#top", {SITE.practitioner} }

                nav { class: "header__nav",
                    {nav_links(&i18n, "nav-link", None)}
                    a { class: "button button--primary", href: "#kontakt", {t!(i18n, "nav.book")} }
                }

                LanguageSwitcher {}

                button {
                    class: "header__menu-toggle",
                    r#type: "button",
                    aria_label: t!(i18n, "nav.menu"),
                    aria_expanded: "{menu_open()}",
                    onclick: move |_| menu_open.set(!menu_open()),
                    if menu_open() { "✕" } else { "☰" }
                }
            }

            if menu_open() {
                nav { class: "header__mobile-nav",
                    div { class: "container-wide header__mobile-links",
                        {nav_links(&i18n, "nav-link nav-link--large", Some(menu_open))}
                        a {
                            class: "button button--primary",
                            href: "#kontakt",
                            onclick: move |_| menu_open.set(false),
                            {t!(i18n, "nav.book")}
                        }
                    }
                }
            }
        }
    }
}

fn nav_links(i18n: &I18n, class: &'static str, close_on_click: Option<Signal<bool>>) -> Element {
    rsx! {
        for (anchor, label_key) in SECTIONS {
            a {
                key: "{anchor}",
                class: "{class}",
                href: "#{anchor}",
                onclick: move |_| {
                    if let Some(mut open) = close_on_click {
                        open.set(false);
                    }
                },
                {i18n.t(label_key)}
            }
        }
    }
}
