use dioxus::prelude::*;

use crate::i18n::use_i18n;
use crate::t;

#[component]
pub fn Hero() -> Element {
    let i18n = use_i18n();

    rsx! {
        section { class: "hero",
            div { class: "hero__backdrop", aria_hidden: "true" }
            div { class: "hero__content container-narrow",
                p { class: "hero__eyebrow", {t!(i18n, "hero.subtitle")} }
                h1 { class: "heading-display", {t!(i18n, "hero.title")} }
                p { class: "text-body-large", {t!(i18n, "hero.description")} }
                a { class: "button button--primary", href: "#kontakt", {t!(i18n, "hero.cta")} }
            }
            div { class: "hero__scroll-hint", aria_hidden: "true",
                div { class: "hero__scroll-dot" }
            }
        }
    }
}
