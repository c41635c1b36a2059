use dioxus::prelude::*;

use crate::i18n::use_i18n;
use crate::t;

#[component]
pub fn About() -> Element {
    let i18n = use_i18n();

    rsx! {
        section { id: "o-mnie", class: "section about",
            div { class: "container-wide about__grid",
                div { class: "about__photo", role: "img", aria_label: t!(i18n, "about.photoAlt"),
                    svg {
                        class: "about__photo-icon",
                        fill: "none",
                        stroke: "currentColor",
                        view_box: "0 0 24 24",
                        path {
                            stroke_linecap: "round",
                            stroke_linejoin: "round",
                            stroke_width: "1.5",
                            d: "M16 7a4 4 0 11-8 0 4 4 0 018 0zM12 14a7 7 0 00-7 7h14a7 7 0 00-7-7z",
                        }
                    }
                }
                div { class: "about__text",
                    h2 { class: "heading-section", {t!(i18n, "about.title")} }
                    p { class: "text-body", {t!(i18n, "about.paragraph1")} }
                    p { class: "text-body", {t!(i18n, "about.paragraph2")} }
                }
            }
        }
    }
}
