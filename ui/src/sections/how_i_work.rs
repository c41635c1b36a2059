use dioxus::prelude::*;

use crate::i18n::use_i18n;
use crate::t;

const PILLARS: [&str; 4] = [
    "howIWork.pillars.past",
    "howIWork.pillars.patterns",
    "howIWork.pillars.emotions",
    "howIWork.pillars.relationships",
];

#[component]
pub fn HowIWork() -> Element {
    let i18n = use_i18n();

    rsx! {
        section { id: "jak-pracuje", class: "section how-i-work",
            div { class: "container-narrow",
                h2 { class: "heading-section", {t!(i18n, "howIWork.title")} }
                p { class: "text-body", {t!(i18n, "howIWork.approach")} }
                p { class: "text-body", {t!(i18n, "howIWork.mentalization")} }
                div { class: "pillars",
                    for item_key in PILLARS {
                        div { key: "{item_key}", class: "pillars__item", {i18n.t(item_key)} }
                    }
                }
                p { class: "how-i-work__goal", {t!(i18n, "howIWork.goal")} }
            }
        }
    }
}
