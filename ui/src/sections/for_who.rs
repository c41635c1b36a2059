use dioxus::prelude::*;

use crate::i18n::use_i18n;
use crate::t;

const AUDIENCE: [&str; 5] = [
    "forWho.items.anxiety",
    "forWho.items.crisis",
    "forWho.items.relationships",
    "forWho.items.selfUnderstanding",
    "forWho.items.emotional",
];

#[component]
pub fn ForWho() -> Element {
    let i18n = use_i18n();

    rsx! {
        section { id: "dla-kogo", class: "section for-who",
            div { class: "container-narrow",
                div { class: "section__intro",
                    h2 { class: "heading-section", {t!(i18n, "forWho.title")} }
                    p { class: "text-body", {t!(i18n, "forWho.subtitle")} }
                }
                ul { class: "check-list",
                    for item_key in AUDIENCE {
                        li { key: "{item_key}", class: "check-list__item",
                            span { class: "check-list__mark", aria_hidden: "true", "✓" }
                            span { {i18n.t(item_key)} }
                        }
                    }
                }
            }
        }
    }
}
