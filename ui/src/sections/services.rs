use dioxus::prelude::*;

use crate::i18n::use_i18n;
use crate::t;

/// (icon, title key, description key)
const SERVICES: [(&str, &str, &str); 3] = [
    ("👤", "services.individual.title", "services.individual.description"),
    ("💬", "services.consultation.title", "services.consultation.description"),
    ("🎥", "services.online.title", "services.online.description"),
];

#[component]
pub fn Services() -> Element {
    let i18n = use_i18n();

    rsx! {
        section { id: "oferta", class: "section services",
            div { class: "container-wide",
                div { class: "section__intro",
                    h2 { class: "heading-section", {t!(i18n, "services.title")} }
                    p { class: "text-body", {t!(i18n, "services.subtitle")} }
                }
                div { class: "card-grid card-grid--three",
                    for (icon, title_key, description_key) in SERVICES {
                        article { key: "{title_key}", class: "card",
                            div { class: "card__icon", aria_hidden: "true", "{icon}" }
                            h3 { class: "heading-card", {i18n.t(title_key)} }
                            p { class: "text-body", {i18n.t(description_key)} }
                        }
                    }
                }
            }
        }
    }
}
