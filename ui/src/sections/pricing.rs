use dioxus::prelude::*;

use crate::i18n::use_i18n;
use crate::t;

/// (title key, minutes, price in PLN)
const PRICES: [(&str, u32, u32); 3] = [
    ("pricing.individual", 50, 200),
    ("pricing.consultation", 50, 200),
    ("pricing.online", 50, 200),
];

#[component]
pub fn Pricing() -> Element {
    let i18n = use_i18n();

    rsx! {
        section { id: "cennik", class: "section section--tinted pricing",
            div { class: "container-wide",
                div { class: "section__intro",
                    h2 { class: "heading-section", {t!(i18n, "pricing.title")} }
                }
                div { class: "card-grid card-grid--three",
                    for (title_key, minutes, amount) in PRICES {
                        article { key: "{title_key}", class: "card card--centered",
                            h3 { class: "heading-card", {i18n.t(title_key)} }
                            p { class: "pricing__duration",
                                span { aria_hidden: "true", "🕒 " }
                                {t!(i18n, "pricing.duration", minutes = minutes)}
                            }
                            p { class: "pricing__price", {t!(i18n, "pricing.price", amount = amount)} }
                        }
                    }
                }
                p { class: "pricing__note", {t!(i18n, "pricing.note")} }
            }
        }
    }
}
