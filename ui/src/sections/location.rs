use dioxus::prelude::*;

use crate::core::config::SITE;
use crate::i18n::use_i18n;
use crate::t;

#[component]
pub fn Location() -> Element {
    let i18n = use_i18n();

    rsx! {
        section { id: "lokalizacja", class: "section location",
            div { class: "container-wide",
                div { class: "section__intro",
                    h2 { class: "heading-section", {t!(i18n, "location.title")} }
                    p { class: "location__address",
                        span { aria_hidden: "true", "📍 " }
                        {t!(i18n, "location.address")}
                    }
                }
                div { class: "location__map",
                    iframe {
                        src: SITE.map_embed_url,
                        width: "100%",
                        height: "450",
                        style: "border: 0;",
                        "allowfullscreen": "true",
                        "loading": "lazy",
                        "referrerpolicy": "no-referrer-when-downgrade",
                        title: t!(i18n, "location.mapTitle"),
                    }
                }
            }
        }
    }
}
