use dioxus::prelude::*;
use time::OffsetDateTime;

use crate::i18n::use_i18n;
use crate::t;

#[component]
pub fn Footer() -> Element {
    let i18n = use_i18n();
    let year = OffsetDateTime::now_utc().year();

    rsx! {
        footer { class: "footer",
            div { class: "container-wide footer__inner",
                div {
                    p { class: "footer__name", {t!(i18n, "footer.name")} }
                    p { class: "footer__subtitle", {t!(i18n, "footer.subtitle")} }
                }
                a { class: "footer__link", href: "#top", {t!(i18n, "footer.privacyPolicy")} }
            }
            p { class: "footer__copyright", {t!(i18n, "footer.copyright", year = year)} }
        }
    }
}
