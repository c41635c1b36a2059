use dioxus::prelude::*;

use crate::i18n::{use_i18n, Args, SUPPORTED_LOCALES};
use crate::t;

/// One flag button per supported locale; the active one is pressed.
#[component]
pub fn LanguageSwitcher() -> Element {
    let i18n = use_i18n();
    let current = i18n.locale();
    let last = SUPPORTED_LOCALES.len() - 1;

    rsx! {
        div {
            class: "locale-switcher",
            role: "group",
            aria_label: t!(i18n, "languageSwitcher.label"),
            { SUPPORTED_LOCALES.iter().enumerate().map(|(index, config)| {
                let i18n = i18n.clone();
                let code = config.code;
                let active = code == current;
                let class = if active {
                    "locale-switcher__button locale-switcher__button--active"
                } else {
                    "locale-switcher__button"
                };
                let label = i18n.translate(
                    "languageSwitcher.switchTo",
                    &Args::new().with("language", config.display_name),
                );
                rsx! {
                    span { key: "{code}", class: "locale-switcher__item",
                        button {
                            class: class,
                            r#type: "button",
                            title: config.display_name,
                            aria_label: "{label}",
                            aria_pressed: "{active}",
                            onclick: move |_| {
                                if !active {
                                    i18n.set_locale(code);
                                }
                            },
                            {config.indicator}
                        }
                        if index < last {
                            span { class: "locale-switcher__separator", aria_hidden: "true", "/" }
                        }
                    }
                }
            })}
        }
    }
}
