use dioxus::prelude::*;

use crate::components::{Notice, NoticeKind};
use crate::core::config::SITE;
use crate::core::contact::{self, ContactForm};
use crate::core::timing;
use crate::i18n::use_i18n;
use crate::t;

#[component]
pub fn Contact() -> Element {
    let i18n = use_i18n();
    let mut form = use_signal(ContactForm::default);
    let mut sending = use_signal(|| false);
    let mut notice = use_signal(|| Option::<NoticeKind>::None);
    // Bumped per notice so a stale dismiss timer leaves a newer notice alone.
    let mut notice_generation = use_signal(|| 0u32);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if sending() {
            return;
        }
        let payload = form();
        sending.set(true);

        spawn(async move {
            let outcome = contact::submit(&payload).await;
            sending.set(false);

            let kind = match outcome {
                Ok(()) => {
                    form.set(ContactForm::default());
                    NoticeKind::Success
                }
                Err(err) => {
                    tracing::warn!(error = %err, "contact form not delivered");
                    NoticeKind::Error
                }
            };
            let generation = notice_generation() + 1;
            notice_generation.set(generation);
            notice.set(Some(kind));

            timing::sleep_ms(SITE.notice_ms).await;
            if notice_generation() == generation {
                notice.set(None);
            }
        });
    };

    let current = form();
    let notice_view = notice().map(|kind| {
        let (title_key, description_key) = match kind {
            NoticeKind::Success => ("contact.success.title", "contact.success.description"),
            NoticeKind::Error => ("contact.error.title", "contact.error.description"),
        };
        (kind, i18n.t(title_key), i18n.t(description_key))
    });

    rsx! {
        section { id: "kontakt", class: "section section--tinted contact",
            div { class: "container-wide",
                div { class: "section__intro",
                    h2 { class: "heading-section", {t!(i18n, "contact.title")} }
                    p { class: "text-body", {t!(i18n, "contact.subtitle")} }
                }

                if let Some((kind, title, description)) = notice_view {
                    Notice {
                        kind: kind,
                        title: title,
                        description: description,
                        dismiss_label: t!(i18n, "contact.dismiss"),
                        on_dismiss: move |_| notice.set(None),
                    }
                }

                div { class: "contact__grid",
                    div { class: "contact__details",
                        h3 { class: "heading-card", {t!(i18n, "contact.detailsTitle")} }
                        a { class: "contact__channel", href: format!("mailto:{}", SITE.email),
                            span { class: "contact__channel-icon", aria_hidden: "true", "✉" }
                            span { {SITE.email} }
                        }
                        a { class: "contact__channel", href: SITE.phone_href,
                            span { class: "contact__channel-icon", aria_hidden: "true", "☎" }
                            span { {SITE.phone} }
                        }
                        div { class: "card contact__note",
                            p { {t!(i18n, "contact.appointmentNote")} }
                        }
                    }

                    form {
                        class: "card contact__form",
                        name: SITE.form_name,
                        method: "POST",
                        onsubmit: on_submit,

                        input { r#type: "hidden", name: "form-name", value: SITE.form_name }
                        input { r#type: "hidden", name: "bot-field" }

                        div { class: "field",
                            label { class: "field__label", r#for: "name", {t!(i18n, "contact.form.name")} }
                            input {
                                class: "field__input",
                                id: "name",
                                name: "name",
                                r#type: "text",
                                required: true,
                                placeholder: t!(i18n, "contact.form.namePlaceholder"),
                                value: current.name.clone(),
                                oninput: move |evt: FormEvent| form.with_mut(|f| f.name = evt.value()),
                            }
                        }

                        div { class: "field",
                            label { class: "field__label", r#for: "email", {t!(i18n, "contact.form.email")} }
                            input {
                                class: "field__input",
                                id: "email",
                                name: "email",
                                r#type: "email",
                                required: true,
                                placeholder: t!(i18n, "contact.form.emailPlaceholder"),
                                value: current.email.clone(),
                                oninput: move |evt: FormEvent| form.with_mut(|f| f.email = evt.value()),
                            }
                        }

                        div { class: "field",
                            label { class: "field__label", r#for: "phone", {t!(i18n, "contact.form.phone")} }
                            input {
                                class: "field__input",
                                id: "phone",
                                name: "phone",
                                r#type: "tel",
                                placeholder: t!(i18n, "contact.form.phonePlaceholder"),
                                value: current.phone.clone(),
                                oninput: move |evt: FormEvent| form.with_mut(|f| f.phone = evt.value()),
                            }
                        }

                        div { class: "field",
                            label { class: "field__label", r#for: "message", {t!(i18n, "contact.form.message")} }
                            textarea {
                                class: "field__input field__input--area",
                                id: "message",
                                name: "message",
                                rows: "4",
                                required: true,
                                placeholder: t!(i18n, "contact.form.messagePlaceholder"),
                                value: current.message.clone(),
                                oninput: move |evt: FormEvent| form.with_mut(|f| f.message = evt.value()),
                            }
                        }

                        button {
                            class: "button button--primary button--block",
                            r#type: "submit",
                            disabled: sending(),
                            if sending() {
                                {t!(i18n, "contact.form.sending")}
                            } else {
                                {t!(i18n, "contact.form.submit")}
                            }
                        }
                    }
                }
            }
        }
    }
}
