use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    fn class(self) -> &'static str {
        match self {
            Self::Success => "notice notice--success",
            Self::Error => "notice notice--error",
        }
    }
}

/// Transient status message with a dismiss button.
#[component]
pub fn Notice(
    kind: NoticeKind,
    title: String,
    description: String,
    dismiss_label: String,
    on_dismiss: EventHandler<()>,
) -> Element {
    let role = match kind {
        NoticeKind::Success => "status",
        NoticeKind::Error => "alert",
    };

    rsx! {
        div { class: kind.class(), role: "{role}",
            div { class: "notice__body",
                strong { class: "notice__title", "{title}" }
                p { class: "notice__description", "{description}" }
            }
            button {
                class: "notice__dismiss",
                r#type: "button",
                aria_label: "{dismiss_label}",
                onclick: move |_| on_dismiss.call(()),
                "✕"
            }
        }
    }
}
