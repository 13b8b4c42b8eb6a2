use dioxus::prelude::*;

use crate::vm::NoticeVm;

/// Modal for notices the user has to acknowledge before answering again.
#[component]
pub fn NoticeModal(notice: NoticeVm, on_close: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "notice-overlay",
            onclick: move |_| on_close.call(()),
            div {
                class: "notice-modal notice-modal--{notice.tone_class}",
                role: "dialog",
                onclick: move |evt| evt.stop_propagation(),
                h3 { class: "notice-title", "{notice.title}" }
                p { class: "notice-message", "{notice.message}" }
                div { class: "notice-actions",
                    button {
                        id: "notice-close",
                        class: "btn btn-primary",
                        r#type: "button",
                        autofocus: true,
                        onclick: move |_| on_close.call(()),
                        "Close"
                    }
                }
            }
        }
    }
}

/// Inline banner for informational notices; answering stays possible.
#[component]
pub fn NoticeBanner(notice: NoticeVm, on_close: EventHandler<()>) -> Element {
    rsx! {
        div { class: "notice-banner notice-banner--{notice.tone_class}",
            span { class: "notice-message", "{notice.message}" }
            button {
                class: "btn",
                r#type: "button",
                aria_label: "Dismiss",
                onclick: move |_| on_close.call(()),
                "×"
            }
        }
    }
}
