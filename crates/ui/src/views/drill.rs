use dioxus::prelude::*;

use crate::context::use_engine;
use crate::vm::DrillVm;

use super::notice::{NoticeBanner, NoticeModal};

#[component]
pub fn DrillView() -> Element {
    let mut engine = use_engine();
    let vm = DrillVm::from_engine(&engine.read());
    let blocked = vm.is_blocked();
    let modal = vm.notice.clone().filter(|notice| notice.blocking);
    let banner = vm.notice.clone().filter(|notice| !notice.blocking);

    let on_close = move |()| engine.write().dismiss_notice();

    rsx! {
        div { class: "page page--drill",
            h2 { class: "drill-question", "{vm.question_label}" }
            div { class: "drill-answer-row",
                input {
                    id: "drill-answer",
                    class: "drill-input",
                    r#type: "text",
                    inputmode: "numeric",
                    placeholder: "Type your answer",
                    autofocus: true,
                    disabled: blocked,
                    value: "{vm.answer_text}",
                    oninput: move |evt| engine.write().set_answer_text(evt.value()),
                    onkeydown: move |evt| {
                        if evt.data.key() == Key::Enter {
                            evt.prevent_default();
                            engine.write().submit_answer();
                        }
                    },
                }
                button {
                    id: "drill-submit",
                    class: "btn btn-primary",
                    r#type: "button",
                    disabled: blocked,
                    onclick: move |_| {
                        engine.write().submit_answer();
                    },
                    "Submit"
                }
            }
            div { class: "drill-meta",
                span { class: "drill-score", "{vm.score_label}" }
                span { class: "drill-streak", "{vm.streak_label}" }
            }
            {banner.map(|notice| rsx! { NoticeBanner { notice, on_close } })}
            {modal.map(|notice| rsx! { NoticeModal { notice, on_close } })}
        }
    }
}
