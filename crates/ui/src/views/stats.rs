use dioxus::prelude::*;

use crate::context::use_engine;
use crate::vm::map_stats;

#[component]
pub fn StatsView() -> Element {
    let mut engine = use_engine();
    let vm = map_stats(engine.read().stats());
    let policy = engine.read().answer_policy();
    let can_reset = vm.can_reset;

    rsx! {
        div { class: "page page--stats",
            h2 { "Stats" }
            dl { class: "stats-table",
                for row in vm.rows {
                    div { key: "{row.label}", class: "stats-row",
                        dt { "{row.label}" }
                        dd { "{row.value}" }
                    }
                }
            }
            p { class: "stats-policy", "Answer format: {policy}" }
            button {
                id: "stats-reset",
                class: "btn btn-danger",
                r#type: "button",
                disabled: !can_reset,
                onclick: move |_| engine.write().reset_stats(),
                "Reset stats"
            }
        }
    }
}
