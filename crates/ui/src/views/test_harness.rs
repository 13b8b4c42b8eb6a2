use dioxus::prelude::*;
use crunch_core::{AnswerPolicy, fixed_problems};
use services::SessionEngine;

use crate::context::use_engine_provider;
use crate::views::{DrillView, StatsView};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewKind {
    Drill,
    Stats,
}

/// An action applied to the engine before the view renders.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Step {
    Type(&'static str),
    Submit,
    Dismiss,
    Reset,
}

impl Step {
    fn apply(&self, engine: &mut SessionEngine) {
        match self {
            Step::Type(text) => engine.set_answer_text(*text),
            Step::Submit => {
                engine.submit_answer();
            }
            Step::Dismiss => engine.dismiss_notice(),
            Step::Reset => engine.reset_stats(),
        }
    }
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    view: ViewKind,
    steps: Vec<Step>,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewHarnessRoot(props: ViewHarnessProps) -> Element {
    let steps = props.steps.clone();
    use_engine_provider(move || {
        let mut engine = SessionEngine::new(Box::new(fixed_problems()), AnswerPolicy::Strict);
        for step in &steps {
            step.apply(&mut engine);
        }
        engine
    });

    match props.view {
        ViewKind::Drill => rsx! { DrillView {} },
        ViewKind::Stats => rsx! { StatsView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
}

impl ViewHarness {
    pub fn new(view: ViewKind, steps: Vec<Step>) -> Self {
        let mut dom = VirtualDom::new_with_props(ViewHarnessRoot, ViewHarnessProps { view, steps });
        dom.rebuild_in_place();
        Self { dom }
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

/// Render `view` after replaying `steps` against a fresh engine on the fixed problem script.
pub fn render_view(view: ViewKind, steps: Vec<Step>) -> String {
    ViewHarness::new(view, steps).render()
}
