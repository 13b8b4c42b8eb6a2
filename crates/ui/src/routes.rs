use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::context::AppContext;
use crate::views::{DrillView, StatsView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", DrillView)] Drill {},
        #[route("/stats", StatsView)] Stats {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            Sidebar {}
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn Sidebar() -> Element {
    let ctx = use_context::<AppContext>();

    rsx! {
        nav { class: "sidebar",
            h1 { "{ctx.app_name()}" }
            ul {
                li { Link { to: Route::Drill {}, "Practice" } }
                li { Link { to: Route::Stats {}, "Stats" } }
            }
        }
    }
}
