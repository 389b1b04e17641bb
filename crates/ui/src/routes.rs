use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable, use_route};

use crate::views::{HomeView, QuizView, TimerView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/quiz", QuizView)] Quiz {},
        #[route("/timer", TimerView)] Timer {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app-shell",
            Header {}
            main { class: "content",
                Outlet::<Route> {}
            }
            Footer {}
        }
    }
}

#[component]
fn Header() -> Element {
    let route = use_route::<Route>();
    let on_landing = route == Route::Home {};

    rsx! {
        header { class: "topbar",
            // The brand is also the reset affordance: navigating home drops
            // any in-flight quiz state with the view that owned it.
            Link { class: "brand", to: Route::Home {},
                span { class: "brand-mark", "🧠" }
                h1 { class: "brand-name", "Companion" }
            }
            if on_landing {
                p { class: "tagline", "Turn hard topics into fun with a personalized quiz!" }
            } else {
                nav { class: "nav",
                    NavButton { to: Route::Quiz {}, active: route == Route::Quiz {}, label: "Quiz Generator" }
                    NavButton { to: Route::Timer {}, active: route == Route::Timer {}, label: "Focus Timer" }
                }
            }
        }
    }
}

#[component]
fn NavButton(to: Route, active: bool, label: &'static str) -> Element {
    rsx! {
        Link {
            class: if active { "nav-button active" } else { "nav-button" },
            to,
            "{label}"
        }
    }
}

#[component]
fn Footer() -> Element {
    rsx! {
        footer { class: "footer",
            p { class: "muted", "Powered by AI." }
        }
    }
}
