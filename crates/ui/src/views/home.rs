use dioxus::prelude::*;
use dioxus_router::Link;

use crate::routes::Route;

#[component]
pub fn HomeView() -> Element {
    rsx! {
        div { class: "page landing",
            p { class: "landing-emoji", "🧠✨" }
            h2 { class: "landing-title", "Feeling Stuck? Let's Make Learning Fun." }
            p { class: "landing-blurb",
                "Tell us how you feel about a topic, and our friendly AI will "
                "create a personalized quiz to help you understand it better, "
                "one question at a time."
            }
            Link { class: "btn btn-primary btn-large", to: Route::Quiz {}, "Get Started" }
        }
    }
}
