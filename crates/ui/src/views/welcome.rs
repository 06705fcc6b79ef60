use dioxus::prelude::*;
use services::routes;

use crate::context::AppContext;
use crate::views::{Panel, RouteButton};

#[component]
pub fn WelcomeView() -> Element {
    let secs = use_context::<AppContext>().settings().question_secs();
    let unit = if secs == 1 { "second" } else { "seconds" };

    rsx! {
        Panel { route: routes::WELCOME,
            h1 { "Quiz Time" }
            p { class: "lead", "Short quizzes, one question at a time. Each question gives you {secs} {unit}." }
            div { class: "actions",
                RouteButton { route: routes::CHOOSE_QUIZ, id: "welcome-start", primary: true, "Start a quiz" }
                RouteButton { route: routes::FEATURES, id: "welcome-features", "What's inside" }
            }
        }
    }
}
