use dioxus::prelude::*;
use services::routes;

use crate::driver::ShellDriver;
use crate::views::{Panel, RouteButton};

#[component]
pub fn ResultView() -> Element {
    let driver = use_context::<ShellDriver>();
    let result = driver.shell().read().engine().last_result().cloned();

    rsx! {
        Panel { route: routes::RESULT,
            h2 { "Result" }
            if let Some(result) = result {
                p { class: "muted", "{result.quiz_title}" }
                p { class: "score",
                    span { id: "score", "{result.score}" }
                    " / "
                    span { id: "score-total", "{result.total}" }
                }
                p { id: "result-text", "{result.summary()}" }
            }
            div { class: "actions",
                RouteButton { route: routes::CHOOSE_QUIZ, id: "result-again", primary: true, "Try another quiz" }
                RouteButton { route: routes::WELCOME, id: "result-home", "Home" }
            }
        }
    }
}
