use dioxus::prelude::*;
use services::routes;

use crate::driver::ShellDriver;
use crate::views::{Panel, RouteButton};
use crate::vm::phase_label;

#[component]
pub fn FeaturesView() -> Element {
    rsx! {
        Panel { route: routes::FEATURES,
            h2 { "Features" }
            ul { class: "features",
                li { "Multiple-choice quizzes on general knowledge, the web and science." }
                li { "A countdown per question; unanswered questions count as wrong." }
                li { "Pick an answer, change your mind, then confirm with Next." }
            }
            RouteButton { route: routes::WELCOME, id: "features-back", "Back" }
        }
    }
}

#[component]
pub fn DashboardView() -> Element {
    let driver = use_context::<ShellDriver>();
    let (status, quizzes, last) = {
        let shell = driver.shell();
        let shell = shell.read();
        let engine = shell.engine();
        (
            phase_label(engine.phase()),
            engine.catalog().len(),
            engine.last_result().map_or_else(
                || "None yet".to_string(),
                |result| format!("{}: {}/{}", result.quiz_title, result.score, result.total),
            ),
        )
    };

    rsx! {
        Panel { route: routes::DASHBOARD,
            h2 { "Dashboard" }
            dl { class: "stats",
                dt { "Status" }
                dd { id: "dashboard-status", "{status}" }
                dt { "Quizzes available" }
                dd { "{quizzes}" }
                dt { "Last result" }
                dd { id: "dashboard-last", "{last}" }
            }
            RouteButton { route: routes::WELCOME, id: "dashboard-back", "Back" }
        }
    }
}
