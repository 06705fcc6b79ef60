use dioxus::prelude::*;
use services::{AppEvent, routes};

use crate::driver::ShellDriver;
use crate::views::{Panel, RouteButton};
use crate::vm::start_button_id;

#[derive(Clone, Debug, PartialEq, Eq)]
struct QuizCardVm {
    id: String,
    title: String,
    count_label: String,
}

#[component]
pub fn ChooseQuizView() -> Element {
    let driver = use_context::<ShellDriver>();
    let cards: Vec<QuizCardVm> = driver
        .shell()
        .read()
        .engine()
        .catalog()
        .iter()
        .map(|quiz| QuizCardVm {
            id: quiz.id().to_string(),
            title: quiz.title().to_string(),
            count_label: match quiz.len() {
                1 => "1 question".to_string(),
                n => format!("{n} questions"),
            },
        })
        .collect();

    rsx! {
        Panel { route: routes::CHOOSE_QUIZ,
            h2 { "Choose a quiz" }
            div { class: "quiz-grid",
                for card in cards {
                    article { key: "{card.id}", class: "quiz-card",
                        h3 { "{card.title}" }
                        p { class: "muted", "{card.count_label}" }
                        button {
                            id: start_button_id(&card.id),
                            r#type: "button",
                            class: "start-quiz primary",
                            "data-quiz": "{card.id}",
                            onclick: {
                                let quiz_id = card.id.clone();
                                move |evt: MouseEvent| {
                                    evt.prevent_default();
                                    driver.dispatch(AppEvent::StartQuiz(quiz_id.clone()));
                                }
                            },
                            "Start"
                        }
                    }
                }
            }
            RouteButton { route: routes::WELCOME, id: "choose-back", "Back" }
        }
    }
}
