use dioxus::prelude::*;
use services::{AppEvent, routes};

use crate::driver::ShellDriver;
use crate::views::Panel;
use crate::vm::{option_class, option_element_id, options_class};

#[component]
pub fn QuizView() -> Element {
    let driver = use_context::<ShellDriver>();
    let view = driver.shell().read().engine().question_view();

    let Some(view) = view else {
        return rsx! {
            Panel { route: routes::QUIZ,
                p { class: "muted", "No quiz in progress." }
            }
        };
    };

    rsx! {
        Panel { route: routes::QUIZ,
            h2 { "{view.quiz_title}" }
            div { class: "quiz-meta",
                span {
                    "Question "
                    span { id: "q-index", "{view.number}" }
                    " of "
                    span { id: "q-total", "{view.total}" }
                }
                span { id: "timer", class: "timer", "{view.timer_label}" }
            }
            p { id: "question-text", class: "question", "{view.prompt}" }
            div { id: "options", class: options_class(view.shake),
                for option in view.options {
                    button {
                        key: "{option.index}",
                        id: option_element_id(option.index),
                        r#type: "button",
                        class: option_class(&option),
                        "data-index": "{option.index}",
                        disabled: option.disabled,
                        onclick: {
                            let index = option.index;
                            move |_| driver.dispatch(AppEvent::SelectOption(index))
                        },
                        "{option.label}"
                    }
                }
            }
            button {
                id: "quiz-next",
                r#type: "button",
                class: "primary",
                onclick: move |_| driver.dispatch(AppEvent::Confirm),
                "Next"
            }
        }
    }
}
