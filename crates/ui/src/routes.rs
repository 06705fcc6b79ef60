use dioxus::prelude::*;
use quiz_core::QuizCatalog;
use services::{AppEvent, PanelDecl, RouteTable, RouterError, routes};

use crate::driver::ShellDriver;
use crate::vm::start_button_id;

/// Every panel on the page, with its focusable controls in document order.
#[must_use]
pub fn panel_declarations(catalog: &QuizCatalog) -> Vec<PanelDecl> {
    let mut choose = PanelDecl::new(routes::CHOOSE_QUIZ);
    for quiz in catalog.iter() {
        choose = choose.with_focusable(start_button_id(quiz.id().as_str()));
    }
    choose = choose.with_focusable("choose-back");

    vec![
        PanelDecl::new(routes::WELCOME)
            .with_focusable("welcome-start")
            .with_focusable("welcome-features"),
        choose,
        PanelDecl::new(routes::QUIZ)
            .with_focusable("option-0")
            .with_focusable("quiz-next"),
        PanelDecl::new(routes::RESULT)
            .with_focusable("result-again")
            .with_focusable("result-home"),
        PanelDecl::new(routes::FEATURES).with_focusable("features-back"),
        PanelDecl::new(routes::DASHBOARD).with_focusable("dashboard-back"),
    ]
}

/// # Errors
///
/// Returns `RouterError` if two panels declare the same route.
pub fn route_table(catalog: &QuizCatalog) -> Result<RouteTable, RouterError> {
    RouteTable::new(panel_declarations(catalog), routes::WELCOME)
}

const NAV_ITEMS: [(&str, &str); 4] = [
    (routes::WELCOME, "Home"),
    (routes::CHOOSE_QUIZ, "Quizzes"),
    (routes::FEATURES, "Features"),
    (routes::DASHBOARD, "Dashboard"),
];

#[component]
pub fn NavBar() -> Element {
    let driver = use_context::<ShellDriver>();
    let shell = driver.shell();
    let (can_back, can_forward) = {
        let shell = shell.read();
        let history = shell.router().history();
        (history.can_go_back(), history.can_go_forward())
    };

    rsx! {
        nav { class: "topbar",
            button {
                id: "nav-back",
                r#type: "button",
                disabled: !can_back,
                onclick: move |_| driver.back(),
                "←"
            }
            button {
                id: "nav-forward",
                r#type: "button",
                disabled: !can_forward,
                onclick: move |_| driver.forward(),
                "→"
            }
            ul {
                for (route, label) in NAV_ITEMS {
                    li { key: "{route}",
                        button {
                            r#type: "button",
                            class: if shell.read().is_active(route) { "nav-link current" } else { "nav-link" },
                            "data-route": route,
                            onclick: move |evt: MouseEvent| {
                                evt.prevent_default();
                                driver.dispatch(AppEvent::Navigate(route.to_string()));
                            },
                            "{label}"
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn choose_panel_focuses_first_quiz() {
        let decls = panel_declarations(&QuizCatalog::builtin());
        let choose = decls
            .iter()
            .find(|decl| decl.route() == routes::CHOOSE_QUIZ)
            .unwrap();
        assert_eq!(choose.first_focusable(), Some("start-gk"));
    }

    #[test]
    fn builtin_panels_form_valid_table() {
        let table = route_table(&QuizCatalog::builtin()).unwrap();
        assert_eq!(table.panels().count(), 6);
        assert!(table.is_declared(routes::DASHBOARD));
    }
}
