use dioxus::prelude::*;
use services::AppEvent;

use crate::driver::ShellDriver;
use crate::routes::NavBar;
use crate::views::{
    ChooseQuizView, DashboardView, FeaturesView, QuizView, ResultView, WelcomeView,
};

/// Every panel is always in the tree; only the active one is shown.
#[component]
pub fn Page() -> Element {
    rsx! {
        NavBar {}
        NoticeBanner {}
        main { class: "content",
            WelcomeView {}
            ChooseQuizView {}
            QuizView {}
            ResultView {}
            FeaturesView {}
            DashboardView {}
        }
    }
}

#[component]
pub fn Panel(route: &'static str, children: Element) -> Element {
    let driver = use_context::<ShellDriver>();
    let active = driver.shell().read().is_active(route);

    rsx! {
        section {
            class: if active { "page active" } else { "page" },
            "data-route": route,
            {children}
        }
    }
}

/// A control tagged with a route; clicking it navigates there.
#[component]
pub fn RouteButton(
    route: &'static str,
    id: &'static str,
    #[props(default)] primary: bool,
    children: Element,
) -> Element {
    let driver = use_context::<ShellDriver>();

    rsx! {
        button {
            id: "{id}",
            r#type: "button",
            class: if primary { "primary" } else { "secondary" },
            "data-route": route,
            onclick: move |evt: MouseEvent| {
                evt.prevent_default();
                driver.dispatch(AppEvent::Navigate(route.to_string()));
            },
            {children}
        }
    }
}

#[component]
pub fn NoticeBanner() -> Element {
    let driver = use_context::<ShellDriver>();
    let notice = driver.shell().read().notice().map(str::to_string);

    rsx! {
        if let Some(message) = notice {
            div { class: "notice", role: "alert",
                span { "{message}" }
                button {
                    r#type: "button",
                    onclick: move |_| driver.dispatch(AppEvent::DismissNotice),
                    "Dismiss"
                }
            }
        }
    }
}
