use dioxus::prelude::*;
use services::AppEvent;

use crate::context::AppContext;
use crate::driver::ShellDriver;
use crate::views::Page;

#[component]
pub fn App() -> Element {
    let ctx = use_context::<AppContext>();
    let (shell, startup) = use_hook(|| {
        let mut shell = ctx.build_shell();
        let effects = shell.start();
        (Signal::new(shell), effects)
    });
    let countdown = use_signal(|| None);
    let pending_focus = use_signal(|| None);
    let driver = use_context_provider(|| ShellDriver::new(shell, countdown, pending_focus));

    // Runs once, after the first render: the page counts as loaded here.
    use_effect(move || {
        driver.run(startup.clone());
        driver.dispatch(AppEvent::DocumentLoaded);
    });

    use_effect(move || driver.apply_pending_focus());

    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }

        // Stable OS/window title.
        document::Title { "Quiz" }

        div { class: "app-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Something went wrong" }
                        pre { "{errors:?}" }
                    }
                },
                Page {}
            }
        }
    }
}
