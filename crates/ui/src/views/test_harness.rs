use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use quiz_core::QuizCatalog;
use quiz_core::model::QuizSettings;
use services::AppEvent;

use crate::context::{AppContext, UiApp, build_app_context};
use crate::driver::ShellDriver;
use crate::views::Page;

#[derive(Clone)]
struct TestApp {
    fragment: String,
    settings: QuizSettings,
}

impl UiApp for TestApp {
    fn catalog(&self) -> Arc<QuizCatalog> {
        Arc::new(QuizCatalog::builtin())
    }

    fn settings(&self) -> QuizSettings {
        self.settings
    }

    fn initial_fragment(&self) -> String {
        self.fragment.clone()
    }
}

#[derive(Props, Clone)]
struct PageHarnessProps {
    ctx: AppContext,
    events: Vec<AppEvent>,
    #[props(default)]
    driven: Vec<AppEvent>,
}

impl PartialEq for PageHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

/// Renders the page over a shell that has already processed `events`.
/// Their effects are dropped: no timers or focus moves run under test.
/// `driven` events go through the `ShellDriver` instead, so their effects
/// land in the driver's signals; the parked focus target is rendered into
/// `#pending-focus`.
#[component]
fn PageRoot(props: PageHarnessProps) -> Element {
    use_context_provider(|| props.ctx.clone());
    let shell = use_hook(|| {
        let mut shell = props.ctx.build_shell();
        shell.start();
        shell.dispatch(AppEvent::DocumentLoaded);
        for event in props.events.clone() {
            shell.dispatch(event);
        }
        Signal::new(shell)
    });
    let countdown = use_signal(|| None);
    let pending_focus = use_signal(|| None);
    let driver = use_context_provider(|| ShellDriver::new(shell, countdown, pending_focus));
    use_hook(|| {
        for event in props.driven.clone() {
            driver.dispatch(event);
        }
    });
    let target = driver.pending_focus().read().clone().unwrap_or_default();

    rsx! {
        Page {}
        output { id: "pending-focus", "{target}" }
    }
}

pub struct PageHarness {
    pub dom: VirtualDom,
}

impl PageHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

fn build_harness(
    fragment: &str,
    settings: QuizSettings,
    events: Vec<AppEvent>,
    driven: Vec<AppEvent>,
) -> PageHarness {
    let app: Arc<dyn UiApp> = Arc::new(TestApp {
        fragment: fragment.to_string(),
        settings,
    });
    let ctx = build_app_context(&app).expect("route table");
    let dom = VirtualDom::new_with_props(
        PageRoot,
        PageHarnessProps {
            ctx,
            events,
            driven,
        },
    );
    PageHarness { dom }
}

pub fn setup_page_harness(fragment: &str, events: Vec<AppEvent>) -> PageHarness {
    build_harness(fragment, QuizSettings::default(), events, Vec::new())
}

pub fn setup_page_harness_with_settings(
    fragment: &str,
    settings: QuizSettings,
    events: Vec<AppEvent>,
) -> PageHarness {
    build_harness(fragment, settings, events, Vec::new())
}

/// Dispatches `driven` through the `ShellDriver` after startup.
pub fn setup_driven_harness(fragment: &str, driven: Vec<AppEvent>) -> PageHarness {
    build_harness(fragment, QuizSettings::default(), Vec::new(), driven)
}
