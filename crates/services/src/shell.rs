use std::time::Duration;

use tracing::{debug, warn};

use crate::quiz::{EngineEffect, QuizEngine, TimerId};
use crate::router::{History, MemoryHistory, Navigation, Router, routes};

/// Everything the page can report to the shell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppEvent {
    /// A control tagged with a route was clicked.
    Navigate(String),
    /// A "start quiz" control carrying a quiz id was clicked.
    StartQuiz(String),
    SelectOption(usize),
    Confirm,
    CountdownTick(TimerId),
    FeedbackElapsed,
    /// The location fragment changed underneath us (back/forward).
    FragmentChanged,
    /// The page finished loading.
    DocumentLoaded,
    DismissNotice,
}

/// Work the host has to perform after a dispatch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ShellEffect {
    StartCountdown { timer: TimerId, period: Duration },
    CancelCountdown(TimerId),
    ScheduleFeedback(Duration),
    /// Move keyboard focus to this element without scrolling.
    Focus(String),
}

/// Connects the router and the quiz engine behind a single dispatcher.
pub struct QuizShell<H: History = MemoryHistory> {
    router: Router<H>,
    engine: QuizEngine,
    notice: Option<String>,
}

impl<H: History> QuizShell<H> {
    #[must_use]
    pub fn new(router: Router<H>, engine: QuizEngine) -> Self {
        Self {
            router,
            engine,
            notice: None,
        }
    }

    /// Activates the panel named by the initial fragment.
    pub fn start(&mut self) -> Vec<ShellEffect> {
        let mut effects = Vec::new();
        let navigation = self.router.start();
        self.settle(navigation, &mut effects);
        effects
    }

    pub fn dispatch(&mut self, event: AppEvent) -> Vec<ShellEffect> {
        debug!(?event, "dispatch");
        let mut effects = Vec::new();
        match event {
            AppEvent::Navigate(route) => {
                let navigation = self.router.navigate(&route, false);
                self.settle(navigation, &mut effects);
            }
            AppEvent::StartQuiz(quiz_id) => match self.engine.start_quiz(&quiz_id) {
                Ok(engine_effects) => {
                    self.notice = None;
                    self.apply(engine_effects, &mut effects);
                }
                Err(err) => {
                    warn!(%err, quiz_id, "cannot start quiz");
                    self.notice = Some(err.to_string());
                }
            },
            AppEvent::SelectOption(index) => {
                self.engine.select_option(index);
            }
            AppEvent::Confirm => {
                let engine_effects = self.engine.confirm();
                self.apply(engine_effects, &mut effects);
            }
            AppEvent::CountdownTick(timer) => {
                let engine_effects = self.engine.countdown_tick(timer);
                self.apply(engine_effects, &mut effects);
            }
            AppEvent::FeedbackElapsed => {
                let engine_effects = self.engine.feedback_elapsed();
                self.apply(engine_effects, &mut effects);
            }
            AppEvent::FragmentChanged => {
                let navigation = self.router.on_fragment_change();
                self.settle(navigation, &mut effects);
            }
            AppEvent::DocumentLoaded => {
                let navigation = self.router.validate_after_load().unwrap_or_else(|| {
                    Navigation {
                        active: self.router.active().cloned(),
                        focus: None,
                    }
                });
                self.settle(navigation, &mut effects);
            }
            AppEvent::DismissNotice => {
                self.notice = None;
            }
        }
        effects
    }

    #[must_use]
    pub fn router(&self) -> &Router<H> {
        &self.router
    }

    #[must_use]
    pub fn engine(&self) -> &QuizEngine {
        &self.engine
    }

    #[must_use]
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    #[must_use]
    pub fn is_active(&self, route: &str) -> bool {
        self.router.is_active(route)
    }

    pub fn history_mut(&mut self) -> &mut H {
        self.router.history_mut()
    }

    fn apply(&mut self, engine_effects: Vec<EngineEffect>, effects: &mut Vec<ShellEffect>) {
        for effect in engine_effects {
            match effect {
                EngineEffect::StartCountdown { timer, period } => {
                    effects.push(ShellEffect::StartCountdown { timer, period });
                }
                EngineEffect::CancelCountdown(timer) => {
                    effects.push(ShellEffect::CancelCountdown(timer));
                }
                EngineEffect::ScheduleFeedback(delay) => {
                    effects.push(ShellEffect::ScheduleFeedback(delay));
                }
                EngineEffect::Navigate(route) => {
                    let navigation = self.router.navigate(route.as_str(), false);
                    self.settle(navigation, effects);
                }
            }
        }
    }

    /// Redirects panels that make no sense without quiz state, then queues
    /// the focus move.
    fn settle(&mut self, navigation: Navigation, effects: &mut Vec<ShellEffect>) {
        let orphaned = navigation.active.as_ref().is_some_and(|active| {
            (active == routes::QUIZ && self.engine.session().is_none())
                || (active == routes::RESULT && self.engine.last_result().is_none())
        });
        let navigation = if orphaned {
            debug!(route = ?navigation.active, "no quiz state for panel, redirecting");
            let welcome = self.router.table().welcome().as_str().to_string();
            self.router.navigate(&welcome, true)
        } else {
            navigation
        };

        if let Some(focus) = navigation.focus {
            effects.push(ShellEffect::Focus(focus));
        }
    }
}
