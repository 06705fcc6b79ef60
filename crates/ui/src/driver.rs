use std::time::Duration;

use dioxus::core::Task;
use dioxus::document::eval;
use dioxus::prelude::*;
use services::{AppEvent, QuizShell, ShellEffect, TimerId};
use tracing::debug;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RunningCountdown {
    timer: TimerId,
    task: Task,
}

/// Feeds page events into the shell and carries out the effects it returns.
///
/// At most one countdown task is alive; it is cancelled before another starts.
/// Focus requests are parked in `pending_focus` and applied after the next
/// render, once the target panel is visible.
#[derive(Clone, Copy, PartialEq)]
pub struct ShellDriver {
    shell: Signal<QuizShell>,
    countdown: Signal<Option<RunningCountdown>>,
    pending_focus: Signal<Option<String>>,
}

impl ShellDriver {
    #[must_use]
    pub fn new(
        shell: Signal<QuizShell>,
        countdown: Signal<Option<RunningCountdown>>,
        pending_focus: Signal<Option<String>>,
    ) -> Self {
        Self {
            shell,
            countdown,
            pending_focus,
        }
    }

    #[must_use]
    pub fn shell(&self) -> Signal<QuizShell> {
        self.shell
    }

    #[must_use]
    pub fn pending_focus(&self) -> Signal<Option<String>> {
        self.pending_focus
    }

    /// Moves focus to the parked target, if any. Call from a `use_effect`
    /// so it runs after the DOM reflects the active panel.
    pub fn apply_pending_focus(self) {
        let mut pending_focus = self.pending_focus;
        let Some(element_id) = pending_focus() else {
            return;
        };
        pending_focus.set(None);
        focus_without_scroll(&element_id);
    }

    pub fn dispatch(self, event: AppEvent) {
        let mut shell = self.shell;
        let effects = shell.write().dispatch(event);
        self.run(effects);
    }

    pub fn back(self) {
        let mut shell = self.shell;
        let moved = shell.write().history_mut().back();
        if moved {
            self.dispatch(AppEvent::FragmentChanged);
        }
    }

    pub fn forward(self) {
        let mut shell = self.shell;
        let moved = shell.write().history_mut().forward();
        if moved {
            self.dispatch(AppEvent::FragmentChanged);
        }
    }

    pub fn run(self, effects: Vec<ShellEffect>) {
        for effect in effects {
            match effect {
                ShellEffect::StartCountdown { timer, period } => self.start_countdown(timer, period),
                ShellEffect::CancelCountdown(timer) => self.cancel_countdown(timer),
                ShellEffect::ScheduleFeedback(delay) => {
                    spawn(async move {
                        tokio::time::sleep(delay).await;
                        self.dispatch(AppEvent::FeedbackElapsed);
                    });
                }
                ShellEffect::Focus(element_id) => {
                    let mut pending_focus = self.pending_focus;
                    pending_focus.set(Some(element_id));
                }
            }
        }
    }

    fn start_countdown(self, timer: TimerId, period: Duration) {
        let mut countdown = self.countdown;
        if let Some(running) = countdown.write().take() {
            running.task.cancel();
        }
        let task = spawn(async move {
            let mut interval = tokio::time::interval(period);
            // The first tick completes immediately.
            interval.tick().await;
            loop {
                interval.tick().await;
                self.dispatch(AppEvent::CountdownTick(timer));
                if !self.owns_countdown(timer) {
                    break;
                }
            }
        });
        debug!(?timer, "countdown started");
        countdown.set(Some(RunningCountdown { timer, task }));
    }

    fn owns_countdown(self, timer: TimerId) -> bool {
        self.countdown
            .peek()
            .is_some_and(|running| running.timer == timer)
    }

    fn cancel_countdown(self, timer: TimerId) {
        let mut countdown = self.countdown;
        let running = *countdown.peek();
        if let Some(running) = running.filter(|running| running.timer == timer) {
            running.task.cancel();
            countdown.set(None);
            debug!(?timer, "countdown cancelled");
        }
    }
}

fn focus_without_scroll(element_id: &str) {
    let js = format!(
        "document.getElementById({element_id:?})?.focus({{ preventScroll: true }});"
    );
    let _ = eval(&js);
}
