use std::sync::Arc;
use std::time::Duration;

use quiz_core::QuizCatalog;
use quiz_core::model::{QuizId, QuizSettings, RouteId};
use tracing::{debug, warn};

use super::session::{QuizPhase, Session, TimerId};
use super::view::{QuestionView, QuizResult, render_question};
use crate::error::QuizError;
use crate::router::routes;

/// Side effects the engine needs its host to carry out.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EngineEffect {
    /// Start a repeating tick for `timer`.
    StartCountdown { timer: TimerId, period: Duration },
    CancelCountdown(TimerId),
    /// Call back into `feedback_elapsed` after `delay`. Never cancelled.
    ScheduleFeedback(Duration),
    Navigate(RouteId),
}

/// Owns the current quiz attempt and drives it through its phases.
pub struct QuizEngine {
    catalog: Arc<QuizCatalog>,
    settings: QuizSettings,
    session: Option<Session>,
    last_result: Option<QuizResult>,
    next_timer: u64,
}

impl QuizEngine {
    #[must_use]
    pub fn new(catalog: Arc<QuizCatalog>, settings: QuizSettings) -> Self {
        Self {
            catalog,
            settings,
            session: None,
            last_result: None,
            next_timer: 0,
        }
    }

    #[must_use]
    pub fn catalog(&self) -> &QuizCatalog {
        &self.catalog
    }

    #[must_use]
    pub fn settings(&self) -> QuizSettings {
        self.settings
    }

    #[must_use]
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    #[must_use]
    pub fn last_result(&self) -> Option<&QuizResult> {
        self.last_result.as_ref()
    }

    #[must_use]
    pub fn active_timer(&self) -> Option<TimerId> {
        self.session.as_ref().and_then(Session::timer)
    }

    #[must_use]
    pub fn phase(&self) -> QuizPhase {
        match (&self.session, &self.last_result) {
            (Some(session), _) => session.phase(),
            (None, Some(_)) => QuizPhase::Completed,
            (None, None) => QuizPhase::Idle,
        }
    }

    #[must_use]
    pub fn question_view(&self) -> Option<QuestionView> {
        self.session.as_ref().and_then(render_question)
    }

    /// Starts a fresh attempt at `quiz_id`, replacing any attempt in flight.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::NotFound` when the catalog has no such quiz; the
    /// engine is left untouched.
    pub fn start_quiz(&mut self, quiz_id: &str) -> Result<Vec<EngineEffect>, QuizError> {
        let Some(quiz) = self.catalog.get(quiz_id) else {
            warn!(quiz_id, "quiz not found");
            return Err(QuizError::NotFound {
                id: QuizId::new(quiz_id),
            });
        };

        let mut effects = Vec::new();
        self.cancel_countdown(&mut effects);
        debug!(quiz_id, questions = quiz.len(), "quiz started");
        self.session = Some(Session::new(quiz, self.settings.question_secs()));
        self.last_result = None;
        self.render_question(&mut effects);
        effects.push(EngineEffect::Navigate(RouteId::new(routes::QUIZ)));
        Ok(effects)
    }

    /// Marks `index` as the chosen option. Returns `false` when ignored.
    pub fn select_option(&mut self, index: usize) -> bool {
        let Some(session) = self.session.as_mut() else {
            return false;
        };
        if session.is_locked() {
            return false;
        }
        let in_range = session
            .shown_question()
            .is_some_and(|question| index < question.options().len());
        if !in_range {
            return false;
        }
        session.clear_shake();
        session.select(index);
        true
    }

    /// Confirms the selected option: scores it and moves on.
    ///
    /// With nothing selected this only bumps the shake counter.
    pub fn confirm(&mut self) -> Vec<EngineEffect> {
        let mut effects = Vec::new();
        let Some(session) = self.session.as_mut() else {
            return effects;
        };
        if session.is_locked() {
            return effects;
        }
        let Some(chosen) = session.selected() else {
            session.bump_shake();
            return effects;
        };

        let correct = session.lock_in(chosen);
        debug!(
            question = session.shown_index(),
            chosen,
            correct,
            "answer confirmed"
        );
        self.cancel_countdown(&mut effects);
        if self.advance(&mut effects) {
            effects.push(EngineEffect::ScheduleFeedback(self.settings.feedback_delay()));
        }
        effects
    }

    /// Delay after a confirmed answer has elapsed.
    pub fn feedback_elapsed(&mut self) -> Vec<EngineEffect> {
        let mut effects = Vec::new();
        let waiting = self
            .session
            .as_ref()
            .is_some_and(|session| session.is_locked() && !session.is_finished());
        if waiting {
            self.render_question(&mut effects);
        }
        effects
    }

    /// One countdown second elapsed for `timer`. Stale timers are ignored.
    pub fn countdown_tick(&mut self, timer: TimerId) -> Vec<EngineEffect> {
        let mut effects = Vec::new();
        let Some(session) = self.session.as_mut() else {
            return effects;
        };
        if session.timer() != Some(timer) {
            debug!(?timer, "ignoring stale countdown tick");
            return effects;
        }
        if !session.tick() {
            return effects;
        }

        debug!(question = session.shown_index(), "question timed out");
        self.cancel_countdown(&mut effects);
        if self.advance(&mut effects) {
            self.render_question(&mut effects);
        }
        effects
    }

    /// Advances past the current question. Returns `true` while questions
    /// remain; otherwise the result has been shown.
    fn advance(&mut self, effects: &mut Vec<EngineEffect>) -> bool {
        let Some(session) = self.session.as_mut() else {
            return false;
        };
        session.advance();
        if session.is_finished() {
            self.show_result(effects);
            return false;
        }
        true
    }

    fn render_question(&mut self, effects: &mut Vec<EngineEffect>) {
        self.cancel_countdown(effects);
        let timer = self.mint_timer();
        let question_secs = self.settings.question_secs();
        let Some(session) = self.session.as_mut() else {
            return;
        };
        session.show_current(timer, question_secs);
        effects.push(EngineEffect::StartCountdown {
            timer,
            period: self.settings.tick_period(),
        });
    }

    fn show_result(&mut self, effects: &mut Vec<EngineEffect>) {
        self.cancel_countdown(effects);
        let Some(session) = self.session.take() else {
            return;
        };
        let result = QuizResult {
            quiz_title: session.quiz().title().to_string(),
            score: session.score(),
            total: session.total(),
        };
        debug!(score = result.score, total = result.total, "quiz completed");
        self.last_result = Some(result);
        effects.push(EngineEffect::Navigate(RouteId::new(routes::RESULT)));
    }

    fn cancel_countdown(&mut self, effects: &mut Vec<EngineEffect>) {
        if let Some(timer) = self.session.as_mut().and_then(Session::take_timer) {
            effects.push(EngineEffect::CancelCountdown(timer));
        }
    }

    fn mint_timer(&mut self) -> TimerId {
        self.next_timer += 1;
        TimerId::new(self.next_timer)
    }
}
