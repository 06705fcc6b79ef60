use std::fmt;
use std::sync::Arc;

use quiz_core::Countdown;
use quiz_core::model::{Question, Quiz};

/// Identifies one countdown; a new id is minted for every rendered question.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

impl TimerId {
    #[must_use]
    pub fn new(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Debug for TimerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TimerId({})", self.0)
    }
}

/// Where a quiz attempt currently stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizPhase {
    Idle,
    AwaitingSelection,
    Selected,
    /// Answer confirmed; options locked until the next question renders.
    Feedback,
    Completed,
}

/// In-progress state of one quiz attempt.
///
/// `current_index` counts questions already answered or skipped, so it may
/// run ahead of `shown_index` while the confirmed answer is still on screen.
#[derive(Debug, Clone)]
pub struct Session {
    quiz: Arc<Quiz>,
    current_index: usize,
    shown_index: usize,
    score: usize,
    selected: Option<usize>,
    locked: bool,
    timer: Option<TimerId>,
    countdown: Countdown,
    shake: u32,
}

impl Session {
    pub(crate) fn new(quiz: Arc<Quiz>, question_secs: u32) -> Self {
        Self {
            quiz,
            current_index: 0,
            shown_index: 0,
            score: 0,
            selected: None,
            locked: false,
            timer: None,
            countdown: Countdown::new(question_secs),
            shake: 0,
        }
    }

    #[must_use]
    pub fn quiz(&self) -> &Quiz {
        &self.quiz
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn shown_index(&self) -> usize {
        self.shown_index
    }

    #[must_use]
    pub fn score(&self) -> usize {
        self.score
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.quiz.len()
    }

    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    #[must_use]
    pub fn timer(&self) -> Option<TimerId> {
        self.timer
    }

    #[must_use]
    pub fn countdown(&self) -> Countdown {
        self.countdown
    }

    /// Bumped every time a confirmation is attempted with nothing selected.
    #[must_use]
    pub fn shake(&self) -> u32 {
        self.shake
    }

    #[must_use]
    pub fn shown_question(&self) -> Option<&Question> {
        self.quiz.question(self.shown_index)
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.current_index >= self.quiz.len()
    }

    #[must_use]
    pub fn phase(&self) -> QuizPhase {
        if self.locked {
            QuizPhase::Feedback
        } else if self.selected.is_some() {
            QuizPhase::Selected
        } else {
            QuizPhase::AwaitingSelection
        }
    }

    pub(crate) fn show_current(&mut self, timer: TimerId, question_secs: u32) {
        self.shown_index = self.current_index;
        self.selected = None;
        self.locked = false;
        self.shake = 0;
        self.countdown = Countdown::new(question_secs);
        self.timer = Some(timer);
    }

    pub(crate) fn take_timer(&mut self) -> Option<TimerId> {
        self.timer.take()
    }

    pub(crate) fn select(&mut self, index: usize) {
        self.selected = Some(index);
    }

    pub(crate) fn clear_shake(&mut self) {
        self.shake = 0;
    }

    pub(crate) fn bump_shake(&mut self) {
        self.shake = self.shake.wrapping_add(1).max(1);
    }

    /// Scores the selected option against the shown question and locks the
    /// options. Returns whether the answer was correct.
    pub(crate) fn lock_in(&mut self, chosen: usize) -> bool {
        let correct = self
            .shown_question()
            .is_some_and(|question| question.is_correct(chosen));
        if correct {
            self.score += 1;
        }
        self.locked = true;
        correct
    }

    pub(crate) fn advance(&mut self) {
        self.current_index = (self.current_index + 1).min(self.quiz.len());
    }

    /// Consumes one countdown second. Returns `true` on expiry.
    pub(crate) fn tick(&mut self) -> bool {
        self.countdown.tick()
    }
}
