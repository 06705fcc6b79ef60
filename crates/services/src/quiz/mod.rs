mod engine;
mod session;
mod view;

// Public API of the quiz subsystem.
pub use crate::error::QuizError;
pub use engine::{EngineEffect, QuizEngine};
pub use session::{QuizPhase, Session, TimerId};
pub use view::{OptionView, QuestionView, QuizResult, render_question};
