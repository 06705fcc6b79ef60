#![forbid(unsafe_code)]

pub mod error;
pub mod quiz;
pub mod router;
pub mod shell;

pub use error::{QuizError, RouterError};
pub use quiz::{
    EngineEffect, OptionView, QuestionView, QuizEngine, QuizPhase, QuizResult, Session, TimerId,
};
pub use router::{History, MemoryHistory, Navigation, PanelDecl, RouteTable, Router, routes};
pub use shell::{AppEvent, QuizShell, ShellEffect};
