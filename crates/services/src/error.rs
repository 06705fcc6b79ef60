//! Shared error types for the services crate.

use thiserror::Error;

use quiz_core::model::{QuizId, RouteId};

/// Errors emitted by the quiz engine.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error("Quiz not found")]
    NotFound { id: QuizId },
}

/// Errors emitted while building the route table.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RouterError {
    #[error("route declared by more than one panel: {0}")]
    DuplicateRoute(RouteId),
    #[error("welcome route is not declared by any panel: {0}")]
    MissingWelcome(RouteId),
    #[error("alias target is not a declared route: {0}")]
    UnknownAliasTarget(RouteId),
}
