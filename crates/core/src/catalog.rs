use std::sync::Arc;

use serde::Deserialize;
use thiserror::Error;

use crate::model::{Question, Quiz, QuizDefinitionError, QuizId, question_at};

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("catalog must contain at least one quiz")]
    Empty,

    #[error("duplicate quiz id: {0}")]
    DuplicateQuiz(QuizId),

    #[error("quiz {id} is invalid: {source}")]
    Quiz {
        id: QuizId,
        #[source]
        source: QuizDefinitionError,
    },

    #[error("catalog json is malformed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Static mapping from quiz id to quiz, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizCatalog {
    quizzes: Vec<Arc<Quiz>>,
}

#[derive(Debug, Deserialize)]
struct QuizRecord {
    id: QuizId,
    title: String,
    questions: Vec<QuestionRecord>,
}

#[derive(Debug, Deserialize)]
struct QuestionRecord {
    prompt: String,
    options: Vec<String>,
    correct_index: usize,
}

impl QuizCatalog {
    /// Builds a catalog, rejecting duplicate ids.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Empty` or `CatalogError::DuplicateQuiz`.
    pub fn new(quizzes: Vec<Quiz>) -> Result<Self, CatalogError> {
        if quizzes.is_empty() {
            return Err(CatalogError::Empty);
        }
        let mut shared: Vec<Arc<Quiz>> = Vec::with_capacity(quizzes.len());
        for quiz in quizzes {
            if shared.iter().any(|existing| existing.id() == quiz.id()) {
                return Err(CatalogError::DuplicateQuiz(quiz.id().clone()));
            }
            shared.push(quiz.into_shared());
        }
        Ok(Self { quizzes: shared })
    }

    /// Parses a catalog from its JSON form.
    ///
    /// ```json
    /// [{"id": "gk", "title": "General Knowledge",
    ///   "questions": [{"prompt": "...", "options": ["a", "b"], "correct_index": 0}]}]
    /// ```
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` for malformed JSON or any invalid quiz/question.
    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let records: Vec<QuizRecord> = serde_json::from_str(raw)?;
        let quizzes = records
            .into_iter()
            .map(QuizRecord::into_quiz)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(quizzes)
    }

    /// The three quizzes shipped with the app: `gk`, `web` and `science`.
    ///
    /// # Panics
    ///
    /// Panics if the built-in data violates a model invariant.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(builtin_quizzes().expect("built-in quizzes should be valid"))
            .expect("built-in quiz ids should be unique")
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<Arc<Quiz>> {
        self.quizzes
            .iter()
            .find(|quiz| quiz.id().as_str() == id)
            .cloned()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<Quiz>> {
        self.quizzes.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.quizzes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.quizzes.is_empty()
    }
}

impl QuizRecord {
    fn into_quiz(self) -> Result<Quiz, CatalogError> {
        let id = self.id;
        let questions = self
            .questions
            .into_iter()
            .enumerate()
            .map(|(index, record)| {
                Question::new(record.prompt, record.options, record.correct_index)
                    .map_err(|source| QuizDefinitionError::Question { index, source })
            })
            .collect::<Result<Vec<_>, _>>();
        questions
            .and_then(|questions| Quiz::new(id.clone(), self.title, questions))
            .map_err(|source| CatalogError::Quiz { id, source })
    }
}

fn builtin_quizzes() -> Result<Vec<Quiz>, QuizDefinitionError> {
    Ok(vec![
        Quiz::new(
            QuizId::new("gk"),
            "General Knowledge",
            vec![
                question_at(
                    0,
                    "What is the capital of France?",
                    &["Paris", "Rome", "Madrid", "Lisbon"],
                    0,
                )?,
                question_at(
                    1,
                    "Which planet is known as the Red Planet?",
                    &["Venus", "Mars", "Jupiter", "Saturn"],
                    1,
                )?,
                question_at(2, "What is 5 × 6?", &["11", "30", "56", "25"], 1)?,
            ],
        )?,
        Quiz::new(
            QuizId::new("web"),
            "Web Development",
            vec![
                question_at(
                    0,
                    "Which tag is used for the largest heading in HTML?",
                    &["<h6>", "<h1>", "<header>", "<title>"],
                    1,
                )?,
                question_at(
                    1,
                    "Which CSS property changes text color?",
                    &["background", "color", "font", "text-color"],
                    1,
                )?,
            ],
        )?,
        Quiz::new(
            QuizId::new("science"),
            "Science",
            vec![
                question_at(
                    0,
                    "Water freezes at what temperature (°C)?",
                    &["0", "100", "-10", "32"],
                    0,
                )?,
                question_at(1, "Sun is a: ", &["Planet", "Star", "Asteroid", "Comet"], 1)?,
            ],
        )?,
    ])
}
