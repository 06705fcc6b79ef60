mod ids;
mod quiz;
mod settings;

pub use ids::{QuizId, RouteId};
pub use quiz::{Question, QuestionError, Quiz, QuizDefinitionError};
pub use settings::{QuizSettings, SettingsError};

pub(crate) use quiz::question_at;
