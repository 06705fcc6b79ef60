use super::session::Session;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionView {
    pub index: usize,
    pub label: String,
    pub selected: bool,
    pub disabled: bool,
}

/// Everything the quiz panel shows for the question on screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionView {
    pub quiz_title: String,
    /// 1-based.
    pub number: usize,
    pub total: usize,
    pub prompt: String,
    pub options: Vec<OptionView>,
    pub timer_label: String,
    pub shake: u32,
}

/// Outcome of a finished attempt, kept after the session is released.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizResult {
    pub quiz_title: String,
    pub score: usize,
    pub total: usize,
}

impl QuizResult {
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "You answered {} out of {} correctly.",
            self.score, self.total
        )
    }
}

#[must_use]
pub fn render_question(session: &Session) -> Option<QuestionView> {
    let question = session.shown_question()?;
    let options = question
        .options()
        .iter()
        .enumerate()
        .map(|(index, label)| OptionView {
            index,
            label: label.clone(),
            selected: session.selected() == Some(index),
            disabled: session.is_locked(),
        })
        .collect();

    Some(QuestionView {
        quiz_title: session.quiz().title().to_string(),
        number: session.shown_index() + 1,
        total: session.total(),
        prompt: question.prompt().to_string(),
        options,
        timer_label: session.countdown().label(),
        shake: session.shake(),
    })
}
