use services::{OptionView, QuizPhase};

#[must_use]
pub fn option_element_id(index: usize) -> String {
    format!("option-{index}")
}

#[must_use]
pub fn start_button_id(quiz_id: &str) -> String {
    format!("start-{quiz_id}")
}

#[must_use]
pub fn option_class(option: &OptionView) -> &'static str {
    if option.selected {
        "option selected"
    } else {
        "option"
    }
}

/// Alternates between two animation classes so every failed confirm replays
/// the shake.
#[must_use]
pub fn options_class(shake: u32) -> &'static str {
    match shake {
        0 => "options",
        n if n % 2 == 1 => "options shake shake-odd",
        _ => "options shake shake-even",
    }
}

#[must_use]
pub fn phase_label(phase: QuizPhase) -> &'static str {
    match phase {
        QuizPhase::Idle => "No quiz in progress",
        QuizPhase::AwaitingSelection => "Waiting for an answer",
        QuizPhase::Selected => "Answer selected",
        QuizPhase::Feedback => "Moving to the next question",
        QuizPhase::Completed => "Quiz finished",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shake_class_alternates() {
        assert_eq!(options_class(0), "options");
        assert_eq!(options_class(1), "options shake shake-odd");
        assert_eq!(options_class(2), "options shake shake-even");
    }

    #[test]
    fn selected_option_is_marked() {
        let option = OptionView {
            index: 2,
            label: "Mars".into(),
            selected: true,
            disabled: false,
        };
        assert_eq!(option_class(&option), "option selected");
        assert_eq!(option_element_id(option.index), "option-2");
    }
}
