use companion_core::QuizSession;
use companion_core::model::{GeneratedQuiz, QuizValidationError};

/// How an option button should render once the question is revealed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionState {
    /// Question still open; plain clickable button.
    Neutral,
    /// The correct answer, highlighted after answering.
    Correct,
    /// The user's pick when it was wrong.
    WrongPick,
    /// Everything else after answering.
    Dimmed,
}

/// Display adapter over a quiz payload and its session state machine.
#[derive(Clone, Debug, PartialEq)]
pub struct QuizVm {
    quiz: GeneratedQuiz,
    session: QuizSession,
}

impl QuizVm {
    /// # Errors
    ///
    /// Returns `QuizValidationError::NoQuestions` for a payload with no
    /// questions (validation upstream should have caught it already).
    pub fn new(quiz: GeneratedQuiz) -> Result<Self, QuizValidationError> {
        let session = QuizSession::new(quiz.questions().to_vec())?;
        Ok(Self { quiz, session })
    }

    #[must_use]
    pub fn title(&self) -> &str {
        self.quiz.quiz_title()
    }

    #[must_use]
    pub fn emotion(&self) -> &str {
        self.quiz.emotion()
    }

    #[must_use]
    pub fn topic(&self) -> &str {
        self.quiz.topic()
    }

    /// Emoji for the detected emotion, with a friendly fallback.
    #[must_use]
    pub fn emotion_emoji(&self) -> &'static str {
        match self.quiz.emotion().to_lowercase().as_str() {
            "frustration" => "😤",
            "confusion" => "🤔",
            "curiosity" => "🧐",
            "excitement" => "🤩",
            "boredom" => "😴",
            "stress" => "😫",
            _ => "😊",
        }
    }

    #[must_use]
    pub fn progress_label(&self) -> String {
        format!(
            "{} / {}",
            self.session.current_index() + 1,
            self.session.total_questions()
        )
    }

    #[must_use]
    pub fn question_text(&self) -> &str {
        self.session
            .current_question()
            .map_or("", |q| q.question_text())
    }

    #[must_use]
    pub fn options(&self) -> Vec<String> {
        self.session
            .current_question()
            .map_or_else(Vec::new, |q| q.options().to_vec())
    }

    #[must_use]
    pub fn explanation(&self) -> &str {
        self.session
            .current_question()
            .map_or("", |q| q.explanation())
    }

    #[must_use]
    pub fn is_answered(&self) -> bool {
        self.session.is_answered()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.session.is_complete()
    }

    #[must_use]
    pub fn answered_correctly(&self) -> bool {
        match (self.session.selected_answer(), self.session.current_question()) {
            (Some(selected), Some(question)) => question.is_correct(selected),
            _ => false,
        }
    }

    #[must_use]
    pub fn feedback_label(&self) -> &'static str {
        if self.answered_correctly() {
            "Correct! 🎉"
        } else {
            "Not quite!"
        }
    }

    #[must_use]
    pub fn is_last_question(&self) -> bool {
        self.session.current_index() + 1 == self.session.total_questions()
    }

    #[must_use]
    pub fn advance_label(&self) -> &'static str {
        if self.is_last_question() {
            "Show Results"
        } else {
            "Next Question"
        }
    }

    #[must_use]
    pub fn option_state(&self, option: &str) -> OptionState {
        if !self.session.is_answered() {
            return OptionState::Neutral;
        }
        let Some(question) = self.session.current_question() else {
            return OptionState::Neutral;
        };
        if question.is_correct(option) {
            OptionState::Correct
        } else if self.session.selected_answer() == Some(option) {
            OptionState::WrongPick
        } else {
            OptionState::Dimmed
        }
    }

    pub fn select(&mut self, option: &str) {
        self.session.select_answer(option);
    }

    pub fn advance(&mut self) {
        self.session.advance();
    }

    #[must_use]
    pub fn score_label(&self) -> String {
        format!(
            "{} out of {}",
            self.session.score(),
            self.session.total_questions()
        )
    }

    /// Score as a 0–100 percentage for the results bar.
    #[must_use]
    pub fn score_percent(&self) -> f32 {
        self.session.score() as f32 / self.session.total_questions() as f32 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use companion_core::model::{QuizDraft, QuizQuestionDraft};

    fn ten_question_vm() -> QuizVm {
        let questions = (0..10)
            .map(|i| QuizQuestionDraft {
                question_text: format!("Q{i}?"),
                options: vec!["A".into(), "B".into(), "C".into(), "D".into()],
                correct_answer: "A".into(),
                explanation: "A is right.".into(),
            })
            .collect();
        let quiz = QuizDraft {
            emotion: "Confusion".into(),
            topic: "Photosynthesis".into(),
            quiz_title: "Leaf It to Me".into(),
            questions,
        }
        .validate()
        .unwrap();
        QuizVm::new(quiz).unwrap()
    }

    #[test]
    fn six_of_ten_reads_six_out_of_ten() {
        let mut vm = ten_question_vm();
        for i in 0..10 {
            vm.select(if i < 6 { "A" } else { "B" });
            vm.advance();
        }
        assert!(vm.is_complete());
        assert_eq!(vm.score_label(), "6 out of 10");
        assert!((vm.score_percent() - 60.0).abs() < f32::EPSILON);
    }

    #[test]
    fn progress_label_is_one_based() {
        let mut vm = ten_question_vm();
        assert_eq!(vm.progress_label(), "1 / 10");
        vm.select("A");
        vm.advance();
        assert_eq!(vm.progress_label(), "2 / 10");
    }

    #[test]
    fn option_states_after_a_wrong_pick() {
        let mut vm = ten_question_vm();
        assert_eq!(vm.option_state("B"), OptionState::Neutral);

        vm.select("B");
        assert_eq!(vm.option_state("A"), OptionState::Correct);
        assert_eq!(vm.option_state("B"), OptionState::WrongPick);
        assert_eq!(vm.option_state("C"), OptionState::Dimmed);
        assert_eq!(vm.feedback_label(), "Not quite!");
    }

    #[test]
    fn advance_label_flips_on_the_last_question() {
        let mut vm = ten_question_vm();
        assert_eq!(vm.advance_label(), "Next Question");
        for _ in 0..9 {
            vm.select("A");
            vm.advance();
        }
        assert_eq!(vm.advance_label(), "Show Results");
    }

    #[test]
    fn emotion_emoji_maps_known_and_falls_back() {
        let vm = ten_question_vm();
        assert_eq!(vm.emotion_emoji(), "🤔");

        let quiz = QuizDraft {
            emotion: "Determination".into(),
            topic: "Algebra".into(),
            quiz_title: "X Marks the Spot".into(),
            questions: vec![QuizQuestionDraft {
                question_text: "Solve x + 1 = 2".into(),
                options: vec!["0".into(), "1".into(), "2".into(), "3".into()],
                correct_answer: "1".into(),
                explanation: "Subtract one.".into(),
            }],
        }
        .validate()
        .unwrap();
        assert_eq!(QuizVm::new(quiz).unwrap().emotion_emoji(), "😊");
    }
}
