use crate::model::{QuizQuestion, QuizValidationError};

/// Linear quiz-taking state machine.
///
/// Steps through a fixed ordered question list with a reveal-then-advance
/// flow: selecting an answer locks the question and scores it, `advance`
/// moves on or completes the session. Operations are total over valid
/// states: calls that make no sense in the current state are no-ops, and
/// the machine itself never errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSession {
    questions: Vec<QuizQuestion>,
    current: usize,
    selected: Option<String>,
    answered: bool,
    score: u32,
    completed: bool,
}

impl QuizSession {
    /// Start a session over `questions`, positioned on the first one.
    ///
    /// # Errors
    ///
    /// Returns `QuizValidationError::NoQuestions` for an empty list; an
    /// empty payload is the collaborator's error to report, not a state
    /// this machine represents.
    pub fn new(questions: Vec<QuizQuestion>) -> Result<Self, QuizValidationError> {
        if questions.is_empty() {
            return Err(QuizValidationError::NoQuestions);
        }
        Ok(Self {
            questions,
            current: 0,
            selected: None,
            answered: false,
            score: 0,
            completed: false,
        })
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    /// The question being shown, or `None` once results are up.
    #[must_use]
    pub fn current_question(&self) -> Option<&QuizQuestion> {
        if self.completed {
            return None;
        }
        self.questions.get(self.current)
    }

    #[must_use]
    pub fn selected_answer(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    #[must_use]
    pub fn is_answered(&self) -> bool {
        self.answered
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.completed
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Lock in `option` for the current question.
    ///
    /// No-op once the question is answered (the first pick stands), after
    /// completion, or for a string that is not one of the question's
    /// options. Scores exactly +1 on an exact match with the correct
    /// answer.
    pub fn select_answer(&mut self, option: &str) {
        if self.answered || self.completed {
            return;
        }
        let Some(question) = self.questions.get(self.current) else {
            return;
        };
        if !question.options().iter().any(|o| o == option) {
            return;
        }

        if question.is_correct(option) {
            self.score += 1;
        }
        self.selected = Some(option.to_string());
        self.answered = true;
    }

    /// Move past an answered question: next question, or completion after
    /// the last. No-op while the current question is unanswered.
    pub fn advance(&mut self) {
        if !self.answered || self.completed {
            return;
        }
        if self.current + 1 < self.questions.len() {
            self.current += 1;
            self.selected = None;
            self.answered = false;
        } else {
            self.completed = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{QuizDraft, QuizQuestionDraft};

    fn make_questions(n: usize) -> Vec<QuizQuestion> {
        let questions = (0..n)
            .map(|i| QuizQuestionDraft {
                question_text: format!("Question {i}?"),
                options: vec!["A".into(), "B".into(), "C".into(), "D".into()],
                correct_answer: "A".into(),
                explanation: format!("Because {i}."),
            })
            .collect();
        QuizDraft {
            emotion: "Curiosity".into(),
            topic: "Testing".into(),
            quiz_title: "Test Quiz".into(),
            questions,
        }
        .validate()
        .unwrap()
        .questions()
        .to_vec()
    }

    #[test]
    fn empty_question_list_is_rejected() {
        assert_eq!(
            QuizSession::new(vec![]).unwrap_err(),
            QuizValidationError::NoQuestions
        );
    }

    #[test]
    fn answering_every_question_completes_with_bounded_score() {
        let n = 10;
        let mut session = QuizSession::new(make_questions(n)).unwrap();

        for i in 0..n {
            assert_eq!(session.current_index(), i);
            // Alternate right and wrong answers.
            session.select_answer(if i % 2 == 0 { "A" } else { "B" });
            session.advance();
        }

        assert!(session.is_complete());
        assert_eq!(session.score(), 5);
        assert!(session.score() as usize <= n);
        assert!(session.current_question().is_none());
    }

    #[test]
    fn first_selection_stands() {
        let mut session = QuizSession::new(make_questions(3)).unwrap();

        session.select_answer("B");
        assert_eq!(session.selected_answer(), Some("B"));
        assert_eq!(session.score(), 0);

        // Late clicks on other options change nothing.
        session.select_answer("A");
        session.select_answer("C");
        assert_eq!(session.selected_answer(), Some("B"));
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn score_requires_exact_string_match() {
        let mut session = QuizSession::new(make_questions(2)).unwrap();

        session.select_answer("A");
        assert_eq!(session.score(), 1);
        session.advance();

        // "a" is not an option at all; the question stays open.
        session.select_answer("a");
        assert!(!session.is_answered());
        session.select_answer("D");
        assert_eq!(session.score(), 1);
    }

    #[test]
    fn advance_requires_an_answer() {
        let mut session = QuizSession::new(make_questions(2)).unwrap();

        session.advance();
        assert_eq!(session.current_index(), 0);

        session.select_answer("A");
        session.advance();
        assert_eq!(session.current_index(), 1);
        assert!(!session.is_answered());
        assert_eq!(session.selected_answer(), None);
    }

    #[test]
    fn operations_after_completion_are_no_ops() {
        let mut session = QuizSession::new(make_questions(1)).unwrap();
        session.select_answer("A");
        session.advance();
        assert!(session.is_complete());

        session.select_answer("B");
        session.advance();
        assert!(session.is_complete());
        assert_eq!(session.score(), 1);
    }
}
