use serde::Deserialize;
use thiserror::Error;

/// Every question carries this many answer options.
pub const OPTIONS_PER_QUESTION: usize = 4;

//
// ─── VALIDATION ERRORS ─────────────────────────────────────────────────────────
//

/// Errors raised while validating an AI-generated quiz payload.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizValidationError {
    #[error("quiz has no questions")]
    NoQuestions,

    #[error("question {index}: expected {OPTIONS_PER_QUESTION} options, got {count}")]
    WrongOptionCount { index: usize, count: usize },

    #[error("question {index}: correct answer is not one of the options")]
    CorrectAnswerNotAnOption { index: usize },

    #[error("question {index}: question text is empty")]
    EmptyQuestionText { index: usize },

    #[error("question {index}: option {option} is empty")]
    EmptyOption { index: usize, option: usize },
}

//
// ─── WIRE DRAFTS ───────────────────────────────────────────────────────────────
//

/// Serde shape of one question as the collaborator returns it.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestionDraft {
    pub question_text: String,
    pub options: Vec<String>,
    pub correct_answer: String,
    pub explanation: String,
}

/// Serde shape of the full collaborator payload.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizDraft {
    pub emotion: String,
    pub topic: String,
    pub quiz_title: String,
    pub questions: Vec<QuizQuestionDraft>,
}

impl QuizQuestionDraft {
    fn validate(self, index: usize) -> Result<QuizQuestion, QuizValidationError> {
        if self.question_text.trim().is_empty() {
            return Err(QuizValidationError::EmptyQuestionText { index });
        }
        if self.options.len() != OPTIONS_PER_QUESTION {
            return Err(QuizValidationError::WrongOptionCount {
                index,
                count: self.options.len(),
            });
        }
        if let Some(option) = self.options.iter().position(|o| o.trim().is_empty()) {
            return Err(QuizValidationError::EmptyOption { index, option });
        }
        // Membership is exact string equality; scoring later uses the same rule.
        if !self.options.iter().any(|o| *o == self.correct_answer) {
            return Err(QuizValidationError::CorrectAnswerNotAnOption { index });
        }

        Ok(QuizQuestion {
            question_text: self.question_text,
            options: self.options,
            correct_answer: self.correct_answer,
            explanation: self.explanation,
        })
    }
}

impl QuizDraft {
    /// Validate the raw payload into an immutable `GeneratedQuiz`.
    ///
    /// # Errors
    ///
    /// Returns `QuizValidationError` when the question list is empty or any
    /// question is malformed (option count, unknown correct answer, blank
    /// text).
    pub fn validate(self) -> Result<GeneratedQuiz, QuizValidationError> {
        if self.questions.is_empty() {
            return Err(QuizValidationError::NoQuestions);
        }

        let mut questions = Vec::with_capacity(self.questions.len());
        for (index, draft) in self.questions.into_iter().enumerate() {
            questions.push(draft.validate(index)?);
        }

        Ok(GeneratedQuiz {
            emotion: self.emotion,
            topic: self.topic,
            quiz_title: self.quiz_title,
            questions,
        })
    }
}

//
// ─── VALIDATED TYPES ───────────────────────────────────────────────────────────
//

/// One multiple-choice question. Immutable once validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizQuestion {
    question_text: String,
    options: Vec<String>,
    correct_answer: String,
    explanation: String,
}

impl QuizQuestion {
    #[must_use]
    pub fn question_text(&self) -> &str {
        &self.question_text
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn correct_answer(&self) -> &str {
        &self.correct_answer
    }

    #[must_use]
    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    /// Exact, case-sensitive match against the correct answer.
    #[must_use]
    pub fn is_correct(&self, option: &str) -> bool {
        self.correct_answer == option
    }
}

/// A validated quiz payload from the AI collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedQuiz {
    emotion: String,
    topic: String,
    quiz_title: String,
    questions: Vec<QuizQuestion>,
}

impl GeneratedQuiz {
    #[must_use]
    pub fn emotion(&self) -> &str {
        &self.emotion
    }

    #[must_use]
    pub fn topic(&self) -> &str {
        &self.topic
    }

    #[must_use]
    pub fn quiz_title(&self) -> &str {
        &self.quiz_title
    }

    #[must_use]
    pub fn questions(&self) -> &[QuizQuestion] {
        &self.questions
    }

    #[must_use]
    pub fn question_count(&self) -> usize {
        self.questions.len()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    fn question_draft(correct: &str) -> QuizQuestionDraft {
        QuizQuestionDraft {
            question_text: "What do plants absorb from sunlight?".into(),
            options: vec!["Energy".into(), "Soil".into(), "Wind".into(), "Salt".into()],
            correct_answer: correct.into(),
            explanation: "Light energy drives photosynthesis.".into(),
        }
    }

    fn draft_with(questions: Vec<QuizQuestionDraft>) -> QuizDraft {
        QuizDraft {
            emotion: "Confusion".into(),
            topic: "Photosynthesis".into(),
            quiz_title: "Shine a Light on Photosynthesis".into(),
            questions,
        }
    }

    #[test]
    fn valid_draft_passes() {
        let quiz = draft_with(vec![question_draft("Energy")]).validate().unwrap();
        assert_eq!(quiz.emotion(), "Confusion");
        assert_eq!(quiz.question_count(), 1);
        assert!(quiz.questions()[0].is_correct("Energy"));
    }

    #[test]
    fn empty_question_list_fails() {
        let err = draft_with(vec![]).validate().unwrap_err();
        assert_eq!(err, QuizValidationError::NoQuestions);
    }

    #[test]
    fn wrong_option_count_fails() {
        let mut q = question_draft("Energy");
        q.options.pop();
        let err = draft_with(vec![q]).validate().unwrap_err();
        assert_eq!(err, QuizValidationError::WrongOptionCount { index: 0, count: 3 });
    }

    #[test]
    fn correct_answer_must_be_an_option() {
        let err = draft_with(vec![question_draft("Chlorophyll")])
            .validate()
            .unwrap_err();
        assert_eq!(err, QuizValidationError::CorrectAnswerNotAnOption { index: 0 });
    }

    #[test]
    fn correct_answer_match_is_case_sensitive() {
        let err = draft_with(vec![question_draft("energy")]).validate().unwrap_err();
        assert_eq!(err, QuizValidationError::CorrectAnswerNotAnOption { index: 0 });
    }

    #[test]
    fn blank_question_text_fails() {
        let mut q = question_draft("Energy");
        q.question_text = "   ".into();
        let err = draft_with(vec![q]).validate().unwrap_err();
        assert_eq!(err, QuizValidationError::EmptyQuestionText { index: 0 });
    }

    #[test]
    fn camel_case_payload_deserializes() {
        let json = r#"{
            "emotion": "Curiosity",
            "topic": "Rust",
            "quizTitle": "Borrow Checker Basics",
            "questions": [{
                "questionText": "Who owns a moved value?",
                "options": ["The caller", "The new binding", "Both", "Neither"],
                "correctAnswer": "The new binding",
                "explanation": "Moves transfer ownership."
            }]
        }"#;
        let draft: QuizDraft = serde_json::from_str(json).unwrap();
        let quiz = draft.validate().unwrap();
        assert_eq!(quiz.quiz_title(), "Borrow Checker Basics");
        assert_eq!(quiz.questions()[0].correct_answer(), "The new binding");
    }
}
