mod history;
mod quiz;

pub use history::{IntervalKind, SessionHistoryEntry};
pub use quiz::{
    GeneratedQuiz, OPTIONS_PER_QUESTION, QuizDraft, QuizQuestion, QuizQuestionDraft,
    QuizValidationError,
};
