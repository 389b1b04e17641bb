use std::env;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use companion_core::model::{GeneratedQuiz, QuizDraft};

use crate::error::QuizGenError;

/// How many questions the collaborator is asked to produce.
const REQUESTED_QUESTIONS: usize = 10;

#[derive(Clone, Debug)]
pub struct QuizGenConfig {
    pub base_url: String,
    pub api_key: String,
    pub model: String,
}

impl QuizGenConfig {
    #[must_use]
    pub fn from_env() -> Option<Self> {
        let api_key = env::var("COMPANION_AI_API_KEY").ok()?;
        if api_key.trim().is_empty() {
            return None;
        }
        let base_url = env::var("COMPANION_AI_BASE_URL")
            .unwrap_or_else(|_| "https://api.openai.com/v1".into());
        let model = env::var("COMPANION_AI_MODEL").unwrap_or_else(|_| "gpt-4o-mini".into());
        Some(Self {
            base_url,
            api_key,
            model,
        })
    }
}

/// The external AI collaborator: free-form feelings in, validated quiz out.
#[derive(Clone)]
pub struct QuizGenService {
    client: Client,
    config: Option<QuizGenConfig>,
}

impl QuizGenService {
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(QuizGenConfig::from_env())
    }

    #[must_use]
    pub fn new(config: Option<QuizGenConfig>) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    #[must_use]
    pub fn enabled(&self) -> bool {
        self.config.is_some()
    }

    /// Analyze the user's text and generate a quiz for the detected topic.
    ///
    /// # Errors
    ///
    /// Returns `QuizGenError` when the service is disabled, the request
    /// fails, or the response cannot be parsed into a valid quiz.
    pub async fn generate_quiz(&self, user_text: &str) -> Result<GeneratedQuiz, QuizGenError> {
        let config = self.config.as_ref().ok_or(QuizGenError::Disabled)?;

        let url = format!("{}/chat/completions", config.base_url.trim_end_matches('/'));
        let payload = ChatRequest {
            model: config.model.clone(),
            messages: vec![ChatMessage {
                role: "user",
                content: build_prompt(user_text),
            }],
            temperature: 0.7,
        };

        let response = self
            .client
            .post(url)
            .bearer_auth(&config.api_key)
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(QuizGenError::HttpStatus(response.status()));
        }

        let body: ChatResponse = response.json().await?;
        let content = body
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or(QuizGenError::EmptyResponse)?;

        parse_quiz_payload(&content)
    }
}

fn build_prompt(user_text: &str) -> String {
    format!(
        "You are an empathetic AI learning companion for students. A student \
         will describe how they feel about something they are studying. \
         Identify their primary emotion and the learning topic, then write a \
         fun multiple-choice quiz of exactly {REQUESTED_QUESTIONS} questions \
         that helps them engage with that topic in a positive way. Keep the \
         questions educational but light and encouraging.\n\
         The student wrote: \"{user_text}\"\n\
         Respond with JSON only, no prose, using exactly this shape:\n\
         {{\"emotion\": string, \"topic\": string, \"quizTitle\": string, \
         \"questions\": [{{\"questionText\": string, \"options\": [string, \
         string, string, string], \"correctAnswer\": string, \
         \"explanation\": string}}]}}\n\
         Each question has exactly 4 options and correctAnswer must be one \
         of them, copied verbatim."
    )
}

/// Parse the model's reply into a validated quiz.
///
/// Pure so the interesting failure modes are testable without a network.
///
/// # Errors
///
/// Returns `QuizGenError::Parse` for malformed JSON and
/// `QuizGenError::Invalid` for a payload that parses but breaks the quiz
/// contract (no questions, bad option counts, unknown correct answer).
pub fn parse_quiz_payload(content: &str) -> Result<GeneratedQuiz, QuizGenError> {
    let json = strip_code_fences(content);
    let draft: QuizDraft = serde_json::from_str(json)?;
    Ok(draft.validate()?)
}

/// Models sometimes wrap JSON in a markdown fence despite instructions.
fn strip_code_fences(content: &str) -> &str {
    let trimmed = content.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    rest.strip_suffix("```").unwrap_or(rest).trim()
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessageResponse,
}

#[derive(Debug, Deserialize)]
struct ChatMessageResponse {
    content: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use companion_core::model::QuizValidationError;

    const VALID_PAYLOAD: &str = r#"{
        "emotion": "Confusion",
        "topic": "Photosynthesis",
        "quizTitle": "Shine a Light on Photosynthesis",
        "questions": [{
            "questionText": "Where does photosynthesis happen?",
            "options": ["Chloroplasts", "Mitochondria", "Nucleus", "Ribosomes"],
            "correctAnswer": "Chloroplasts",
            "explanation": "Chloroplasts hold the chlorophyll."
        }]
    }"#;

    #[test]
    fn plain_json_parses_and_validates() {
        let quiz = parse_quiz_payload(VALID_PAYLOAD).unwrap();
        assert_eq!(quiz.emotion(), "Confusion");
        assert_eq!(quiz.topic(), "Photosynthesis");
        assert_eq!(quiz.question_count(), 1);
    }

    #[test]
    fn fenced_json_parses() {
        let fenced = format!("```json\n{VALID_PAYLOAD}\n```");
        let quiz = parse_quiz_payload(&fenced).unwrap();
        assert_eq!(quiz.topic(), "Photosynthesis");

        let bare_fence = format!("```\n{VALID_PAYLOAD}\n```");
        assert!(parse_quiz_payload(&bare_fence).is_ok());
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = parse_quiz_payload("the model rambled instead").unwrap_err();
        assert!(matches!(err, QuizGenError::Parse(_)));
    }

    #[test]
    fn empty_question_list_is_invalid() {
        let payload = r#"{"emotion": "Calm", "topic": "Math", "quizTitle": "T", "questions": []}"#;
        let err = parse_quiz_payload(payload).unwrap_err();
        assert!(matches!(
            err,
            QuizGenError::Invalid(QuizValidationError::NoQuestions)
        ));
    }

    #[test]
    fn disabled_service_reports_disabled() {
        let service = QuizGenService::new(None);
        assert!(!service.enabled());
    }

    #[test]
    fn prompt_embeds_the_user_text() {
        let prompt = build_prompt("I'm confused about photosynthesis");
        assert!(prompt.contains("I'm confused about photosynthesis"));
        assert!(prompt.contains("exactly 10 questions"));
    }
}
