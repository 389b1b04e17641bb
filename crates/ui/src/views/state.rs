use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    /// The user submitted an empty feelings box.
    EmptyInput,
    /// The AI collaborator failed (network, status, malformed payload).
    QuizGeneration,
    /// No API key configured.
    NotConfigured,
    Unknown,
}

impl ViewError {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            ViewError::EmptyInput => {
                "Please tell me how you're feeling about your lesson."
            }
            ViewError::QuizGeneration => {
                "Failed to generate the quiz. The AI might be busy, please try again."
            }
            ViewError::NotConfigured => {
                "Quiz generation is not configured. Set COMPANION_AI_API_KEY and restart."
            }
            ViewError::Unknown => "Something went wrong. Please try again.",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ViewState<T> {
    Idle,
    Loading,
    Ready(T),
    Error(ViewError),
}

#[must_use]
pub fn view_state_from_resource<T: Clone>(
    resource: &Resource<Result<T, ViewError>>,
) -> ViewState<T> {
    match resource.state().cloned() {
        UseResourceState::Pending => ViewState::Loading,
        UseResourceState::Ready => match resource.value().read().as_ref() {
            Some(Ok(data)) => ViewState::Ready(data.clone()),
            Some(Err(err)) => ViewState::Error(*err),
            None => ViewState::Error(ViewError::Unknown),
        },
        UseResourceState::Paused | UseResourceState::Stopped => ViewState::Idle,
    }
}
