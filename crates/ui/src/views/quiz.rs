use dioxus::prelude::*;

use services::QuizGenError;

use crate::context::AppContext;
use crate::views::ViewError;
use crate::vm::{OptionState, QuizVm};

/// Prefill chips shown on the input form.
const SUGGESTIONS: [&str; 4] = [
    "Algebraic Equations",
    "Photosynthesis",
    "World War II",
    "Python Loops",
];

/// The quiz flow owns the one network call in the app: submit free text,
/// await the collaborator, then hand the payload to the session machinery.
/// Leaving the view (or pressing the brand link) drops all of it.
#[component]
pub fn QuizView() -> Element {
    let ctx = use_context::<AppContext>();
    let quiz_gen = ctx.quiz_gen();

    let mut input = use_signal(String::new);
    let mut loading = use_signal(|| false);
    let mut error = use_signal(|| None::<ViewError>);
    let quiz = use_signal(|| None::<QuizVm>);

    let on_submit = {
        let mut quiz = quiz;
        move |_| {
            if loading() {
                return;
            }
            let text = input().trim().to_string();
            if text.is_empty() {
                error.set(Some(ViewError::EmptyInput));
                return;
            }
            loading.set(true);
            error.set(None);
            quiz.set(None);
            let quiz_gen = quiz_gen.clone();
            spawn(async move {
                match quiz_gen.generate_quiz(&text).await {
                    Ok(payload) => match QuizVm::new(payload) {
                        Ok(vm) => quiz.set(Some(vm)),
                        Err(_) => error.set(Some(ViewError::QuizGeneration)),
                    },
                    Err(QuizGenError::Disabled) => error.set(Some(ViewError::NotConfigured)),
                    Err(_) => error.set(Some(ViewError::QuizGeneration)),
                }
                loading.set(false);
            });
        }
    };

    // Retry and "Start a New Topic" are the same collaborator-level reset:
    // everything back to the pre-quiz input state.
    let reset_quiz = {
        let mut quiz = quiz;
        move |_| {
            quiz.set(None);
            error.set(None);
            loading.set(false);
        }
    };

    // One render path per phase. Empty input is not a phase: it renders
    // inline under the textarea; only collaborator failures get the
    // retryable panel.
    let phase = if loading() {
        QuizPhase::Loading
    } else if let Some(err) = error().filter(|err| *err != ViewError::EmptyInput) {
        QuizPhase::Failed(err)
    } else if quiz().is_some() {
        QuizPhase::Active
    } else {
        QuizPhase::Input
    };
    let inline_error = matches!(error(), Some(ViewError::EmptyInput));

    rsx! {
        div { class: "page quiz-page",
            div { class: "card",
                match phase {
                    QuizPhase::Loading => rsx! {
                        div { class: "loader",
                            div { class: "spinner" }
                            p { "Your personal quiz is being created..." }
                        }
                    },
                    QuizPhase::Failed(err) => rsx! {
                        div { class: "error-panel",
                            p { class: "error-title", "Oops! Something went wrong." }
                            p { "{err.message()}" }
                            button { class: "btn btn-danger", onclick: reset_quiz, "Try Again" }
                        }
                    },
                    QuizPhase::Active => rsx! {
                        EmotionPanel { quiz }
                        QuizFlow { quiz, on_reset: reset_quiz }
                    },
                    QuizPhase::Input => rsx! {
                        h2 { class: "view-title", "How are you feeling about your lesson?" }
                        p { class: "view-subtitle",
                            "For example: \"I'm so confused by calculus derivatives\" "
                            "or \"History dates are so hard to remember!\""
                        }
                        div { class: "suggestions",
                            p { class: "muted", "Click a topic to get started:" }
                            div { class: "chips",
                                for suggestion in SUGGESTIONS {
                                    button {
                                        class: "chip",
                                        r#type: "button",
                                        onclick: move |_| input.set(suggestion.to_string()),
                                        "{suggestion}"
                                    }
                                }
                            }
                        }
                        textarea {
                            class: "feelings-input",
                            placeholder: "Tell me what's on your mind...",
                            value: "{input}",
                            oninput: move |evt| input.set(evt.value()),
                        }
                        if inline_error {
                            p { class: "inline-error", "{ViewError::EmptyInput.message()}" }
                        }
                        button { class: "btn btn-primary btn-block", onclick: on_submit, "Analyze" }
                    },
                }
            }
        }
    }
}

/// Flat dispatch for what the quiz card is showing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum QuizPhase {
    Input,
    Loading,
    Failed(ViewError),
    Active,
}

#[component]
fn EmotionPanel(quiz: Signal<Option<QuizVm>>) -> Element {
    let Some(vm) = quiz() else { return rsx! {} };

    rsx! {
        div { class: "emotion-panel",
            p { class: "emotion-emoji", "{vm.emotion_emoji()}" }
            p {
                "It sounds like you're feeling a bit "
                strong { "{vm.emotion().to_lowercase()}" }
                " about "
                strong { "{vm.topic()}" }
                "."
            }
            p { class: "muted", "Let's try a fun quiz to help clear things up!" }
        }
    }
}

#[component]
fn QuizFlow(mut quiz: Signal<Option<QuizVm>>, on_reset: EventHandler<MouseEvent>) -> Element {
    let Some(vm) = quiz() else { return rsx! {} };

    if vm.is_complete() {
        return rsx! {
            div { class: "results",
                h3 { "{vm.title()} - Results" }
                p { class: "results-score",
                    "You scored "
                    strong { "{vm.score_label()}" }
                }
                div { class: "score-bar",
                    div { class: "score-fill", style: "width: {vm.score_percent()}%" }
                }
                button {
                    class: "btn btn-primary",
                    onclick: move |evt| on_reset.call(evt),
                    "Start a New Topic"
                }
            }
        };
    }

    rsx! {
        div { class: "quiz-header",
            h3 { "{vm.title()}" }
            span { class: "muted", "{vm.progress_label()}" }
        }
        div { class: "question-card",
            p { "{vm.question_text()}" }
        }
        div { class: "options",
            for option in vm.options() {
                button {
                    class: option_class(vm.option_state(&option)),
                    disabled: vm.is_answered(),
                    onclick: {
                        let option = option.clone();
                        move |_| {
                            if let Some(vm) = quiz.write().as_mut() {
                                vm.select(&option);
                            }
                        }
                    },
                    "{option}"
                }
            }
        }
        if vm.is_answered() {
            div { class: "feedback",
                p { class: "feedback-label", "{vm.feedback_label()}" }
                p { class: "muted", "{vm.explanation()}" }
                button {
                    class: "btn btn-primary btn-block",
                    onclick: move |_| {
                        if let Some(vm) = quiz.write().as_mut() {
                            vm.advance();
                        }
                    },
                    "{vm.advance_label()}"
                }
            }
        }
    }
}

fn option_class(state: OptionState) -> &'static str {
    match state {
        OptionState::Neutral => "option",
        OptionState::Correct => "option option-correct",
        OptionState::WrongPick => "option option-wrong",
        OptionState::Dimmed => "option option-dimmed",
    }
}
