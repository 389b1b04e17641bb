use std::sync::Arc;

use companion_core::timer::TimerConfig;
use services::{HistoryService, QuizGenService};

use crate::platform::NotifierRef;

/// What the composition root must hand the views.
pub trait UiApp: Send + Sync {
    fn quiz_gen(&self) -> Arc<QuizGenService>;
    fn history(&self) -> Arc<HistoryService>;
    fn timer_config(&self) -> TimerConfig;
    fn notifier(&self) -> NotifierRef;
}

#[derive(Clone)]
pub struct AppContext {
    quiz_gen: Arc<QuizGenService>,
    history: Arc<HistoryService>,
    timer_config: TimerConfig,
    notifier: NotifierRef,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            quiz_gen: app.quiz_gen(),
            history: app.history(),
            timer_config: app.timer_config(),
            notifier: app.notifier(),
        }
    }

    #[must_use]
    pub fn quiz_gen(&self) -> Arc<QuizGenService> {
        Arc::clone(&self.quiz_gen)
    }

    #[must_use]
    pub fn history(&self) -> Arc<HistoryService> {
        Arc::clone(&self.history)
    }

    #[must_use]
    pub fn timer_config(&self) -> TimerConfig {
        self.timer_config
    }

    #[must_use]
    pub fn notifier(&self) -> NotifierRef {
        Arc::clone(&self.notifier)
    }
}

// This context is provided by the application composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
