#![forbid(unsafe_code)]

pub mod error;
pub mod history_service;
pub mod quiz_gen_service;

pub use companion_core::Clock;

pub use error::QuizGenError;
pub use history_service::HistoryService;
pub use quiz_gen_service::{QuizGenConfig, QuizGenService};
