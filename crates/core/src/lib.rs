#![forbid(unsafe_code)]

pub mod model;
pub mod quiz_session;
pub mod time;
pub mod timer;

pub use quiz_session::QuizSession;
pub use time::Clock;
pub use timer::{TimerConfig, TimerEngine, TimerMode};
