mod quiz_vm;
mod timer_vm;

pub use quiz_vm::{OptionState, QuizVm};
pub use timer_vm::TimerVm;
