use std::sync::Arc;

mod notify;

/// Best-effort completion cue. Implementations must never fail loudly.
pub trait UiNotifier: Send + Sync {
    fn interval_complete(&self);
}

pub type NotifierRef = Arc<dyn UiNotifier>;

pub use notify::{DesktopNotifier, SilentNotifier};
