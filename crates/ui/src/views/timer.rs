use std::sync::Arc;
use std::time::Duration;

use dioxus::prelude::*;

use companion_core::Clock;
use companion_core::model::{IntervalKind, SessionHistoryEntry};

use crate::context::AppContext;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::TimerVm;

/// Focus timer with a persisted session log.
///
/// The one-second tick is a spawned sleep loop whose `Task` handle lives in
/// a signal: every start cancels the previous handle first and completion
/// ends the loop. At most one tick source is ever alive, so pausing twice
/// or remounting cannot double-decrement the countdown.
#[component]
pub fn TimerView() -> Element {
    let ctx = use_context::<AppContext>();
    let history_service = ctx.history();
    let notifier = ctx.notifier();
    let timer_config = ctx.timer_config();

    let mut vm = use_signal(move || TimerVm::new(timer_config, Clock::default_clock()));
    let mut tick_task = use_signal(|| None::<Task>);
    let mut history_seeded = use_signal(|| false);

    // The snapshot is read once at startup; afterwards the vm's list is the
    // source of truth and every mutation is written back in full.
    let history_for_resource = history_service.clone();
    let resource = use_resource(move || {
        let history = history_for_resource.clone();
        async move { Ok::<_, ViewError>(history.load().await) }
    });
    let load_state = view_state_from_resource(&resource);

    use_effect(move || {
        let loaded = resource
            .value()
            .read()
            .as_ref()
            .and_then(|value| value.as_ref().ok())
            .cloned();
        if let Some(entries) = loaded {
            if !history_seeded() {
                history_seeded.set(true);
                vm.write().set_history(entries);
            }
        }
    });

    let history_for_toggle = history_service.clone();
    let on_toggle = move |_| {
        stop_tick(tick_task);
        let now_running = {
            let mut guard = vm.write();
            guard.toggle();
            guard.is_running()
        };
        if !now_running {
            return;
        }

        let history = history_for_toggle.clone();
        let notifier = Arc::clone(&notifier);
        let task = spawn(async move {
            loop {
                tokio::time::sleep(Duration::from_secs(1)).await;
                if vm.write().tick().is_some() {
                    // Interval done: engine parked itself, cue and persist.
                    notifier.interval_complete();
                    let entries = vm.read().history().to_vec();
                    history.save(&entries).await;
                    break;
                }
            }
        });
        tick_task.set(Some(task));
    };

    let on_reset = move |_| {
        stop_tick(tick_task);
        vm.write().reset();
    };

    let history_for_clear = history_service.clone();
    let on_clear = move |_| {
        vm.write().clear_history();
        let history = history_for_clear.clone();
        spawn(async move {
            history.clear().await;
        });
    };

    use_drop(move || stop_tick(tick_task));

    let current = vm();
    rsx! {
        div { class: "page timer-page",
            div { class: "card timer-card",
                h2 {
                    class: if current.in_work_mode() { "timer-title work" } else { "timer-title break" },
                    "{current.mode_title()}"
                }
                div { class: "timer-clock", "{current.remaining_label()}" }
                div { class: "progress-track",
                    div { class: "progress-fill", style: "width: {current.progress_percent()}%" }
                }
                div { class: "timer-controls",
                    button { class: "btn btn-primary", onclick: on_toggle, "{current.toggle_label()}" }
                    button { class: "btn btn-secondary", onclick: on_reset, "Reset" }
                }

                div { class: "history",
                    div { class: "history-header",
                        h3 { "Session History" }
                        if current.has_history() {
                            button { class: "link-button", onclick: on_clear, "Clear" }
                        }
                    }
                    if matches!(load_state, ViewState::Loading) {
                        p { class: "muted", "Loading..." }
                    } else if current.has_history() {
                        ul { class: "history-list",
                            for entry in current.history().iter().cloned() {
                                HistoryRow { entry }
                            }
                        }
                    } else {
                        p { class: "muted", "No completed sessions yet. Start the timer to begin!" }
                    }
                }
            }
        }
    }
}

fn stop_tick(mut tick_task: Signal<Option<Task>>) {
    if let Some(task) = tick_task.take() {
        task.cancel();
    }
}

#[component]
fn HistoryRow(entry: SessionHistoryEntry) -> Element {
    let kind_class = match entry.kind() {
        IntervalKind::Focus => "history-kind focus",
        IntervalKind::Break => "history-kind break",
    };

    rsx! {
        li { class: "history-item",
            span { class: kind_class, "{entry.kind().label()}" }
            span { "{entry.duration()}" }
            span { class: "muted", "{entry.completed_at()}" }
        }
    }
}
