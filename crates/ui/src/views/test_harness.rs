use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};

use companion_core::timer::TimerConfig;
use services::{HistoryService, QuizGenService};
use storage::repository::InMemorySnapshots;

use crate::context::{UiApp, build_app_context};
use crate::platform::{NotifierRef, SilentNotifier};
use crate::views::{HomeView, QuizView, TimerView};

#[derive(Clone)]
struct TestApp {
    quiz_gen: Arc<QuizGenService>,
    history: Arc<HistoryService>,
    timer_config: TimerConfig,
}

impl UiApp for TestApp {
    fn quiz_gen(&self) -> Arc<QuizGenService> {
        Arc::clone(&self.quiz_gen)
    }

    fn history(&self) -> Arc<HistoryService> {
        Arc::clone(&self.history)
    }

    fn timer_config(&self) -> TimerConfig {
        self.timer_config
    }

    fn notifier(&self) -> NotifierRef {
        Arc::new(SilentNotifier)
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Home,
    Quiz,
    Timer,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view);
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Home => rsx! { HomeView {} },
        ViewKind::Quiz => rsx! { QuizView {} },
        ViewKind::Timer => rsx! { TimerView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub snapshots: InMemorySnapshots,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(view: ViewKind) -> ViewHarness {
    setup_view_harness_with_snapshots(view, InMemorySnapshots::new())
}

pub fn setup_view_harness_with_snapshots(
    view: ViewKind,
    snapshots: InMemorySnapshots,
) -> ViewHarness {
    let app = Arc::new(TestApp {
        quiz_gen: Arc::new(QuizGenService::new(None)),
        history: Arc::new(HistoryService::new(Arc::new(snapshots.clone()))),
        timer_config: TimerConfig::default(),
    });

    let dom = VirtualDom::new_with_props(ViewRouterHarness, ViewHarnessProps { app, view });
    ViewHarness { dom, snapshots }
}
