//! Generic list screen binding

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::dispatch::UiDispatcher;
use crate::items::{Capability, Item, ItemsError, ItemsService};

/// Render callback fed exactly one outcome per refresh, on the UI thread.
pub type RenderFn = Arc<dyn Fn(Result<Vec<Item>, ItemsError>) + Send + Sync>;

/// Binds one composed items capability to a render callback.
///
/// The capability layer does not synchronize overlapping loads, so the
/// screen must not issue them: a refresh requested while one is in flight
/// is dropped.
pub struct ListScreen {
    title: &'static str,
    service: Arc<dyn ItemsService>,
    ui: UiDispatcher,
    render: RenderFn,
    refreshing: Arc<AtomicBool>,
}

impl ListScreen {
    pub fn new(
        title: &'static str,
        service: Arc<dyn ItemsService>,
        ui: UiDispatcher,
        render: RenderFn,
    ) -> Self {
        Self {
            title,
            service,
            ui,
            render,
            refreshing: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn title(&self) -> &'static str {
        self.title
    }

    /// Load once and deliver the outcome to the render callback on the UI
    /// thread. Returns whether the refresh was actually started.
    pub async fn refresh(&self) -> bool {
        if self.refreshing.swap(true, Ordering::SeqCst) {
            tracing::debug!(screen = self.title, "refresh dropped, load in flight");
            return false;
        }
        tracing::debug!(screen = self.title, service = self.service.name(), "refresh");

        let outcome = self.service.load_items().await;
        let render = self.render.clone();
        let refreshing = self.refreshing.clone();
        self.ui.run(Box::new(move || {
            render(outcome);
            refreshing.store(false, Ordering::SeqCst);
        }));
        true
    }
}
