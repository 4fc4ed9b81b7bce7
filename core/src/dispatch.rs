//! UI-context dispatch
//!
//! Loads complete on runtime worker threads; everything that touches screen
//! state funnels through here so it is observed on the one thread that owns
//! the screens. A job scheduled from the UI thread itself runs inline; from
//! any other thread it is queued and runs when the owning loop drains it.

use std::thread::{self, ThreadId};

use tokio::sync::mpsc;

/// A unit of work bound for the UI thread.
pub type Job = Box<dyn FnOnce() + Send>;

/// Create a dispatch pair owned by the calling thread.
///
/// The calling thread becomes the UI context: it keeps the [`UiQueue`] and
/// drains it, while [`UiDispatcher`] handles travel into adapters, screens
/// and worker tasks.
pub fn ui_channel() -> (UiDispatcher, UiQueue) {
    let (tx, rx) = mpsc::unbounded_channel();
    (
        UiDispatcher {
            ui_thread: thread::current().id(),
            tx,
        },
        UiQueue { rx },
    )
}

/// Handle for scheduling work onto the UI thread. Cheap to clone.
#[derive(Clone)]
pub struct UiDispatcher {
    ui_thread: ThreadId,
    tx: mpsc::UnboundedSender<Job>,
}

/// Job queue drained by the UI thread.
pub struct UiQueue {
    rx: mpsc::UnboundedReceiver<Job>,
}

impl UiDispatcher {
    pub fn run(&self, job: Job) {
        if thread::current().id() == self.ui_thread {
            job();
        } else if self.tx.send(job).is_err() {
            tracing::warn!("ui loop gone, dropping job");
        }
    }
}

impl UiQueue {
    /// Block the UI thread until the next job arrives. `None` once every
    /// dispatcher handle is dropped.
    pub fn next_blocking(&mut self) -> Option<Job> {
        self.rx.blocking_recv()
    }

    /// Async variant for UI loops living on a runtime.
    pub async fn next(&mut self) -> Option<Job> {
        self.rx.recv().await
    }
}
