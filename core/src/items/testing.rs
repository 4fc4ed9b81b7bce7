//! Scripted capability doubles for decorator and screen tests.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;

use crate::items::capability::{Capability, Item, ItemsError, ItemsService};

pub(crate) fn item(title: &str) -> Item {
    Item::new(title, None, Arc::new(|| {}))
}

pub(crate) fn titles(items: &[Item]) -> Vec<String> {
    items.iter().map(|i| i.title().to_string()).collect()
}

/// Replays a fixed sequence of outcomes and counts invocations.
pub(crate) struct ScriptedItems {
    script: Mutex<VecDeque<Result<Vec<Item>, ItemsError>>>,
    calls: AtomicUsize,
}

impl ScriptedItems {
    pub(crate) fn new(outcomes: Vec<Result<Vec<Item>, ItemsError>>) -> Arc<Self> {
        Arc::new(Self {
            script: Mutex::new(outcomes.into()),
            calls: AtomicUsize::new(0),
        })
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Capability for ScriptedItems {
    fn name(&self) -> &'static str {
        "scripted-items"
    }
}

#[async_trait::async_trait]
impl ItemsService for ScriptedItems {
    async fn load_items(&self) -> Result<Vec<Item>, ItemsError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.script
            .lock()
            .pop_front()
            .unwrap_or_else(|| Err(ItemsError::new("script exhausted")))
    }
}
