//! Friends adapters
//!
//! Remote adapter with cache write-through, the cache adapter, and the
//! premium-aware composition the friends screen consumes.

use std::sync::Arc;

use crate::adapters::SelectionSink;
use crate::api::FriendsClient;
use crate::cache::FriendsStore;
use crate::domain::Friend;
use crate::items::{
    with_retries, Capability, DisabledItems, FallbackItems, Item, ItemsError, ItemsService,
};

/// Remote friends adapter.
///
/// On a successful fetch the records are written to the store, when one is
/// wired, exactly once and before the items are produced. A store is only
/// wired for premium accounts; see [`friends_service`].
pub struct RemoteFriendsItems {
    client: Arc<dyn FriendsClient>,
    store: Option<Arc<dyn FriendsStore>>,
    on_select: SelectionSink<Friend>,
}

impl RemoteFriendsItems {
    pub fn new(
        client: Arc<dyn FriendsClient>,
        store: Option<Arc<dyn FriendsStore>>,
        on_select: SelectionSink<Friend>,
    ) -> Self {
        Self {
            client,
            store,
            on_select,
        }
    }
}

impl Capability for RemoteFriendsItems {
    fn name(&self) -> &'static str {
        "remote-friends"
    }
}

#[async_trait::async_trait]
impl ItemsService for RemoteFriendsItems {
    async fn load_items(&self) -> Result<Vec<Item>, ItemsError> {
        let friends = self.client.fetch_friends().await.map_err(|e| {
            tracing::debug!(error = %e, "friends fetch failed");
            ItemsError::new(e.to_string())
        })?;

        if let Some(store) = &self.store {
            store.save(&friends);
        }

        Ok(friend_items(friends, &self.on_select))
    }
}

/// Cache-backed friends adapter.
///
/// Read-only: a cache-served result must never write the cache back.
pub struct CachedFriendsItems {
    store: Arc<dyn FriendsStore>,
    on_select: SelectionSink<Friend>,
}

impl CachedFriendsItems {
    pub fn new(store: Arc<dyn FriendsStore>, on_select: SelectionSink<Friend>) -> Self {
        Self { store, on_select }
    }
}

impl Capability for CachedFriendsItems {
    fn name(&self) -> &'static str {
        "cached-friends"
    }
}

#[async_trait::async_trait]
impl ItemsService for CachedFriendsItems {
    async fn load_items(&self) -> Result<Vec<Item>, ItemsError> {
        let friends = self.store.load().await.map_err(|e| {
            tracing::debug!(error = %e, "friends cache load failed");
            ItemsError::new(e.to_string())
        })?;

        Ok(friend_items(friends, &self.on_select))
    }
}

fn friend_items(friends: Vec<Friend>, on_select: &SelectionSink<Friend>) -> Vec<Item> {
    friends
        .into_iter()
        .map(|friend| {
            let sink = on_select.clone();
            let record = friend.clone();
            Item::new(
                friend.name,
                Some(friend.phone),
                Arc::new(move || sink(record.clone())),
            )
        })
        .collect()
}

/// Composed friends capability.
///
/// Premium accounts get the remote source retried `retries` times with the
/// cache read behind it: remote attempts are exhausted before the cache is
/// touched. Non-premium accounts get [`DisabledItems`] in the fallback slot
/// and no write-through handle, so the store receives zero calls either way.
pub fn friends_service(
    client: Arc<dyn FriendsClient>,
    store: Arc<dyn FriendsStore>,
    premium: bool,
    retries: u32,
    on_select: SelectionSink<Friend>,
) -> Arc<dyn ItemsService> {
    let (write_store, fallback): (_, Arc<dyn ItemsService>) = if premium {
        (
            Some(store.clone()),
            Arc::new(CachedFriendsItems::new(store, on_select.clone())),
        )
    } else {
        (None, Arc::new(DisabledItems))
    };

    let remote = Arc::new(RemoteFriendsItems::new(client, write_store, on_select));
    Arc::new(FallbackItems::new(with_retries(remote, retries), fallback))
}
