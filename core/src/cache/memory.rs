//! In-memory store
//!
//! Non-persistent backend for tests and cache-less runs.

use parking_lot::Mutex;

use crate::cache::{CacheError, FriendsStore};
use crate::domain::Friend;

#[derive(Default)]
pub struct MemoryStore {
    records: Mutex<Option<Vec<Friend>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl FriendsStore for MemoryStore {
    fn save(&self, friends: &[Friend]) {
        *self.records.lock() = Some(friends.to_vec());
    }

    async fn load(&self) -> Result<Vec<Friend>, CacheError> {
        self.records.lock().clone().ok_or(CacheError::Empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[tokio::test]
    async fn starts_empty() {
        let store = MemoryStore::new();
        assert!(matches!(store.load().await, Err(CacheError::Empty)));
    }

    #[tokio::test]
    async fn save_then_load_round_trips() {
        let store = MemoryStore::new();
        let friends = vec![Friend {
            id: Uuid::new_v4(),
            name: "Ana".to_string(),
            phone: "+385 91 111 2222".to_string(),
        }];

        store.save(&friends);

        assert_eq!(store.load().await.unwrap(), friends);
    }
}
