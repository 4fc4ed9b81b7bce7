//! Cards adapter

use std::sync::Arc;

use crate::adapters::SelectionSink;
use crate::api::CardsClient;
use crate::domain::Card;
use crate::items::{Capability, Item, ItemsError, ItemsService};

/// Maps the remote card list into items: masked number as the title, the
/// holder as the detail line.
pub struct RemoteCardsItems {
    client: Arc<dyn CardsClient>,
    on_select: SelectionSink<Card>,
}

impl RemoteCardsItems {
    pub fn new(client: Arc<dyn CardsClient>, on_select: SelectionSink<Card>) -> Self {
        Self { client, on_select }
    }
}

impl Capability for RemoteCardsItems {
    fn name(&self) -> &'static str {
        "remote-cards"
    }
}

#[async_trait::async_trait]
impl ItemsService for RemoteCardsItems {
    async fn load_items(&self) -> Result<Vec<Item>, ItemsError> {
        let cards = self.client.fetch_cards().await.map_err(|e| {
            tracing::debug!(error = %e, "cards fetch failed");
            ItemsError::new(e.to_string())
        })?;

        Ok(cards
            .into_iter()
            .map(|card| {
                let sink = self.on_select.clone();
                let record = card.clone();
                Item::new(
                    masked(&card.number),
                    Some(card.holder),
                    Arc::new(move || sink(record.clone())),
                )
            })
            .collect())
    }
}

/// Only the last four digits survive display.
fn masked(number: &str) -> String {
    let digits = number.chars().count();
    let tail: String = number.chars().skip(digits.saturating_sub(4)).collect();
    format!("•••• {}", tail)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiError;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use parking_lot::Mutex;
    use uuid::Uuid;

    struct StubCardsClient {
        outcome: Mutex<Option<Result<Vec<Card>, ApiError>>>,
        calls: AtomicUsize,
    }

    impl StubCardsClient {
        fn new(outcome: Result<Vec<Card>, ApiError>) -> Arc<Self> {
            Arc::new(Self {
                outcome: Mutex::new(Some(outcome)),
                calls: AtomicUsize::new(0),
            })
        }
    }

    #[async_trait::async_trait]
    impl CardsClient for StubCardsClient {
        async fn fetch_cards(&self) -> Result<Vec<Card>, ApiError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.outcome
                .lock()
                .take()
                .unwrap_or_else(|| Err(ApiError::Network("script exhausted".to_string())))
        }
    }

    fn card(number: &str, holder: &str) -> Card {
        Card {
            id: Uuid::new_v4(),
            number: number.to_string(),
            holder: holder.to_string(),
        }
    }

    #[tokio::test]
    async fn maps_cards_to_masked_items() {
        let client = StubCardsClient::new(Ok(vec![card("4242424242421234", "Ana Anic")]));
        let adapter = RemoteCardsItems::new(client, Arc::new(|_| {}));

        let items = adapter.load_items().await.unwrap();

        assert_eq!(items[0].title(), "•••• 1234");
        assert_eq!(items[0].detail(), Some("Ana Anic"));
    }

    #[tokio::test]
    async fn fetch_failure_maps_to_items_error() {
        let client = StubCardsClient::new(Err(ApiError::Status(500)));
        let adapter = RemoteCardsItems::new(client, Arc::new(|_| {}));

        let err = adapter.load_items().await.unwrap_err();

        assert_eq!(err, ItemsError::new("unexpected status 500"));
    }

    #[tokio::test]
    async fn selection_delivers_the_captured_card() {
        let picked = card("4242424242421234", "Ana Anic");
        let client = StubCardsClient::new(Ok(vec![picked.clone()]));
        let selected: Arc<Mutex<Vec<Uuid>>> = Arc::new(Mutex::new(Vec::new()));
        let sink = selected.clone();
        let adapter =
            RemoteCardsItems::new(client, Arc::new(move |c: Card| sink.lock().push(c.id)));

        let items = adapter.load_items().await.unwrap();
        items[0].select();

        assert_eq!(*selected.lock(), vec![picked.id]);
    }

    #[test]
    fn short_numbers_are_masked_whole() {
        assert_eq!(masked("123"), "•••• 123");
    }
}
