//! Transfers adapters
//!
//! The feed mixes sent and received transfers. The two screens each hold
//! their own adapter instance over the same client, filtering the shared
//! feed by direction.

use std::sync::Arc;

use crate::adapters::SelectionSink;
use crate::api::TransfersClient;
use crate::domain::Transfer;
use crate::items::{Capability, Item, ItemsError, ItemsService};

/// Which half of the transfer feed an adapter serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferScope {
    Sent,
    Received,
}

impl TransferScope {
    fn keeps(self, transfer: &Transfer) -> bool {
        match self {
            TransferScope::Sent => transfer.sent,
            TransferScope::Received => !transfer.sent,
        }
    }
}

pub struct RemoteTransfersItems {
    client: Arc<dyn TransfersClient>,
    scope: TransferScope,
    on_select: SelectionSink<Transfer>,
}

impl RemoteTransfersItems {
    pub fn new(
        client: Arc<dyn TransfersClient>,
        scope: TransferScope,
        on_select: SelectionSink<Transfer>,
    ) -> Self {
        Self {
            client,
            scope,
            on_select,
        }
    }
}

impl Capability for RemoteTransfersItems {
    fn name(&self) -> &'static str {
        "remote-transfers"
    }
}

#[async_trait::async_trait]
impl ItemsService for RemoteTransfersItems {
    async fn load_items(&self) -> Result<Vec<Item>, ItemsError> {
        let transfers = self.client.fetch_transfers().await.map_err(|e| {
            tracing::debug!(error = %e, "transfers fetch failed");
            ItemsError::new(e.to_string())
        })?;

        Ok(transfers
            .into_iter()
            .filter(|t| self.scope.keeps(t))
            .map(|transfer| {
                let sink = self.on_select.clone();
                let record = transfer.clone();
                Item::new(
                    transfer.counterparty,
                    Some(format!(
                        "{} on {}",
                        amount_label(transfer.amount_cents, &transfer.currency),
                        transfer.date.format("%Y-%m-%d"),
                    )),
                    Arc::new(move || sink(record.clone())),
                )
            })
            .collect())
    }
}

fn amount_label(cents: i64, currency: &str) -> String {
    format!("{}.{:02} {}", cents / 100, cents % 100, currency)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiError;

    use chrono::{TimeZone, Utc};
    use parking_lot::Mutex;
    use uuid::Uuid;

    struct StubTransfersClient {
        feed: Vec<Transfer>,
    }

    impl StubTransfersClient {
        fn new(feed: Vec<Transfer>) -> Arc<Self> {
            Arc::new(Self { feed })
        }
    }

    #[async_trait::async_trait]
    impl TransfersClient for StubTransfersClient {
        async fn fetch_transfers(&self) -> Result<Vec<Transfer>, ApiError> {
            Ok(self.feed.clone())
        }
    }

    fn transfer(counterparty: &str, sent: bool) -> Transfer {
        Transfer {
            id: Uuid::new_v4(),
            counterparty: counterparty.to_string(),
            amount_cents: 1250,
            currency: "EUR".to_string(),
            sent,
            date: Utc.with_ymd_and_hms(2026, 8, 1, 10, 0, 0).unwrap(),
        }
    }

    fn ignore_selection() -> SelectionSink<Transfer> {
        Arc::new(|_| {})
    }

    #[tokio::test]
    async fn partitions_are_disjoint_and_order_preserving() {
        let feed = vec![
            transfer("Ana", true),
            transfer("Marko", false),
            transfer("Iva", true),
            transfer("Luka", false),
        ];
        let client = StubTransfersClient::new(feed);

        let sent = RemoteTransfersItems::new(client.clone(), TransferScope::Sent, ignore_selection());
        let received =
            RemoteTransfersItems::new(client, TransferScope::Received, ignore_selection());

        let sent_titles: Vec<_> = sent
            .load_items()
            .await
            .unwrap()
            .iter()
            .map(|i| i.title().to_string())
            .collect();
        let received_titles: Vec<_> = received
            .load_items()
            .await
            .unwrap()
            .iter()
            .map(|i| i.title().to_string())
            .collect();

        assert_eq!(sent_titles, vec!["Ana", "Iva"]);
        assert_eq!(received_titles, vec!["Marko", "Luka"]);
    }

    #[tokio::test]
    async fn shapes_the_detail_line() {
        let client = StubTransfersClient::new(vec![transfer("Ana", true)]);
        let adapter = RemoteTransfersItems::new(client, TransferScope::Sent, ignore_selection());

        let items = adapter.load_items().await.unwrap();

        assert_eq!(items[0].detail(), Some("12.50 EUR on 2026-08-01"));
    }

    #[tokio::test]
    async fn selection_delivers_the_captured_transfer() {
        let first = transfer("Ana", true);
        let second = transfer("Iva", true);
        let client = StubTransfersClient::new(vec![first, second.clone()]);

        let selected: Arc<Mutex<Vec<Uuid>>> = Arc::new(Mutex::new(Vec::new()));
        let sink = selected.clone();
        let adapter = RemoteTransfersItems::new(
            client,
            TransferScope::Sent,
            Arc::new(move |t: Transfer| sink.lock().push(t.id)),
        );

        let items = adapter.load_items().await.unwrap();
        items[1].select();

        assert_eq!(*selected.lock(), vec![second.id]);
    }
}
