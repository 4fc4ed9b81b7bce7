//! `paydash` - account dashboard lists in the terminal
//!
//! Wires the remote API client, the friends cache and the resilient loading
//! compositions, then prints the requested list. The main thread is the UI
//! context: loads run on the tokio runtime and hand their outcome back
//! through the dispatcher.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use paydash_core::adapters::{
    friends_service, RemoteCardsItems, RemoteTransfersItems, TransferScope,
};
use paydash_core::api::DashboardApi;
use paydash_core::cache::JsonFileStore;
use paydash_core::config::Config;
use paydash_core::dispatch::ui_channel;
use paydash_core::domain::{Card, Friend, Transfer};
use paydash_core::items::{with_retries, ItemsService};
use paydash_core::screens::ListScreen;

use crate::cli::{Cli, Commands};
use crate::render::ListRenderer;

mod cli;
mod render;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load(path).context("Failed to load configuration")?,
        None => Config::load_or_default(),
    };

    let base_url = cli
        .base_url
        .clone()
        .unwrap_or_else(|| config.api.base_url.clone());
    let retries = cli.retries.unwrap_or(config.loading.retries);
    let premium = cli.premium || config.loading.premium;

    let api = Arc::new(DashboardApi::new(base_url)?);

    let cache_path = cli
        .cache_dir
        .clone()
        .or_else(|| config.cache.dir.clone())
        .map(|dir| dir.join("friends.json"))
        .or_else(JsonFileStore::default_path)
        .context("No usable cache location")?;
    let store = Arc::new(JsonFileStore::new(cache_path));

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to build runtime")?;

    let (ui, mut queue) = ui_channel();

    // A one-shot CLI has no navigation; selection just echoes the pick.
    let (heading, service): (&'static str, Arc<dyn ItemsService>) = match cli.command {
        Commands::Friends => (
            "Friends",
            friends_service(
                api,
                store,
                premium,
                retries,
                Arc::new(|friend: Friend| println!("selected {}", friend.name)),
            ),
        ),
        Commands::Cards => (
            "Cards",
            with_retries(
                Arc::new(RemoteCardsItems::new(
                    api,
                    Arc::new(|card: Card| println!("selected card of {}", card.holder)),
                )),
                retries,
            ),
        ),
        Commands::Sent => (
            "Sent transfers",
            with_retries(
                Arc::new(RemoteTransfersItems::new(
                    api,
                    TransferScope::Sent,
                    Arc::new(|t: Transfer| println!("selected transfer to {}", t.counterparty)),
                )),
                retries,
            ),
        ),
        Commands::Received => (
            "Received transfers",
            with_retries(
                Arc::new(RemoteTransfersItems::new(
                    api,
                    TransferScope::Received,
                    Arc::new(|t: Transfer| println!("selected transfer from {}", t.counterparty)),
                )),
                retries,
            ),
        ),
    };

    let rendered = Arc::new(AtomicBool::new(false));
    let renderer = ListRenderer::new();
    let done = rendered.clone();
    let screen = ListScreen::new(
        heading,
        service,
        ui,
        Arc::new(move |outcome| {
            renderer.render(heading, &outcome);
            done.store(true, Ordering::SeqCst);
        }),
    );

    // The screen (and with it the last dispatcher handle) moves into the
    // task, so the queue closes once the load is done.
    runtime.spawn(async move {
        screen.refresh().await;
    });

    // Drain UI jobs on the main thread until the screen has rendered.
    while !rendered.load(Ordering::SeqCst) {
        match queue.next_blocking() {
            Some(job) => job(),
            None => break,
        }
    }

    Ok(())
}
