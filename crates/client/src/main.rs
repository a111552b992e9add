//! Duel client binary.
//!
//! Composition root that assembles the fight runtime with a terminal view
//! and an action provider, then plays one duel against a monster.
//!
//! # Examples
//!
//! ```bash
//! # Choose every action yourself
//! cargo run -p fight-client
//!
//! # Watch a reproducible ranked duel
//! DUEL_AUTOPLAY=true DUEL_FRIENDLY=false FIGHT_SEED=7 cargo run -p fight-client
//! ```

mod config;
mod logging;
mod providers;
mod roster;
mod view;

use anyhow::Result;
use fight_core::Winner;
use fight_runtime::{Event, EventBus, FightRuntime, Topic};
use tokio::sync::broadcast::error::RecvError;
use tokio::task::JoinHandle;

use config::ClientConfig;
use providers::{AutoProvider, StdinProvider};
use view::TerminalView;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = ClientConfig::from_env();
    let _log_guard = logging::setup_logging(config.session_id.as_deref())?;

    tracing::info!("Starting duel client");
    tracing::info!(
        "Player: {} (level {}), autoplay: {}, friendly: {}",
        config.player_name,
        config.player_level,
        config.autoplay,
        config.friendly
    );

    let builder = FightRuntime::builder()
        .config(config.runtime.clone())
        .view(TerminalView);
    let runtime = if config.autoplay {
        builder.provider(AutoProvider).build()
    } else {
        builder.provider(StdinProvider::new()).build()
    };

    let event_logger = spawn_event_logger(&runtime.events());

    let player = roster::player(&config.player_name, config.player_level, config.friendly);
    let monster = roster::frost_troll(config.player_level);
    let fight = runtime.run_fight(player, monster, config.friendly).await?;

    if let Some(result) = fight.result() {
        let summary = match result.winner {
            Winner::Fighter(index) => format!("{} won", fight.fighters()[index].name()),
            Winner::Draw => "draw".to_string(),
        };
        tracing::info!("Duel finished after {} turns: {}", result.turns, summary);
    }

    runtime.shutdown().await?;
    if let Err(e) = event_logger.await {
        tracing::warn!("Event logger stopped abnormally: {}", e);
    }

    tracing::info!("Client shutdown complete");
    Ok(())
}

/// Mirrors every turn event into the log file as JSON.
fn spawn_event_logger(events: &EventBus) -> JoinHandle<()> {
    let mut rx = events.subscribe(Topic::Turn);
    tokio::spawn(async move {
        loop {
            match rx.recv().await {
                Ok(event) => log_event(&event),
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!("Event logger skipped {} events", skipped);
                }
                Err(RecvError::Closed) => break,
            }
        }
    })
}

fn log_event(event: &Event) {
    match serde_json::to_string(event) {
        Ok(json) => tracing::debug!(target: "duel::events", "{}", json),
        Err(e) => tracing::warn!("Failed to serialize {:?} event: {}", event.topic(), e),
    }
}
