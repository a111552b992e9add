//! Client configuration structures and loaders.
use std::env;

use fight_runtime::RuntimeConfig;

/// Configuration required to set up a duel.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub runtime: RuntimeConfig,
    /// Let the player's turns be chosen automatically.
    pub autoplay: bool,
    /// Friendly duels keep the player's potion in the inventory.
    pub friendly: bool,
    pub player_name: String,
    pub player_level: u32,
    pub session_id: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            runtime: RuntimeConfig::default(),
            autoplay: false,
            friendly: true,
            player_name: "adventurer".to_string(),
            player_level: 10,
            session_id: None,
        }
    }
}

impl ClientConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables (plus the `FIGHT_*` runtime variables):
    /// - `DUEL_AUTOPLAY` - Choose the player's actions automatically (default: false)
    /// - `DUEL_FRIENDLY` - Friendly duel, potions are kept (default: true)
    /// - `DUEL_PLAYER_NAME` - Display name of the player (default: adventurer)
    /// - `DUEL_PLAYER_LEVEL` - Player and monster level (default: 10)
    /// - `DUEL_SESSION_ID` - Session identifier for log files (default: timestamp)
    pub fn from_env() -> Self {
        let mut config = Self {
            runtime: RuntimeConfig::from_env(),
            ..Self::default()
        };

        if let Some(autoplay) = read_env::<bool>("DUEL_AUTOPLAY") {
            config.autoplay = autoplay;
        } else if env::var("DUEL_AUTOPLAY").is_ok() {
            // Also accept just setting the variable without value as "true"
            config.autoplay = true;
        }

        if let Some(friendly) = read_env::<bool>("DUEL_FRIENDLY") {
            config.friendly = friendly;
        }

        if let Ok(name) = env::var("DUEL_PLAYER_NAME")
            && !name.trim().is_empty()
        {
            config.player_name = name.trim().to_string();
        }

        if let Some(level) = read_env::<u32>("DUEL_PLAYER_LEVEL") {
            config.player_level = level.clamp(1, 100);
        }

        config.session_id = env::var("DUEL_SESSION_ID").ok();

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
