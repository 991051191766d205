//! Table rules enforced by the session's guarded helpers

use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub min_players: usize,
    pub max_players: usize,
    pub max_name_chars: usize,
    pub max_phrase_chars: usize,
    /// Pause between confirming a vote and moving to the next phrase
    pub reveal_delay: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            min_players: 2,
            max_players: 8,
            max_name_chars: 20,
            max_phrase_chars: 200,
            reveal_delay: Duration::from_millis(1500),
        }
    }
}

impl SessionConfig {
    /// Load overrides from environment variables, keeping defaults for
    /// anything unset or unparsable
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let config = Self {
            min_players: env_or("WHOSAID_MIN_PLAYERS", defaults.min_players),
            max_players: env_or("WHOSAID_MAX_PLAYERS", defaults.max_players),
            max_name_chars: env_or("WHOSAID_MAX_NAME_CHARS", defaults.max_name_chars),
            max_phrase_chars: env_or("WHOSAID_MAX_PHRASE_CHARS", defaults.max_phrase_chars),
            reveal_delay: Duration::from_millis(env_or(
                "WHOSAID_REVEAL_DELAY_MS",
                defaults.reveal_delay.as_millis() as u64,
            )),
        };

        if config.min_players == 0 || config.max_players == 0 {
            tracing::warn!(
                "Player limits must be at least 1 (min {}, max {}), using defaults",
                config.min_players,
                config.max_players
            );
            return Self {
                min_players: defaults.min_players,
                max_players: defaults.max_players,
                ..config
            };
        }

        if config.min_players > config.max_players {
            tracing::warn!(
                "WHOSAID_MIN_PLAYERS ({}) exceeds WHOSAID_MAX_PLAYERS ({}), using defaults",
                config.min_players,
                config.max_players
            );
            return Self {
                min_players: defaults.min_players,
                max_players: defaults.max_players,
                ..config
            };
        }

        config
    }
}

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    match std::env::var(key) {
        Ok(raw) => match raw.trim().parse() {
            Ok(value) => value,
            Err(_) => {
                tracing::warn!("Ignoring invalid {}={:?}", key, raw);
                default
            }
        },
        Err(_) => default,
    }
}
