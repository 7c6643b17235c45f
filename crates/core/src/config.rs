//! Game configuration
//!
//! Everything is read from `PAIRS_*` environment variables. Missing or
//! unparseable values fall back to the defaults.

use std::env;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::types::{DEFAULT_COLUMNS, MATCH_DELAY_MS, MAX_COLUMNS, REVEAL_DELAY_MS, UNDO_DELAY_MS};

/// Delays of the three scheduled game actions, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    pub reveal_ms: u32,
    pub undo_ms: u32,
    pub match_ms: u32,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            reveal_ms: REVEAL_DELAY_MS,
            undo_ms: UNDO_DELAY_MS,
            match_ms: MATCH_DELAY_MS,
        }
    }
}

#[derive(Debug, Clone)]
pub struct GameConfig {
    pub seed: u32,
    pub timings: Timings,
    pub columns: u16,
    pub deck_path: Option<PathBuf>,
    pub log_path: Option<PathBuf>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: 1,
            timings: Timings::default(),
            columns: DEFAULT_COLUMNS,
            deck_path: None,
            log_path: None,
        }
    }
}

impl GameConfig {
    /// Create from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let number = |key: &str| lookup(key).and_then(|s| s.trim().parse::<u32>().ok());
        let path = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .map(PathBuf::from)
        };

        let defaults = Timings::default();
        let timings = Timings {
            reveal_ms: number("PAIRS_REVEAL_MS").unwrap_or(defaults.reveal_ms),
            undo_ms: number("PAIRS_UNDO_MS").unwrap_or(defaults.undo_ms),
            match_ms: number("PAIRS_MATCH_MS").unwrap_or(defaults.match_ms),
        };

        let columns = number("PAIRS_COLUMNS")
            .map(|c| c.clamp(1, MAX_COLUMNS as u32) as u16)
            .unwrap_or(DEFAULT_COLUMNS);

        Self {
            seed: number("PAIRS_SEED").unwrap_or_else(clock_seed),
            timings,
            columns,
            deck_path: path("PAIRS_DECK"),
            log_path: path("PAIRS_LOG_PATH"),
        }
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let cfg = GameConfig::from_lookup(lookup_from(&[("PAIRS_SEED", "9")]));
        assert_eq!(cfg.seed, 9);
        assert_eq!(cfg.timings, Timings::default());
        assert_eq!(cfg.columns, DEFAULT_COLUMNS);
        assert!(cfg.deck_path.is_none());
        assert!(cfg.log_path.is_none());
    }

    #[test]
    fn test_reads_overrides() {
        let cfg = GameConfig::from_lookup(lookup_from(&[
            ("PAIRS_SEED", "42"),
            ("PAIRS_REVEAL_MS", "500"),
            ("PAIRS_UNDO_MS", " 200 "),
            ("PAIRS_MATCH_MS", "300"),
            ("PAIRS_COLUMNS", "6"),
            ("PAIRS_DECK", "/tmp/deck.json"),
            ("PAIRS_LOG_PATH", "pairs.log"),
        ]));
        assert_eq!(cfg.seed, 42);
        assert_eq!(
            cfg.timings,
            Timings {
                reveal_ms: 500,
                undo_ms: 200,
                match_ms: 300
            }
        );
        assert_eq!(cfg.columns, 6);
        assert_eq!(cfg.deck_path, Some(PathBuf::from("/tmp/deck.json")));
        assert_eq!(cfg.log_path, Some(PathBuf::from("pairs.log")));
    }

    #[test]
    fn test_bad_values_fall_back() {
        let cfg = GameConfig::from_lookup(lookup_from(&[
            ("PAIRS_SEED", "1"),
            ("PAIRS_UNDO_MS", "soon"),
            ("PAIRS_COLUMNS", "0"),
            ("PAIRS_DECK", "   "),
        ]));
        assert_eq!(cfg.timings.undo_ms, UNDO_DELAY_MS);
        assert_eq!(cfg.columns, 1);
        assert!(cfg.deck_path.is_none());
    }

    #[test]
    fn test_columns_capped() {
        let cfg = GameConfig::from_lookup(lookup_from(&[
            ("PAIRS_SEED", "1"),
            ("PAIRS_COLUMNS", "70000"),
        ]));
        assert_eq!(cfg.columns, MAX_COLUMNS);
    }
}
