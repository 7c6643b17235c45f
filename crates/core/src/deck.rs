//! Deck module - the initial card list
//!
//! Supplies the fixed, ordered list of cards a game is dealt from: either the
//! built-in set or a JSON file. Decks are validated before use so the game can
//! always be played to an empty table.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::types::{Card, CardId};

/// Labels of the built-in deck, one pair each.
pub const BUILTIN_FACES: [&str; 8] = ["SUN", "MOON", "STAR", "TREE", "FISH", "BIRD", "KEY", "BELL"];

#[derive(Debug, Error)]
pub enum DeckError {
    #[error("failed to read deck file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid deck JSON in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("card id {0} appears more than once")]
    DuplicateId(CardId),
    #[error("card face {src:?} appears {count} times, expected exactly 2")]
    Unpaired { src: String, count: usize },
}

/// The built-in deck: every face twice, all starting face-up.
///
/// Cards start face-up so the startup reveal works as a peek: when it fires
/// every card flips face-down.
pub fn initial_cards() -> Vec<Card> {
    BUILTIN_FACES
        .iter()
        .cycle()
        .take(BUILTIN_FACES.len() * 2)
        .enumerate()
        .map(|(i, src)| Card::new(i as u32 + 1, *src))
        .collect()
}

/// Check that ids are unique and every `src` forms exactly one pair.
pub fn validate_deck(cards: &[Card]) -> Result<(), DeckError> {
    let mut ids = HashSet::with_capacity(cards.len());
    let mut faces: Vec<(&str, usize)> = Vec::new();

    for card in cards {
        if !ids.insert(card.id) {
            return Err(DeckError::DuplicateId(card.id));
        }
        match faces.iter_mut().find(|(src, _)| *src == card.src) {
            Some((_, count)) => *count += 1,
            None => faces.push((card.src.as_str(), 1)),
        }
    }

    // First offender in deck order keeps the error message stable.
    if let Some((src, count)) = faces.into_iter().find(|(_, count)| *count != 2) {
        return Err(DeckError::Unpaired {
            src: src.to_string(),
            count,
        });
    }

    Ok(())
}

/// Parse a deck from JSON text.
///
/// The format is an array of `{ "id": 1, "src": "SUN", "isHidden": false }`;
/// `isHidden` may be omitted.
pub fn parse_deck(json: &str, origin: &Path) -> Result<Vec<Card>, DeckError> {
    let cards: Vec<Card> = serde_json::from_str(json).map_err(|source| DeckError::Parse {
        path: origin.to_path_buf(),
        source,
    })?;
    validate_deck(&cards)?;
    Ok(cards)
}

/// Read and validate a deck file.
pub fn load_deck(path: impl AsRef<Path>) -> Result<Vec<Card>, DeckError> {
    let path = path.as_ref();
    let json = fs::read_to_string(path).map_err(|source| DeckError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let cards = parse_deck(&json, path)?;
    log::info!("loaded {} cards from {}", cards.len(), path.display());
    Ok(cards)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_builtin_deck_is_valid() {
        let cards = initial_cards();
        assert_eq!(cards.len(), 16);
        assert!(cards.iter().all(|c| !c.is_hidden));
        validate_deck(&cards).unwrap();
    }

    #[test]
    fn test_builtin_ids_start_at_one() {
        let cards = initial_cards();
        assert_eq!(cards[0].id, CardId(1));
        assert_eq!(cards[15].id, CardId(16));
        assert_eq!(cards[0].src, cards[8].src);
    }

    #[test]
    fn test_rejects_duplicate_id() {
        let cards = vec![Card::new(1, "a"), Card::new(1, "a")];
        assert!(matches!(
            validate_deck(&cards),
            Err(DeckError::DuplicateId(CardId(1)))
        ));
    }

    #[test]
    fn test_rejects_unpaired_src() {
        let cards = vec![Card::new(1, "a"), Card::new(2, "a"), Card::new(3, "b")];
        match validate_deck(&cards) {
            Err(DeckError::Unpaired { src, count }) => {
                assert_eq!(src, "b");
                assert_eq!(count, 1);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_rejects_triple() {
        let cards = vec![Card::new(1, "a"), Card::new(2, "a"), Card::new(3, "a")];
        assert!(matches!(
            validate_deck(&cards),
            Err(DeckError::Unpaired { count: 3, .. })
        ));
    }

    #[test]
    fn test_empty_deck_is_valid() {
        validate_deck(&[]).unwrap();
    }

    #[test]
    fn test_parse_accepts_both_hidden_spellings() {
        let json = r#"[
            {"id": 1, "src": "x", "isHidden": true},
            {"id": 2, "src": "x", "is_hidden": false},
            {"id": 3, "src": "y"},
            {"id": 4, "src": "y"}
        ]"#;
        let cards = parse_deck(json, Path::new("inline")).unwrap();
        assert!(cards[0].is_hidden);
        assert!(!cards[1].is_hidden);
        assert!(!cards[2].is_hidden);
        assert_eq!(cards[3].id, CardId(4));
    }

    #[test]
    fn test_parse_error_names_origin() {
        let err = parse_deck("{not json", Path::new("bad.json")).unwrap_err();
        assert!(err.to_string().contains("bad.json"));
    }

    #[test]
    fn test_load_deck_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id":10,"src":"cat"}},{{"id":11,"src":"cat"}}]"#
        )
        .unwrap();

        let cards = load_deck(file.path()).unwrap();
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].src, "cat");
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_deck("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, DeckError::Read { .. }));
    }
}
