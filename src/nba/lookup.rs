//! Matching Sleeper player names to NBA Stats person ids.
//!
//! Sleeper and NBA Stats disagree on suffixes and nicknames often enough that an
//! exact match alone misses a handful of rostered players each season.

use crate::{cli::types::NbaPlayerId, nba::types::NbaPlayer};

const NAME_SUFFIXES: [&str; 7] = ["jr", "jr.", "sr", "sr.", "ii", "iii", "iv"];

fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

fn without_suffixes(name: &str) -> String {
    name.split_whitespace()
        .filter(|token| !NAME_SUFFIXES.contains(token))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Resolve `player_name` against the NBA directory.
///
/// Tries, in order: exact (case-insensitive) name, name with generational
/// suffixes removed, then same last name and first initial among active players.
pub fn find_nba_player_id(player_name: &str, directory: &[NbaPlayer]) -> Option<NbaPlayerId> {
    let name = normalize(player_name);
    if name.is_empty() {
        return None;
    }

    if let Some(p) = directory.iter().find(|p| normalize(&p.full_name) == name) {
        return Some(p.id);
    }

    let clean = without_suffixes(&name);
    if let Some(p) = directory
        .iter()
        .find(|p| without_suffixes(&normalize(&p.full_name)) == clean)
    {
        return Some(p.id);
    }

    let parts: Vec<&str> = name.split_whitespace().collect();
    let (first, last) = match parts.as_slice() {
        [first, .., last] => (*first, *last),
        _ => return None,
    };
    let initial = first.chars().next()?;

    directory
        .iter()
        .filter(|p| p.is_active())
        .find(|p| {
            let full = normalize(&p.full_name);
            let p_parts: Vec<&str> = full.split_whitespace().collect();
            match p_parts.as_slice() {
                [p_first, .., p_last] => {
                    *p_last == last && p_first.chars().next() == Some(initial)
                }
                _ => false,
            }
        })
        .map(|p| p.id)
}
