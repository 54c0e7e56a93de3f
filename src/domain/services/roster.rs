use crate::domain::model::RosterEntry;
use crate::utils::error::{ArenaError, Result};

pub const MAX_ROSTER_SIZE: usize = 6;

/// Checks whether a creature may join `roster`.
///
/// A full roster is reported before a duplicate.
pub fn check_admission(roster: &[RosterEntry], pokemon_id: u32, name: &str) -> Result<()> {
    if roster.len() >= MAX_ROSTER_SIZE {
        return Err(ArenaError::RosterFull {
            limit: MAX_ROSTER_SIZE,
        });
    }

    if roster.iter().any(|entry| entry.pokemon_id == pokemon_id) {
        return Err(ArenaError::DuplicateEntry {
            pokemon_id,
            name: name.to_string(),
        });
    }

    Ok(())
}

pub fn find_entry(roster: &[RosterEntry], entry_id: u64) -> Option<&RosterEntry> {
    roster.iter().find(|entry| entry.id == entry_id)
}
