use super::id_map::{IdMap, RecordId};
use crate::error::{Result, StatsError};

/// One recorded play of a game.
///
/// Only ids are stored. Names are resolved against the player and game maps
/// at render time, so those maps must be complete before rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct Play {
    pub date: String,
    pub game: RecordId,
    players: Vec<(RecordId, bool)>,
}

impl Play {
    /// Create a play from `(player id, won)` pairs. A repeated player id
    /// keeps its first position but takes the last win flag.
    pub fn new<I>(date: impl Into<String>, game: RecordId, scores: I) -> Self
    where
        I: IntoIterator<Item = (RecordId, bool)>,
    {
        let mut players: Vec<(RecordId, bool)> = Vec::new();
        for (id, won) in scores {
            match players.iter_mut().find(|(existing, _)| *existing == id) {
                Some(entry) => entry.1 = won,
                None => players.push((id, won)),
            }
        }

        Play {
            date: date.into(),
            game,
            players,
        }
    }

    /// Players in this play with their win flag, in recorded order
    pub fn players(&self) -> impl Iterator<Item = (&RecordId, bool)> {
        self.players.iter().map(|(id, won)| (id, *won))
    }

    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    pub fn winner_count(&self) -> usize {
        self.players.iter().filter(|(_, won)| *won).count()
    }

    /// Describe the play using the given name maps.
    ///
    /// Fails with a lookup error if the game or any player is missing from
    /// its map.
    pub fn render(&self, players: &IdMap, games: &IdMap) -> Result<String> {
        let game_name = games
            .get(&self.game)
            .ok_or_else(|| StatsError::lookup("game", &self.game))?;

        let mut out = format!("Play of {} on {}:\n", game_name, self.date);
        for (id, won) in &self.players {
            let name = players
                .get(id)
                .ok_or_else(|| StatsError::lookup("player", id))?;
            let marker = if *won { "WINNER!!!!!" } else { "loser...." };
            out.push_str(&format!("    {}: {}\n", name, marker));
        }
        Ok(out)
    }
}
