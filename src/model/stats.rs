use super::id_map::{IdMap, RecordId};
use super::play::Play;
use crate::error::Result;
use std::fmt;

/// Everything loaded from a play history export
#[derive(Debug, Clone, Default)]
pub struct Stats {
    pub players: IdMap,
    pub games: IdMap,
    pub plays: Vec<Play>,
}

/// A play that refers to a player or game the maps don't know about
#[derive(Debug, Clone, PartialEq)]
pub struct DanglingReference {
    pub play_index: usize,
    pub kind: &'static str,
    pub id: RecordId,
}

impl fmt::Display for DanglingReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Play {}: unknown {} id {}", self.play_index + 1, self.kind, self.id)
    }
}

impl Stats {
    pub fn new(players: IdMap, games: IdMap, plays: Vec<Play>) -> Self {
        Stats {
            players,
            games,
            plays,
        }
    }

    /// Render a play against this export's player and game maps
    pub fn render_play(&self, play: &Play) -> Result<String> {
        play.render(&self.players, &self.games)
    }

    /// Collect every play reference that does not resolve
    pub fn dangling_references(&self) -> Vec<DanglingReference> {
        let mut dangling = Vec::new();

        for (play_index, play) in self.plays.iter().enumerate() {
            if !self.games.contains(&play.game) {
                dangling.push(DanglingReference {
                    play_index,
                    kind: "game",
                    id: play.game.clone(),
                });
            }
            for (id, _) in play.players() {
                if !self.players.contains(id) {
                    dangling.push(DanglingReference {
                        play_index,
                        kind: "player",
                        id: id.clone(),
                    });
                }
            }
        }

        dangling
    }
}
