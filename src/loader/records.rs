use crate::model::{Play, RecordId};
use serde::Deserialize;

/// A play entry from the `plays` list
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayRecord {
    pub play_date: String,
    pub game_ref_id: RecordId,
    pub player_scores: Vec<PlayerScoreRecord>,
}

/// One player's outcome within a play entry
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerScoreRecord {
    pub player_ref_id: RecordId,
    pub winner: bool,
}

impl From<PlayRecord> for Play {
    fn from(record: PlayRecord) -> Self {
        Play::new(
            record.play_date,
            record.game_ref_id,
            record
                .player_scores
                .into_iter()
                .map(|score| (score.player_ref_id, score.winner)),
        )
    }
}
