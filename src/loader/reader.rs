use super::records::PlayRecord;
use crate::error::{Result, StatsError};
use crate::model::{IdMap, IdRecord, Play, Stats};
use serde::Deserialize;
use serde_json::Value;
use std::path::Path;

/// Read a file and parse it as JSON without interpreting it
pub fn read_json(path: &Path) -> Result<Value> {
    log::debug!("Reading {}", path.display());
    let content = std::fs::read_to_string(path).map_err(|source| StatsError::File {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|e| StatsError::Parse(e.to_string()))
}

/// Load a play history export from disk
pub fn load_stats(path: &Path) -> Result<Stats> {
    let raw = read_json(path)?;
    stats_from_value(&raw)
}

/// Parse a play history export from a JSON string
pub fn parse_stats(content: &str) -> Result<Stats> {
    let raw: Value = serde_json::from_str(content).map_err(|e| StatsError::Parse(e.to_string()))?;
    stats_from_value(&raw)
}

/// Build player and game maps and the play list from a parsed document.
///
/// Play references are not checked against the maps here.
pub fn stats_from_value(raw: &Value) -> Result<Stats> {
    let players = parse_id_list("players", top_level_list(raw, "players")?)?;
    let games = parse_id_list("games", top_level_list(raw, "games")?)?;

    let plays = top_level_list(raw, "plays")?
        .iter()
        .enumerate()
        .map(|(idx, item)| {
            PlayRecord::deserialize(item)
                .map(Play::from)
                .map_err(|e| StatsError::Field(format!("plays[{}]: {}", idx, e)))
        })
        .collect::<Result<Vec<Play>>>()?;

    log::info!(
        "Loaded {} players, {} games, {} plays",
        players.len(),
        games.len(),
        plays.len()
    );

    Ok(Stats::new(players, games, plays))
}

/// Fetch a required top-level list
fn top_level_list<'a>(raw: &'a Value, key: &str) -> Result<&'a [Value]> {
    let object = raw
        .as_object()
        .ok_or_else(|| StatsError::Parse("expected a JSON object at the top level".to_string()))?;

    match object.get(key) {
        Some(Value::Array(items)) => Ok(items),
        Some(_) => Err(StatsError::Parse(format!("top-level `{}` is not a list", key))),
        None => Err(StatsError::Parse(format!("missing top-level key `{}`", key))),
    }
}

/// Build an id map from a list of `{id, name}` objects
fn parse_id_list(key: &str, items: &[Value]) -> Result<IdMap> {
    let records = items
        .iter()
        .enumerate()
        .map(|(idx, item)| {
            IdRecord::deserialize(item)
                .map_err(|e| StatsError::Field(format!("{}[{}]: {}", key, idx, e)))
        })
        .collect::<Result<Vec<IdRecord>>>()?;

    Ok(IdMap::from_records(records))
}
