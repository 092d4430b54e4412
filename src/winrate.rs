//! Actual versus expected wins per player.
//!
//! A play with `n` players hands each of them `1/n` of an expected win, which
//! is what they would earn on average if every outcome were a fair coin among
//! the seats.

use crate::error::{Result, StatsError};
use crate::model::{RecordId, Stats};
use std::collections::HashMap;
use std::fmt;

/// Win totals for one player
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerStat {
    pub id: RecordId,
    pub name: String,
    pub plays: u32,
    pub expected_wins: f64,
    pub actual_wins: u32,
}

impl PlayerStat {
    pub fn new(id: RecordId, name: &str) -> Self {
        PlayerStat {
            id,
            name: name.to_string(),
            plays: 0,
            expected_wins: 0.0,
            actual_wins: 0,
        }
    }

    /// Wins above (or below) expectation
    pub fn luck(&self) -> f64 {
        self.actual_wins as f64 - self.expected_wins
    }

    /// Percentage of plays won
    pub fn win_rate(&self) -> f64 {
        if self.plays == 0 {
            0.0
        } else {
            self.actual_wins as f64 / self.plays as f64 * 100.0
        }
    }

    /// Expected wins as shortest round-trip digits, keeping a trailing `.0`
    /// on whole values. A player with no plays shows a bare `0`.
    fn expected_display(&self) -> String {
        if self.plays == 0 {
            return "0".to_string();
        }
        let text = self.expected_wins.to_string();
        if self.expected_wins.is_finite() && !text.contains('.') {
            format!("{}.0", text)
        } else {
            text
        }
    }
}

impl fmt::Display for PlayerStat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} won {} with E(x) of {}",
            self.name,
            self.actual_wins,
            self.expected_display()
        )
    }
}

/// Compute win totals for every known player, most wins first.
///
/// Players with equal wins stay in player list order. A play naming a player
/// that is not in the player list is an error.
pub fn compute_win_rates(stats: &Stats) -> Result<Vec<PlayerStat>> {
    let mut players: Vec<PlayerStat> = stats
        .players
        .iter()
        .map(|(id, name)| PlayerStat::new(id.clone(), name))
        .collect();
    let slots: HashMap<&RecordId, usize> = stats
        .players
        .iter()
        .enumerate()
        .map(|(slot, (id, _))| (id, slot))
        .collect();

    for play in &stats.plays {
        let share = 1.0 / play.player_count() as f64;
        for (id, won) in play.players() {
            let slot = *slots
                .get(id)
                .ok_or_else(|| StatsError::lookup("player", id))?;
            let player = &mut players[slot];
            player.plays += 1;
            player.expected_wins += share;
            if won {
                player.actual_wins += 1;
            }
        }
    }

    log::debug!("Computed win rates for {} players over {} plays", players.len(), stats.plays.len());

    players.sort_by(|a, b| b.actual_wins.cmp(&a.actual_wins));
    Ok(players)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::parse_stats;
    use crate::model::{IdMap, Play};

    fn roster(names: &[&str]) -> IdMap {
        names
            .iter()
            .enumerate()
            .map(|(i, name)| (RecordId::Int(i as i64 + 1), name.to_string()))
            .collect()
    }

    fn chess() -> IdMap {
        vec![(RecordId::Int(10), "Chess".to_string())].into_iter().collect()
    }

    fn play(scores: &[(i64, bool)]) -> Play {
        Play::new(
            "2024-01-01",
            RecordId::Int(10),
            scores.iter().map(|&(id, won)| (RecordId::Int(id), won)),
        )
    }

    #[test]
    fn test_alice_and_bob() {
        let json = r#"{
            "players": [{"id": 1, "name": "Alice"}, {"id": 2, "name": "Bob"}],
            "games": [{"id": 10, "name": "Chess"}],
            "plays": [{"playDate": "2024-01-01", "gameRefId": 10, "playerScores": [
                {"playerRefId": 1, "winner": true},
                {"playerRefId": 2, "winner": false}
            ]}]
        }"#;
        let stats = parse_stats(json).unwrap();
        let rates = compute_win_rates(&stats).unwrap();

        assert_eq!(rates.len(), 2);
        assert_eq!(rates[0].name, "Alice");
        assert_eq!(rates[0].actual_wins, 1);
        assert!((rates[0].expected_wins - 0.5).abs() < 1e-9);
        assert_eq!(rates[1].name, "Bob");
        assert_eq!(rates[1].actual_wins, 0);
        assert!((rates[1].expected_wins - 0.5).abs() < 1e-9);

        assert_eq!(rates[0].to_string(), "Alice won 1 with E(x) of 0.5");
        assert_eq!(rates[1].to_string(), "Bob won 0 with E(x) of 0.5");
    }

    #[test]
    fn test_each_play_distributes_one_expected_win() {
        let plays = vec![
            play(&[(1, true), (2, false), (3, false)]),
            play(&[(1, false), (2, true), (3, true), (4, false)]),
            play(&[(4, true)]),
        ];
        for p in &plays {
            let stats = Stats::new(roster(&["A", "B", "C", "D"]), chess(), vec![p.clone()]);
            let rates = compute_win_rates(&stats).unwrap();

            let expected: f64 = rates.iter().map(|r| r.expected_wins).sum();
            assert!((expected - 1.0).abs() < 1e-9);

            let actual: u32 = rates.iter().map(|r| r.actual_wins).sum();
            assert_eq!(actual as usize, p.winner_count());
        }
    }

    #[test]
    fn test_ties_keep_player_order() {
        let stats = Stats::new(
            roster(&["Carol", "Alice", "Bob", "Dave"]),
            chess(),
            vec![
                play(&[(1, false), (2, true), (3, true)]),
                play(&[(4, true), (2, false)]),
            ],
        );
        let rates = compute_win_rates(&stats).unwrap();
        let names: Vec<&str> = rates.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Alice", "Bob", "Dave", "Carol"]);
    }

    #[test]
    fn test_player_without_plays() {
        let stats = Stats::new(roster(&["Alice", "Idle"]), chess(), vec![play(&[(1, true)])]);
        let rates = compute_win_rates(&stats).unwrap();

        let idle = &rates[1];
        assert_eq!(idle.name, "Idle");
        assert_eq!(idle.plays, 0);
        assert_eq!(idle.actual_wins, 0);
        assert_eq!(idle.expected_wins, 0.0);
        assert_eq!(idle.win_rate(), 0.0);
        assert_eq!(idle.to_string(), "Idle won 0 with E(x) of 0");
    }

    #[test]
    fn test_unknown_player_in_play() {
        let stats = Stats::new(roster(&["Alice"]), chess(), vec![play(&[(1, true), (9, false)])]);
        assert!(matches!(
            compute_win_rates(&stats),
            Err(StatsError::Lookup { kind: "player", .. })
        ));
    }

    #[test]
    fn test_whole_expected_wins_keep_decimal() {
        let stats = Stats::new(
            roster(&["Alice", "Bob"]),
            chess(),
            vec![play(&[(1, true), (2, false)]), play(&[(1, true), (2, false)])],
        );
        let rates = compute_win_rates(&stats).unwrap();
        assert_eq!(rates[0].to_string(), "Alice won 2 with E(x) of 1.0");
        assert_eq!(rates[1].to_string(), "Bob won 0 with E(x) of 1.0");
    }

    #[test]
    fn test_solo_play_and_thirds() {
        let stats = Stats::new(
            roster(&["Alice", "Bob", "Carol"]),
            chess(),
            vec![play(&[(1, true)]), play(&[(1, false), (2, true), (3, false)])],
        );
        let rates = compute_win_rates(&stats).unwrap();
        assert_eq!(rates[0].to_string(), "Alice won 1 with E(x) of 1.3333333333333333");
        assert_eq!(rates[1].to_string(), "Bob won 1 with E(x) of 0.3333333333333333");
    }

    #[test]
    fn test_luck_and_win_rate() {
        let stats = Stats::new(
            roster(&["Alice", "Bob"]),
            chess(),
            vec![play(&[(1, true), (2, false)]), play(&[(1, true), (2, false)])],
        );
        let rates = compute_win_rates(&stats).unwrap();
        assert_eq!(rates[0].plays, 2);
        assert!((rates[0].luck() - 1.0).abs() < 1e-9);
        assert!((rates[0].win_rate() - 100.0).abs() < 1e-9);
        assert!((rates[1].luck() + 1.0).abs() < 1e-9);
    }
}
