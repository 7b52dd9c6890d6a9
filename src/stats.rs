//! Win/loss aggregation over the full participation history.
//!
//! Recomputed from scratch on every request: fetch the player list and the
//! joined participation rows, then fold them here. No cache, no
//! denormalized counters. Fine at friend-group scale.

use std::collections::HashMap;

use serde::Serialize;
use uuid::Uuid;

use crate::db::models::{Participation, Player};

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStats {
    pub id: Uuid,
    pub name: String,
    pub total_games: i64,
    pub wins: i64,
    pub losses: i64,
    /// Percentage in [0, 100], unrounded; 0 when the player has no games.
    pub win_rate: f64,
    pub spymaster_games: i64,
    pub spymaster_wins: i64,
    pub spymaster_win_rate: f64,
}

/// Aggregate per-player statistics over `participations`, sorted by wins
/// descending. Every registered player appears; those with no games keep
/// all-zero counts. Ties keep the input player order (stable sort).
pub fn compute_player_stats(
    players: &[Player],
    participations: &[Participation],
) -> Vec<PlayerStats> {
    let mut stats: Vec<PlayerStats> = players
        .iter()
        .map(|p| PlayerStats {
            id: p.id,
            name: p.name.clone(),
            total_games: 0,
            wins: 0,
            losses: 0,
            win_rate: 0.0,
            spymaster_games: 0,
            spymaster_wins: 0,
            spymaster_win_rate: 0.0,
        })
        .collect();

    let index: HashMap<Uuid, usize> = players
        .iter()
        .enumerate()
        .map(|(i, p)| (p.id, i))
        .collect();

    for row in participations {
        // Rows for players removed since the game was recorded no longer
        // count toward anything.
        let Some(&i) = index.get(&row.player_id) else {
            continue;
        };
        let entry = &mut stats[i];

        let won = row.team == row.winning_team;
        entry.total_games += 1;
        if won {
            entry.wins += 1;
        } else {
            entry.losses += 1;
        }
        if row.is_spymaster {
            entry.spymaster_games += 1;
            if won {
                entry.spymaster_wins += 1;
            }
        }
    }

    for entry in &mut stats {
        if entry.total_games > 0 {
            entry.win_rate = entry.wins as f64 / entry.total_games as f64 * 100.0;
        }
        if entry.spymaster_games > 0 {
            entry.spymaster_win_rate =
                entry.spymaster_wins as f64 / entry.spymaster_games as f64 * 100.0;
        }
    }

    stats.sort_by(|a, b| b.wins.cmp(&a.wins));
    stats
}
