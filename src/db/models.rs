use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// One of the two sides of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Team {
    Red,
    Blue,
}

impl Team {
    pub fn as_str(&self) -> &'static str {
        match self {
            Team::Red => "red",
            Team::Blue => "blue",
        }
    }

    pub fn parse(s: &str) -> Option<Team> {
        match s {
            "red" => Some(Team::Red),
            "blue" => Some(Team::Blue),
            _ => None,
        }
    }
}

/// A registered player. Doubles as the wire type (camelCase JSON).
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Raw `games` row; teams stay strings until resolution.
#[derive(Debug, FromRow)]
pub struct GameRow {
    pub id: Uuid,
    pub red_team_spymaster: Uuid,
    pub blue_team_spymaster: Uuid,
    pub winning_team: String,
    pub played_at: DateTime<Utc>,
    pub notes: Option<String>,
}

/// Raw `game_participants` row as fetched for game resolution.
#[derive(Debug, FromRow)]
pub struct ParticipantRow {
    pub game_id: Uuid,
    pub player_id: Uuid,
    pub team: String,
    pub is_spymaster: bool,
}

/// Participant to insert when recording a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewParticipant {
    pub player_id: Uuid,
    pub team: Team,
    pub is_spymaster: bool,
}

/// One player's membership in one game joined with that game's outcome.
/// Input row for the statistics aggregation.
#[derive(Debug, Clone, Copy)]
pub struct Participation {
    pub player_id: Uuid,
    pub team: Team,
    pub is_spymaster: bool,
    pub winning_team: Team,
}

/// A game with both spymasters and the full roster resolved to player
/// records. Spymaster resolution is nullable: deleting a player leaves
/// historical games pointing at an id that no longer resolves.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedGame {
    pub id: Uuid,
    pub red_team_spymaster: Option<Player>,
    pub blue_team_spymaster: Option<Player>,
    pub winning_team: Team,
    pub played_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub participants: Vec<ResolvedParticipant>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedParticipant {
    pub player: Player,
    pub team: Team,
    pub is_spymaster: bool,
}
