//! Game persistence: transactional recording and resolved reads.

use std::collections::HashMap;

use sqlx::PgPool;
use uuid::Uuid;

use crate::db::models::{
    GameRow, NewParticipant, ParticipantRow, Participation, Player, ResolvedGame,
    ResolvedParticipant, Team,
};
use crate::error::ApiError;

/// Insert a game and all of its participant rows in one transaction, so a
/// failure partway never leaves a game without its roster. Returns the
/// generated game id.
pub async fn insert(
    db: &PgPool,
    red_spymaster: Uuid,
    blue_spymaster: Uuid,
    winning_team: Team,
    notes: Option<&str>,
    participants: &[NewParticipant],
) -> Result<Uuid, ApiError> {
    let mut tx = db.begin().await?;

    let game_id: Uuid = sqlx::query_scalar(
        "INSERT INTO games (red_team_spymaster, blue_team_spymaster, winning_team, notes)
         VALUES ($1, $2, $3, $4)
         RETURNING id",
    )
    .bind(red_spymaster)
    .bind(blue_spymaster)
    .bind(winning_team.as_str())
    .bind(notes)
    .fetch_one(&mut *tx)
    .await?;

    for p in participants {
        sqlx::query(
            "INSERT INTO game_participants (game_id, player_id, team, is_spymaster)
             VALUES ($1, $2, $3, $4)",
        )
        .bind(game_id)
        .bind(p.player_id)
        .bind(p.team.as_str())
        .bind(p.is_spymaster)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;
    Ok(game_id)
}

/// All games, most recent first, with spymasters and rosters resolved.
pub async fn list_resolved(db: &PgPool, limit: Option<i64>) -> Result<Vec<ResolvedGame>, ApiError> {
    let rows: Vec<GameRow> = if let Some(n) = limit {
        sqlx::query_as::<_, GameRow>(
            "SELECT id, red_team_spymaster, blue_team_spymaster, winning_team, played_at, notes
               FROM games
              ORDER BY played_at DESC
              LIMIT $1",
        )
        .bind(n)
        .fetch_all(db)
        .await?
    } else {
        sqlx::query_as::<_, GameRow>(
            "SELECT id, red_team_spymaster, blue_team_spymaster, winning_team, played_at, notes
               FROM games
              ORDER BY played_at DESC",
        )
        .fetch_all(db)
        .await?
    };

    resolve(db, rows).await
}

pub async fn get_resolved(db: &PgPool, id: Uuid) -> Result<Option<ResolvedGame>, ApiError> {
    let row = sqlx::query_as::<_, GameRow>(
        "SELECT id, red_team_spymaster, blue_team_spymaster, winning_team, played_at, notes
           FROM games
          WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(db)
    .await?;

    match row {
        Some(row) => Ok(resolve(db, vec![row]).await?.pop()),
        None => Ok(None),
    }
}

/// Every participation row joined with its game's outcome; the statistics
/// aggregation recomputes from this full history on each call.
pub async fn participations(db: &PgPool) -> Result<Vec<Participation>, ApiError> {
    let rows: Vec<(Uuid, String, bool, String)> = sqlx::query_as(
        "SELECT gp.player_id, gp.team, gp.is_spymaster, g.winning_team
           FROM game_participants gp
           JOIN games g ON g.id = gp.game_id",
    )
    .fetch_all(db)
    .await?;

    rows.into_iter()
        .map(|(player_id, team, is_spymaster, winning_team)| {
            Ok(Participation {
                player_id,
                team: parse_team(&team)?,
                is_spymaster,
                winning_team: parse_team(&winning_team)?,
            })
        })
        .collect()
}

fn parse_team(s: &str) -> Result<Team, ApiError> {
    Team::parse(s).ok_or_else(|| ApiError::internal(format!("unexpected team value in store: {s:?}")))
}

/// Batch-resolve spymasters and rosters for a set of game rows, preserving
/// the rows' order. Two lookups regardless of game count.
async fn resolve(db: &PgPool, rows: Vec<GameRow>) -> Result<Vec<ResolvedGame>, ApiError> {
    if rows.is_empty() {
        return Ok(Vec::new());
    }

    let game_ids: Vec<Uuid> = rows.iter().map(|g| g.id).collect();
    let participants: Vec<ParticipantRow> = sqlx::query_as::<_, ParticipantRow>(
        "SELECT game_id, player_id, team, is_spymaster
           FROM game_participants
          WHERE game_id = ANY($1)",
    )
    .bind(&game_ids)
    .fetch_all(db)
    .await?;

    let mut player_ids: Vec<Uuid> = participants.iter().map(|p| p.player_id).collect();
    for g in &rows {
        player_ids.push(g.red_team_spymaster);
        player_ids.push(g.blue_team_spymaster);
    }
    player_ids.sort_unstable();
    player_ids.dedup();

    let players: Vec<Player> = sqlx::query_as::<_, Player>(
        "SELECT id, name, created_at, updated_at FROM players WHERE id = ANY($1)",
    )
    .bind(&player_ids)
    .fetch_all(db)
    .await?;
    let players_by_id: HashMap<Uuid, Player> =
        players.into_iter().map(|p| (p.id, p)).collect();

    let mut roster_by_game: HashMap<Uuid, Vec<ResolvedParticipant>> = HashMap::new();
    for p in participants {
        // A participant row always has a live player (delete cascades), but
        // tolerate a miss rather than failing the whole listing.
        let Some(player) = players_by_id.get(&p.player_id) else {
            continue;
        };
        roster_by_game
            .entry(p.game_id)
            .or_default()
            .push(ResolvedParticipant {
                player: player.clone(),
                team: parse_team(&p.team)?,
                is_spymaster: p.is_spymaster,
            });
    }

    rows.into_iter()
        .map(|g| {
            Ok(ResolvedGame {
                id: g.id,
                red_team_spymaster: players_by_id.get(&g.red_team_spymaster).cloned(),
                blue_team_spymaster: players_by_id.get(&g.blue_team_spymaster).cloned(),
                winning_team: parse_team(&g.winning_team)?,
                played_at: g.played_at,
                notes: g.notes,
                participants: roster_by_game.remove(&g.id).unwrap_or_default(),
            })
        })
        .collect()
}
