//! Game recording and match-history listing.

use actix_web::{get, post, web, HttpResponse};
use serde::Deserialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::db::game_repo;
use crate::db::models::{NewParticipant, Team};
use crate::error::ApiError;
use crate::http::auth::AdminSession;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordGameRequest {
    #[serde(default)]
    pub red_team_spymaster: String,
    #[serde(default)]
    pub blue_team_spymaster: String,
    #[serde(default)]
    pub winning_team: String,
    #[serde(default)]
    pub red_team_players: Vec<String>,
    #[serde(default)]
    pub blue_team_players: Vec<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// A record-game request that passed validation.
#[derive(Debug)]
pub struct ValidGame {
    pub red_spymaster: Uuid,
    pub blue_spymaster: Uuid,
    pub winning_team: Team,
    pub red_team: Vec<Uuid>,
    pub blue_team: Vec<Uuid>,
    pub notes: Option<String>,
}

/// All checks run before any write. Deliberately lenient in two ways,
/// matching the recorded policy: a spymaster need not appear in their
/// team's player list, and the same player may appear on both teams.
pub fn validate(req: &RecordGameRequest) -> Result<ValidGame, ApiError> {
    if req.red_team_spymaster.is_empty()
        || req.blue_team_spymaster.is_empty()
        || req.winning_team.is_empty()
    {
        return Err(ApiError::validation(
            "Red team spymaster, blue team spymaster, and winning team are required",
        ));
    }

    let winning_team = Team::parse(&req.winning_team)
        .ok_or_else(|| ApiError::validation(r#"Winning team must be either "red" or "blue""#))?;

    if req.red_team_players.is_empty() || req.blue_team_players.is_empty() {
        return Err(ApiError::validation(
            "Both teams must have at least one player",
        ));
    }

    Ok(ValidGame {
        red_spymaster: parse_player_id(&req.red_team_spymaster)?,
        blue_spymaster: parse_player_id(&req.blue_team_spymaster)?,
        winning_team,
        red_team: parse_player_ids(&req.red_team_players)?,
        blue_team: parse_player_ids(&req.blue_team_players)?,
        notes: req.notes.clone(),
    })
}

fn parse_player_id(s: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(s).map_err(|_| ApiError::validation("Player IDs must be valid UUIDs"))
}

fn parse_player_ids(ids: &[String]) -> Result<Vec<Uuid>, ApiError> {
    ids.iter().map(|s| parse_player_id(s)).collect()
}

/// One participant row per listed player, tagged with their team; the
/// spymaster flag is set exactly where the id equals that team's spymaster.
pub fn build_participants(game: &ValidGame) -> Vec<NewParticipant> {
    game.red_team
        .iter()
        .map(|&player_id| NewParticipant {
            player_id,
            team: Team::Red,
            is_spymaster: player_id == game.red_spymaster,
        })
        .chain(game.blue_team.iter().map(|&player_id| NewParticipant {
            player_id,
            team: Team::Blue,
            is_spymaster: player_id == game.blue_spymaster,
        }))
        .collect()
}

/// GET /api/games
#[get("/games")]
pub async fn list(_session: AdminSession, db: web::Data<PgPool>) -> Result<HttpResponse, ApiError> {
    let games = game_repo::list_resolved(db.get_ref(), None).await?;
    Ok(HttpResponse::Ok().json(games))
}

/// POST /api/games
///
/// Records a finished game and answers with the fully resolved result so
/// the caller needs no second round trip.
#[post("/games")]
pub async fn create(
    _session: AdminSession,
    db: web::Data<PgPool>,
    info: web::Json<RecordGameRequest>,
) -> Result<HttpResponse, ApiError> {
    let game = validate(&info)?;
    let participants = build_participants(&game);

    let game_id = game_repo::insert(
        db.get_ref(),
        game.red_spymaster,
        game.blue_spymaster,
        game.winning_team,
        game.notes.as_deref(),
        &participants,
    )
    .await?;

    let resolved = game_repo::get_resolved(db.get_ref(), game_id)
        .await?
        .ok_or_else(|| ApiError::internal(format!("game {game_id} missing after insert")))?;

    Ok(HttpResponse::Created().json(resolved))
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(list).service(create);
}
