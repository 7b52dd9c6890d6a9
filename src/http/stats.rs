//! Aggregate statistics: per-player win counts plus a recent-match feed.

use actix_web::{get, web, HttpResponse};
use serde::Serialize;
use sqlx::PgPool;

use crate::db::models::ResolvedGame;
use crate::db::{game_repo, player_repo};
use crate::error::ApiError;
use crate::http::auth::AdminSession;
use crate::stats::{compute_player_stats, PlayerStats};

pub const RECENT_GAMES_LIMIT: i64 = 10;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub player_stats: Vec<PlayerStats>,
    pub recent_games: Vec<ResolvedGame>,
}

/// GET /api/stats
#[get("/stats")]
pub async fn stats(_session: AdminSession, db: web::Data<PgPool>) -> Result<HttpResponse, ApiError> {
    let players = player_repo::list(db.get_ref()).await?;
    let participations = game_repo::participations(db.get_ref()).await?;
    let player_stats = compute_player_stats(&players, &participations);

    let recent_games = game_repo::list_resolved(db.get_ref(), Some(RECENT_GAMES_LIMIT)).await?;

    Ok(HttpResponse::Ok().json(StatsResponse {
        player_stats,
        recent_games,
    }))
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(stats);
}
