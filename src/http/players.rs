//! Player registry: list, add, remove.

use actix_web::{delete, get, post, web, HttpResponse};
use serde::Deserialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::db::player_repo;
use crate::error::ApiError;
use crate::http::auth::AdminSession;

pub const MAX_NAME_LEN: usize = 100;

#[derive(Deserialize)]
pub struct NewPlayerRequest {
    #[serde(default)]
    pub name: String,
}

#[derive(Deserialize)]
pub struct DeleteParams {
    pub id: Option<String>,
}

/// Trim and validate a display name.
pub fn normalize_name(raw: &str) -> Result<String, ApiError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(ApiError::validation("Name is required"));
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err(ApiError::validation("Name must be at most 100 characters"));
    }
    Ok(name.to_string())
}

/// GET /api/players
#[get("/players")]
pub async fn list(_session: AdminSession, db: web::Data<PgPool>) -> Result<HttpResponse, ApiError> {
    let players = player_repo::list(db.get_ref()).await?;
    Ok(HttpResponse::Ok().json(players))
}

/// POST /api/players
#[post("/players")]
pub async fn create(
    _session: AdminSession,
    db: web::Data<PgPool>,
    info: web::Json<NewPlayerRequest>,
) -> Result<HttpResponse, ApiError> {
    let name = normalize_name(&info.name)?;
    let player = player_repo::insert(db.get_ref(), &name).await?;
    Ok(HttpResponse::Created().json(player))
}

/// DELETE /api/players?id=<uuid>
///
/// Unknown ids are a no-op success. Participant rows cascade away with the
/// player; games recorded with them as spymaster keep the dangling id.
#[delete("/players")]
pub async fn remove(
    _session: AdminSession,
    db: web::Data<PgPool>,
    query: web::Query<DeleteParams>,
) -> Result<HttpResponse, ApiError> {
    let id = query
        .id
        .as_deref()
        .ok_or_else(|| ApiError::validation("Player ID is required"))?;
    let id = Uuid::parse_str(id)
        .map_err(|_| ApiError::validation("Player ID must be a valid UUID"))?;

    player_repo::delete(db.get_ref(), id).await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({ "message": "Player deleted successfully" })))
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(list).service(create).service(remove);
}
