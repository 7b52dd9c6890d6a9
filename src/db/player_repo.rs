use sqlx::PgPool;
use uuid::Uuid;

use crate::db::models::Player;
use crate::error::{is_unique_violation, ApiError};

pub async fn list(db: &PgPool) -> Result<Vec<Player>, ApiError> {
    let players = sqlx::query_as::<_, Player>(
        "SELECT id, name, created_at, updated_at FROM players",
    )
    .fetch_all(db)
    .await?;
    Ok(players)
}

/// Insert a player with an already-trimmed name. A unique-violation on the
/// name maps to a conflict so callers can show "already exists".
pub async fn insert(db: &PgPool, name: &str) -> Result<Player, ApiError> {
    let res = sqlx::query_as::<_, Player>(
        "INSERT INTO players (name) VALUES ($1) RETURNING id, name, created_at, updated_at",
    )
    .bind(name)
    .fetch_one(db)
    .await;

    match res {
        Ok(player) => Ok(player),
        Err(e) if is_unique_violation(&e) => {
            Err(ApiError::conflict("Player name already exists"))
        }
        Err(e) => Err(e.into()),
    }
}

/// Delete a player. Unknown ids delete nothing and still succeed; the
/// player's participant rows go with them via ON DELETE CASCADE.
pub async fn delete(db: &PgPool, id: Uuid) -> Result<(), ApiError> {
    sqlx::query("DELETE FROM players WHERE id = $1")
        .bind(id)
        .execute(db)
        .await?;
    Ok(())
}
