pub mod game_repo;
pub mod models;
pub mod player_repo;

use sqlx::PgPool;

/// Schema, applied idempotently by the `create_db` binary.
///
/// The spymaster columns on `games` intentionally carry no foreign key:
/// removing a player must succeed and leave historical games with a
/// dangling spymaster id, which resolution then reports as null.
const SCHEMA: &[&str] = &[
    "CREATE EXTENSION IF NOT EXISTS pgcrypto",
    r#"
    CREATE TABLE IF NOT EXISTS players (
        id          uuid PRIMARY KEY DEFAULT gen_random_uuid(),
        name        varchar(100) NOT NULL UNIQUE,
        created_at  timestamptz NOT NULL DEFAULT now(),
        updated_at  timestamptz NOT NULL DEFAULT now()
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS games (
        id                  uuid PRIMARY KEY DEFAULT gen_random_uuid(),
        red_team_spymaster  uuid NOT NULL,
        blue_team_spymaster uuid NOT NULL,
        winning_team        varchar(10) NOT NULL CHECK (winning_team IN ('red', 'blue')),
        played_at           timestamptz NOT NULL DEFAULT now(),
        notes               text
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS game_participants (
        id           uuid PRIMARY KEY DEFAULT gen_random_uuid(),
        game_id      uuid NOT NULL REFERENCES games (id) ON DELETE CASCADE,
        player_id    uuid NOT NULL REFERENCES players (id) ON DELETE CASCADE,
        team         varchar(10) NOT NULL CHECK (team IN ('red', 'blue')),
        is_spymaster boolean NOT NULL DEFAULT false
    )
    "#,
    "CREATE INDEX IF NOT EXISTS idx_game_participants_game ON game_participants (game_id)",
    "CREATE INDEX IF NOT EXISTS idx_game_participants_player ON game_participants (player_id)",
];

pub async fn init_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    for stmt in SCHEMA {
        sqlx::query(stmt).execute(pool).await?;
    }
    Ok(())
}
