//! One-shot schema bootstrap: `cargo run --bin create_db`.

use anyhow::Context;
use sqlx::postgres::PgPoolOptions;
use std::env;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let database_url = env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
    let pool = PgPoolOptions::new()
        .max_connections(1)
        .connect(&database_url)
        .await
        .context("Failed to connect to Postgres")?;

    codenames_server::db::init_schema(&pool)
        .await
        .context("Failed to apply schema")?;

    log::info!("schema is up to date");
    Ok(())
}
