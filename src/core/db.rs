use std::time::Duration;

use anyhow::Context;
use sqlx::{pool::PoolOptions, Pool, Postgres};

use crate::settings::Config;

pub async fn init_pool(config: &Config) -> anyhow::Result<Pool<Postgres>> {
    PoolOptions::new()
        .min_connections(config.db_min_connections.unwrap_or(5))
        .max_connections(config.db_max_connections.unwrap_or(100))
        .idle_timeout(Duration::from_secs(5))
        .connect(&config.database_url)
        .await
        .context("failed to connect to database")
}
