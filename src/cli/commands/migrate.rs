//! Migrate command handler

use crate::config::Config;
use crate::db::Store;

/// Opening the store applies every pending migration.
pub async fn cmd_migrate(config: &Config) -> anyhow::Result<()> {
    let store = Store::with_pool_options(
        &config.general.database_path,
        config.general.max_db_connections,
        config.general.min_db_connections,
    )
    .await?;
    store.ping().await?;

    println!("Database at {} is up to date", config.general.database_path);
    Ok(())
}
