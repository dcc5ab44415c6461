use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::server::{config::Config, error::Error, service::patch_type::PatchTypeService};

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Insert the built-in patch types on first start
pub async fn seed_database(db: &DatabaseConnection) -> Result<(), Error> {
    let seeded = PatchTypeService::new(db).seed_default_patch_types().await?;

    if seeded > 0 {
        tracing::info!("Seeded {} default patch type(s)", seeded);
    }

    Ok(())
}
