use crate::config::Config;
use crate::entities::{
    account, filament, filament_brand, filament_material, filament_profile, printer,
    printer_brand, profile_like, session, user, verification_token,
};
use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr, EntityTrait, Schema,
    Statement,
};
use std::time::Duration;

pub type DbPool = DatabaseConnection;

pub async fn create_pool(config: &Config) -> Result<DbPool, anyhow::Error> {
    let db = connect(&config.database.url, config.database.max_connections).await?;
    ensure_schema(&db).await?;
    Ok(db)
}

pub async fn connect(url: &str, max_connections: u32) -> Result<DbPool, DbErr> {
    let mut opt = ConnectOptions::new(url.to_owned());
    opt.max_connections(max_connections)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .sqlx_logging(true)
        .sqlx_logging_level(log::LevelFilter::Debug);

    Database::connect(opt).await
}

/// Creates every table declared under `entities` when it does not exist yet,
/// referenced tables first so foreign keys resolve on every backend.
pub async fn ensure_schema(db: &DbPool) -> Result<(), DbErr> {
    create_table(db, user::Entity).await?;
    create_table(db, account::Entity).await?;
    create_table(db, session::Entity).await?;
    create_table(db, verification_token::Entity).await?;
    create_table(db, filament_brand::Entity).await?;
    create_table(db, filament_material::Entity).await?;
    create_table(db, filament::Entity).await?;
    create_table(db, printer_brand::Entity).await?;
    create_table(db, printer::Entity).await?;
    create_table(db, filament_profile::Entity).await?;
    create_table(db, profile_like::Entity).await?;

    // Emails are unique regardless of case.
    db.execute(Statement::from_string(
        db.get_database_backend(),
        r#"CREATE UNIQUE INDEX IF NOT EXISTS "emailUniqueIndex" ON "user" (lower("email"))"#
            .to_string(),
    ))
    .await?;

    // One like per user and profile.
    db.execute(Statement::from_string(
        db.get_database_backend(),
        r#"CREATE UNIQUE INDEX IF NOT EXISTS "profileLikeUniqueIndex" ON "profile_likes" ("user_id", "profile_id")"#
            .to_string(),
    ))
    .await?;

    log::info!("Database schema ready");
    Ok(())
}

async fn create_table<E>(db: &DbPool, entity: E) -> Result<(), DbErr>
where
    E: EntityTrait,
{
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);
    let mut stmt = schema.create_table_from_entity(entity);
    stmt.if_not_exists();
    db.execute(backend.build(&stmt)).await?;
    Ok(())
}
