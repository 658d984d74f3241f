use sea_orm::{ConnectionTrait, DatabaseBackend, DbConn, DbErr};
use std::error::Error;

/// Brings the schema up on a fresh or existing database. The statements are
/// idempotent (`IF NOT EXISTS`), so this runs unconditionally at startup.
pub async fn migrate(db: &DbConn) -> Result<(), DbErr> {
    let schema = match db.get_database_backend() {
        DatabaseBackend::Postgres => include_str!("migration/postgres.sql"),
        DatabaseBackend::Sqlite => include_str!("migration/sqlite.sql"),
        DatabaseBackend::MySql => {
            return Err(DbErr::Custom("mysql is not a supported backend".to_owned()));
        }
    };

    tracing::debug!(backend = ?db.get_database_backend(), "running migrations");
    db.execute_unprepared(schema)
        .await
        .inspect_err(|error| tracing::error!(error = error as &dyn Error, "failed to run migrations"))?;
    Ok(())
}
