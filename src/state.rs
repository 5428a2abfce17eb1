use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseConnection, EntityTrait, Schema,
};

use crate::config::Config;
use crate::entity::{Admin, Rule, Statement};
use crate::error::AppError;
use crate::repositories::AdminRepository;
use crate::services::AuthService;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub config: Config,
}

impl AppState {
    /// Connect to the database, create missing tables and seed the
    /// bootstrap admin account
    pub async fn new(config: Config) -> Result<Self, AppStateError> {
        let mut opt = ConnectOptions::new(&config.database_url);
        if config.database_url.contains(":memory:") {
            // Every pooled connection would get its own empty database
            opt.max_connections(1).min_connections(1);
        } else {
            opt.max_connections(100).min_connections(5);
        }
        opt.sqlx_logging(true);

        let db = Database::connect(opt)
            .await
            .map_err(|e| AppStateError::Database(e.to_string()))?;

        create_tables(&db)
            .await
            .map_err(|e| AppStateError::Migration(e.to_string()))?;

        let state = Self { db, config };
        state
            .seed_admin()
            .await
            .map_err(|e| AppStateError::Seed(e.to_string()))?;

        Ok(state)
    }

    /// Create the configured admin account unless it already exists
    async fn seed_admin(&self) -> Result<(), AppError> {
        let (Some(username), Some(password)) =
            (&self.config.admin_username, &self.config.admin_password)
        else {
            return Ok(());
        };

        if AdminRepository::username_exists(&self.db, username).await? {
            tracing::debug!(username = %username, "Admin account already present");
            return Ok(());
        }

        let password_hash = AuthService::hash_password(password)?;
        AdminRepository::create(&self.db, username, &password_hash).await?;
        tracing::info!(username = %username, "Seeded admin account");

        Ok(())
    }
}

async fn create_tables(db: &DatabaseConnection) -> Result<(), sea_orm::DbErr> {
    create_table(db, Rule).await?;
    create_table(db, Statement).await?;
    create_table(db, Admin).await?;
    Ok(())
}

async fn create_table<E>(db: &DatabaseConnection, entity: E) -> Result<(), sea_orm::DbErr>
where
    E: EntityTrait,
{
    let backend = db.get_database_backend();
    let mut stmt = Schema::new(backend).create_table_from_entity(entity);
    stmt.if_not_exists();
    db.execute(backend.build(&stmt)).await?;
    Ok(())
}

#[derive(Debug, thiserror::Error)]
pub enum AppStateError {
    #[error("Database connection error: {0}")]
    Database(String),

    #[error("Migration error: {0}")]
    Migration(String),

    #[error("Admin seeding error: {0}")]
    Seed(String),
}
