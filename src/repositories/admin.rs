use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    Set,
};

use crate::entity::admin::{self, ActiveModel, Column, Entity as AdminEntity};
use crate::error::{AppError, AppResult};
use crate::models::Admin;

/// Admin account repository
pub struct AdminRepository;

impl AdminRepository {
    /// Create a new admin account from an already hashed password
    pub async fn create(
        db: &DatabaseConnection,
        username: &str,
        password_hash: &str,
    ) -> AppResult<Admin> {
        let model = ActiveModel {
            username: Set(username.to_string()),
            password_hash: Set(password_hash.to_string()),
            created_at: Set(time::OffsetDateTime::now_utc()),
            ..Default::default()
        };

        let result = model.insert(db).await?;
        Ok(result.into())
    }

    /// Find admin by username (for login)
    pub async fn find_by_username(db: &DatabaseConnection, username: &str) -> AppResult<Admin> {
        let model = AdminEntity::find()
            .filter(Column::Username.eq(username))
            .one(db)
            .await?
            .ok_or_else(|| AppError::NotFound("Admin".to_string()))?;

        Ok(model.into())
    }

    /// Check if username exists
    pub async fn username_exists(db: &DatabaseConnection, username: &str) -> AppResult<bool> {
        let count = AdminEntity::find()
            .filter(Column::Username.eq(username))
            .count(db)
            .await?;

        Ok(count > 0)
    }
}

// Conversion from SeaORM model to our domain model
impl From<admin::Model> for Admin {
    fn from(m: admin::Model) -> Self {
        Self {
            id: m.id,
            username: m.username,
            password_hash: m.password_hash,
            created_at: m.created_at,
        }
    }
}
