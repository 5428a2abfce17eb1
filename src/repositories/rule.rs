use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};

use crate::entity::rule::{self, ActiveModel, Column, Entity as RuleEntity};
use crate::error::{AppError, AppResult};
use crate::models::{CreateRule, Rule};
use crate::repositories::{Lookup, Repository};

/// Rule repository for database operations
pub struct RuleRepository;

#[async_trait]
impl Repository<Rule> for RuleRepository {
    async fn find_by_id(db: &DatabaseConnection, id: i32) -> AppResult<Rule> {
        let model = RuleEntity::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| AppError::NotFound("Rule".to_string()))?;

        Ok(model.into())
    }

    async fn delete(db: &DatabaseConnection, id: i32) -> AppResult<()> {
        let result = RuleEntity::delete_by_id(id).exec(db).await?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound("Rule".to_string()));
        }

        Ok(())
    }

    async fn search(db: &DatabaseConnection, lookup: &Lookup) -> AppResult<Vec<Rule>> {
        let query = match lookup {
            Lookup::Id(id) => RuleEntity::find().filter(Column::Id.eq(*id)),
            Lookup::Text(text) => RuleEntity::find().filter(Column::Text.eq(text.as_str())),
        };

        let models = query.order_by_asc(Column::Id).all(db).await?;
        Ok(models.into_iter().map(|m| m.into()).collect())
    }

    async fn count(db: &DatabaseConnection) -> AppResult<u64> {
        let count = RuleEntity::find().count(db).await?;
        Ok(count)
    }
}

impl RuleRepository {
    /// Create a new rule
    pub async fn create(db: &DatabaseConnection, input: &CreateRule) -> AppResult<Rule> {
        let model = ActiveModel {
            text: Set(input.text.clone()),
            response: Set(input.response.clone()),
            created_at: Set(time::OffsetDateTime::now_utc()),
            ..Default::default()
        };

        let result = model.insert(db).await?;
        tracing::info!(rule_id = result.id, "Rule created");
        Ok(result.into())
    }

    /// Most recently created rule matching the text exactly
    pub async fn find_latest_by_text(db: &DatabaseConnection, text: &str) -> AppResult<Option<Rule>> {
        let model = RuleEntity::find()
            .filter(Column::Text.eq(text))
            .order_by_desc(Column::Id)
            .one(db)
            .await?;

        Ok(model.map(|m| m.into()))
    }
}

// Conversion from SeaORM model to our domain model
impl From<rule::Model> for Rule {
    fn from(m: rule::Model) -> Self {
        Self {
            id: m.id,
            text: m.text,
            response: m.response,
            created_at: m.created_at,
        }
    }
}
