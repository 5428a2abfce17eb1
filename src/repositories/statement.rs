use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};
use uuid::Uuid;

use crate::entity::statement::{self, ActiveModel, Column, Entity as StatementEntity};
use crate::error::{AppError, AppResult};
use crate::models::{CreateStatement, Statement};
use crate::repositories::{Lookup, Repository};

/// Statement repository for database operations
pub struct StatementRepository;

#[async_trait]
impl Repository<Statement> for StatementRepository {
    async fn find_by_id(db: &DatabaseConnection, id: i32) -> AppResult<Statement> {
        let model = StatementEntity::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| AppError::NotFound("Statement".to_string()))?;

        Ok(model.into())
    }

    async fn delete(db: &DatabaseConnection, id: i32) -> AppResult<()> {
        let result = StatementEntity::delete_by_id(id).exec(db).await?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound("Statement".to_string()));
        }

        Ok(())
    }

    async fn search(db: &DatabaseConnection, lookup: &Lookup) -> AppResult<Vec<Statement>> {
        let query = match lookup {
            Lookup::Id(id) => StatementEntity::find().filter(Column::Id.eq(*id)),
            Lookup::Text(text) => StatementEntity::find().filter(Column::Text.eq(text.as_str())),
        };

        let models = query.order_by_asc(Column::Id).all(db).await?;
        Ok(models.into_iter().map(|m| m.into()).collect())
    }

    async fn count(db: &DatabaseConnection) -> AppResult<u64> {
        let count = StatementEntity::find().count(db).await?;
        Ok(count)
    }
}

impl StatementRepository {
    /// Learn a question/answer pair.
    ///
    /// Both statements share a fresh conversation label and are written in a
    /// single transaction; the answer points back at the question text.
    pub async fn create_pair(
        db: &DatabaseConnection,
        input: &CreateStatement,
    ) -> AppResult<(Statement, Statement)> {
        let conversation = Uuid::new_v4().to_string();
        let now = time::OffsetDateTime::now_utc();
        let txn = db.begin().await?;

        let question = ActiveModel {
            text: Set(input.text.clone()),
            in_response_to: Set(None),
            conversation: Set(conversation.clone()),
            created_at: Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        let answer = ActiveModel {
            text: Set(input.response.clone()),
            in_response_to: Set(Some(input.text.clone())),
            conversation: Set(conversation),
            created_at: Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;
        tracing::info!(
            question_id = question.id,
            answer_id = answer.id,
            "Statement pair learned"
        );

        Ok((question.into(), answer.into()))
    }

    /// Most recently learned statement answering the given text
    pub async fn find_latest_reply(
        db: &DatabaseConnection,
        text: &str,
    ) -> AppResult<Option<Statement>> {
        let model = StatementEntity::find()
            .filter(Column::InResponseTo.eq(text))
            .order_by_desc(Column::Id)
            .one(db)
            .await?;

        Ok(model.map(|m| m.into()))
    }
}

// Conversion from SeaORM model to our domain model
impl From<statement::Model> for Statement {
    fn from(m: statement::Model) -> Self {
        Self {
            id: m.id,
            text: m.text,
            in_response_to: m.in_response_to,
            conversation: m.conversation,
            created_at: m.created_at,
        }
    }
}
