pub mod admin;
pub mod rule;
pub mod statement;

pub use admin::AdminRepository;
pub use rule::RuleRepository;
pub use statement::StatementRepository;

use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use crate::error::AppResult;

/// How an admin search selects records
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    /// Exact primary key
    Id(i32),
    /// Exact text equality
    Text(String),
}

/// Base repository trait for common CRUD operations
#[async_trait]
pub trait Repository<T>
where
    T: Send + Sync,
{
    /// Find entity by ID
    async fn find_by_id(db: &DatabaseConnection, id: i32) -> AppResult<T>;

    /// Delete entity by ID
    async fn delete(db: &DatabaseConnection, id: i32) -> AppResult<()>;

    /// Search entities by id or text, ordered by ascending id
    async fn search(db: &DatabaseConnection, lookup: &Lookup) -> AppResult<Vec<T>>;

    /// Count total entities
    async fn count(db: &DatabaseConnection) -> AppResult<u64>;
}
