use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Admin {
    pub id: i32,
    pub username: String,
    #[serde(skip_serializing)] // Never expose password hash
    pub password_hash: String,
    pub created_at: OffsetDateTime,
}
