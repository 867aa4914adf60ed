use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct UserRow {
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub roles: Option<Json<serde_json::Value>>,
}

#[derive(Debug, Clone, FromRow)]
pub struct EndUserRow {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub approval_state: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
