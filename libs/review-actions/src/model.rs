use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ApprovalState {
    Pending,
    Approved,
    Rejected,
}

/// End user as returned by the workflows API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EndUserView {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub approval_state: ApprovalState,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
