//! User accounts

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{Role, UserId};

/// Body of `POST /users`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateUserRequest {
    pub wallet_address: String,
    pub role: Role,
}

/// A user record as returned by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub user_id: UserId,
    pub wallet_address: String,
    /// Fixed at creation
    pub role: Role,
    #[serde(with = "core_kernel::timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "core_kernel::timestamp")]
    pub updated_at: DateTime<Utc>,
}
