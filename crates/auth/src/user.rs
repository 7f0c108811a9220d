use serde::{Deserialize, Serialize};

use medtrack_core::UserId;

use crate::role::Role;

/// User record (immutable fixture input).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub role: Role,
}
