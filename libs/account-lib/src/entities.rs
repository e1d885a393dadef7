use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Role {
    pub id: i64,
    pub name: String,
}

/// Read shape: roles are resolved to full [`Role`] values, ordered by id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub login: String,
    pub password: String,
    pub name: String,
    pub roles: Vec<Role>,
}

/// List projection of a user, without the role collection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserSummary {
    pub login: String,
    pub password: String,
    pub name: String,
}

/// Write shape: what a caller submits to create or replace a user. Fields
/// arrive unvalidated and roles are referenced by id only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserDraft {
    pub login: Option<String>,
    pub password: Option<String>,
    pub name: Option<String>,
    pub roles: Vec<RoleRef>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleRef {
    pub id: i64,
}
