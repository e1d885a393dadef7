use account_lib::entities::{Role, RoleRef, User, UserDraft, UserSummary};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Write shape for POST /user and PUT /user. Role references carry the id
/// only; any other fields a caller sends alongside it are ignored.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UserPayload {
    pub login: Option<String>,
    pub password: Option<String>,
    pub name: Option<String>,
    pub roles: Option<Vec<RoleRefPayload>>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct RoleRefPayload {
    pub id: i64,
}

impl From<UserPayload> for UserDraft {
    fn from(payload: UserPayload) -> Self {
        UserDraft {
            login: payload.login,
            password: payload.password,
            name: payload.name,
            roles: payload
                .roles
                .unwrap_or_default()
                .into_iter()
                .map(|r| RoleRef { id: r.id })
                .collect(),
        }
    }
}

/// Write shape for POST /role. The store assigns the id.
#[derive(Debug, Deserialize, ToSchema)]
pub struct RolePayload {
    pub name: Option<String>,
}

/// Write shape for PUT /role; the target is identified by the id in the body.
#[derive(Debug, Deserialize, ToSchema)]
pub struct RoleUpdatePayload {
    pub id: i64,
    pub name: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RoleResponse {
    pub id: i64,
    pub name: String,
    /// Back-reference kept in the wire shape; always serialized empty.
    pub users: Vec<UserSummaryResponse>,
}

impl From<Role> for RoleResponse {
    fn from(role: Role) -> Self {
        RoleResponse {
            id: role.id,
            name: role.name,
            users: Vec::new(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct UserResponse {
    pub login: String,
    pub password: String,
    pub name: String,
    pub roles: Vec<RoleResponse>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        UserResponse {
            login: user.login,
            password: user.password,
            name: user.name,
            roles: user.roles.into_iter().map(RoleResponse::from).collect(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct UserSummaryResponse {
    pub login: String,
    pub password: String,
    pub name: String,
}

impl From<UserSummary> for UserSummaryResponse {
    fn from(summary: UserSummary) -> Self {
        UserSummaryResponse {
            login: summary.login,
            password: summary.password,
            name: summary.name,
        }
    }
}
