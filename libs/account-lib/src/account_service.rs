use crate::entities::{Role, RoleRef, User, UserDraft, UserSummary};
use crate::errors_service::AccountServiceError;
use crate::repository::models::{RoleRow, UserRow};
use crate::repository::traits::{
    RoleRepositoryTrait, UserRepositoryTrait, UserRoleRepositoryTrait,
};
use crate::repository::{RoleRepository, UserRepository, UserRoleRepository};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::debug;

const MAX_ROLE_NAME_LENGTH: usize = 255;

fn validate_role_name(name: &str) -> Result<(), AccountServiceError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(AccountServiceError::Validation(
            "role name cannot be empty".to_string(),
        ));
    }
    if name.len() > MAX_ROLE_NAME_LENGTH {
        return Err(AccountServiceError::Validation(format!(
            "role name cannot exceed {MAX_ROLE_NAME_LENGTH} characters"
        )));
    }
    Ok(())
}

fn required_field(value: Option<&str>, field: &str) -> Result<String, AccountServiceError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ => Err(AccountServiceError::Validation(format!(
            "{field} is required"
        ))),
    }
}

fn validate_password(password: &str) -> Result<(), AccountServiceError> {
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err(AccountServiceError::Validation(
            "password must contain at least one digit".to_string(),
        ));
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        return Err(AccountServiceError::Validation(
            "password must contain at least one upper-case letter".to_string(),
        ));
    }
    Ok(())
}

fn dedup_role_ids(roles: &[RoleRef]) -> Vec<i64> {
    let mut ids: Vec<i64> = roles.iter().map(|r| r.id).collect();
    ids.sort_unstable();
    ids.dedup();
    ids
}

struct ValidatedUser {
    login: String,
    password: String,
    name: String,
    role_ids: Vec<i64>,
}

fn validate_user_draft(draft: &UserDraft) -> Result<ValidatedUser, AccountServiceError> {
    let login = required_field(draft.login.as_deref(), "login")?;
    let password = required_field(draft.password.as_deref(), "password")?;
    let name = required_field(draft.name.as_deref(), "name")?;
    validate_password(&password)?;
    Ok(ValidatedUser {
        login,
        password,
        name,
        role_ids: dedup_role_ids(&draft.roles),
    })
}

fn role_from_row(row: RoleRow) -> Role {
    Role {
        id: row.id,
        name: row.name,
    }
}

fn user_from_row(row: UserRow, roles: Vec<Role>) -> User {
    User {
        login: row.login,
        password: row.password,
        name: row.name,
        roles,
    }
}

fn summary_from_row(row: UserRow) -> UserSummary {
    UserSummary {
        login: row.login,
        password: row.password,
        name: row.name,
    }
}

#[derive(Debug, Clone)]
pub struct AccountService<U = UserRepository, R = RoleRepository, UR = UserRoleRepository>
where
    U: UserRepositoryTrait,
    R: RoleRepositoryTrait,
    UR: UserRoleRepositoryTrait,
{
    pub user_repo: Arc<U>,
    pub role_repo: Arc<R>,
    pub user_role_repo: Arc<UR>,
}

impl AccountService<UserRepository, RoleRepository, UserRoleRepository> {
    pub fn new(
        user_repo: UserRepository,
        role_repo: RoleRepository,
        user_role_repo: UserRoleRepository,
    ) -> Self {
        Self {
            user_repo: Arc::new(user_repo),
            role_repo: Arc::new(role_repo),
            user_role_repo: Arc::new(user_role_repo),
        }
    }
}

impl<U, R, UR> AccountService<U, R, UR>
where
    U: UserRepositoryTrait,
    R: RoleRepositoryTrait,
    UR: UserRoleRepositoryTrait,
{
    pub fn with_repos(user_repo: Arc<U>, role_repo: Arc<R>, user_role_repo: Arc<UR>) -> Self {
        Self {
            user_repo,
            role_repo,
            user_role_repo,
        }
    }

    async fn fetch_roles_for_user(&self, login: &str) -> Result<Vec<Role>, AccountServiceError> {
        let rows = self
            .user_role_repo
            .get_roles_for_user(login)
            .await
            .map_err(AccountServiceError::from)?;
        Ok(rows.into_iter().map(role_from_row).collect())
    }

    /// Every referenced id must exist; a single unknown id fails the whole
    /// request before anything is written.
    async fn resolve_roles(&self, role_ids: &[i64]) -> Result<Vec<Role>, AccountServiceError> {
        if role_ids.is_empty() {
            return Ok(vec![]);
        }

        let rows = self
            .role_repo
            .get_roles_by_ids(role_ids)
            .await
            .map_err(AccountServiceError::from)?;

        let found: HashSet<i64> = rows.iter().map(|r| r.id).collect();
        if let Some(missing) = role_ids.iter().copied().find(|id| !found.contains(id)) {
            return Err(AccountServiceError::UnknownRole(missing));
        }

        Ok(rows.into_iter().map(role_from_row).collect())
    }

    pub async fn create_user(&self, draft: UserDraft) -> Result<User, AccountServiceError> {
        let valid = validate_user_draft(&draft)?;
        let roles = self.resolve_roles(&valid.role_ids).await?;

        let row = self
            .user_repo
            .create_user(&valid.login, &valid.password, &valid.name)
            .await
            .map_err(AccountServiceError::from)?;
        self.user_role_repo
            .replace_roles(&row.login, &valid.role_ids)
            .await
            .map_err(AccountServiceError::from)?;
        debug!(login = %row.login, "user created");
        Ok(user_from_row(row, roles))
    }

    pub async fn get_user(&self, login: &str) -> Result<Option<User>, AccountServiceError> {
        let user_row = self
            .user_repo
            .get_user(login)
            .await
            .map_err(AccountServiceError::from)?;
        match user_row {
            Some(row) => {
                let roles = self.fetch_roles_for_user(&row.login).await?;
                Ok(Some(user_from_row(row, roles)))
            }
            None => Ok(None),
        }
    }

    /// The submitted role set replaces the stored one entirely; roles absent
    /// from the payload are unassigned.
    pub async fn update_user(&self, draft: UserDraft) -> Result<User, AccountServiceError> {
        let valid = validate_user_draft(&draft)?;
        let roles = self.resolve_roles(&valid.role_ids).await?;

        let row = self
            .user_repo
            .update_user(&valid.login, &valid.password, &valid.name)
            .await
            .map_err(AccountServiceError::from)?;
        self.user_role_repo
            .replace_roles(&row.login, &valid.role_ids)
            .await
            .map_err(AccountServiceError::from)?;
        Ok(user_from_row(row, roles))
    }

    pub async fn delete_user(&self, login: &str) -> Result<(), AccountServiceError> {
        self.user_repo
            .delete_user(login)
            .await
            .map_err(AccountServiceError::from)
    }

    /// List projection: no role resolution, creation order.
    pub async fn get_users(&self) -> Result<Vec<UserSummary>, AccountServiceError> {
        let rows = self
            .user_repo
            .get_users()
            .await
            .map_err(AccountServiceError::from)?;
        Ok(rows.into_iter().map(summary_from_row).collect())
    }

    pub async fn create_role(&self, name: &str) -> Result<Role, AccountServiceError> {
        validate_role_name(name)?;
        let row = self
            .role_repo
            .create_role(name.trim())
            .await
            .map_err(AccountServiceError::from)?;
        Ok(role_from_row(row))
    }

    pub async fn get_role(&self, role_id: i64) -> Result<Option<Role>, AccountServiceError> {
        let role_row = self
            .role_repo
            .get_role(role_id)
            .await
            .map_err(AccountServiceError::from)?;
        Ok(role_row.map(role_from_row))
    }

    pub async fn update_role(&self, role_id: i64, name: &str) -> Result<Role, AccountServiceError> {
        validate_role_name(name)?;
        let row = self
            .role_repo
            .update_role(role_id, name.trim())
            .await
            .map_err(AccountServiceError::from)?;
        Ok(role_from_row(row))
    }

    pub async fn delete_role(&self, role_id: i64) -> Result<(), AccountServiceError> {
        self.role_repo
            .delete_role(role_id)
            .await
            .map_err(AccountServiceError::from)
    }

    pub async fn get_roles(&self) -> Result<Vec<Role>, AccountServiceError> {
        let rows = self
            .role_repo
            .get_roles()
            .await
            .map_err(AccountServiceError::from)?;
        Ok(rows.into_iter().map(role_from_row).collect())
    }
}
