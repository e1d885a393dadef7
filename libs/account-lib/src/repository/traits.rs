use async_trait::async_trait;

use crate::repository::errors::RepositoryError;
use crate::repository::models::{RoleRow, UserRow};

#[async_trait]
pub trait UserRepositoryTrait: Send + Sync {
    async fn create_user(
        &self,
        login: &str,
        password: &str,
        name: &str,
    ) -> Result<UserRow, RepositoryError>;
    async fn get_user(&self, login: &str) -> Result<Option<UserRow>, RepositoryError>;
    async fn update_user(
        &self,
        login: &str,
        password: &str,
        name: &str,
    ) -> Result<UserRow, RepositoryError>;
    async fn delete_user(&self, login: &str) -> Result<(), RepositoryError>;
    async fn get_users(&self) -> Result<Vec<UserRow>, RepositoryError>;
}

#[async_trait]
pub trait RoleRepositoryTrait: Send + Sync {
    async fn create_role(&self, name: &str) -> Result<RoleRow, RepositoryError>;
    async fn get_role(&self, role_id: i64) -> Result<Option<RoleRow>, RepositoryError>;
    async fn get_roles_by_ids(&self, role_ids: &[i64]) -> Result<Vec<RoleRow>, RepositoryError>;
    async fn update_role(&self, role_id: i64, name: &str) -> Result<RoleRow, RepositoryError>;
    async fn delete_role(&self, role_id: i64) -> Result<(), RepositoryError>;
    async fn get_roles(&self) -> Result<Vec<RoleRow>, RepositoryError>;
}

#[async_trait]
pub trait UserRoleRepositoryTrait: Send + Sync {
    async fn replace_roles(&self, login: &str, role_ids: &[i64]) -> Result<(), RepositoryError>;
    async fn get_roles_for_user(&self, login: &str) -> Result<Vec<RoleRow>, RepositoryError>;
}
