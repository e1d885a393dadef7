use async_trait::async_trait;
use sqlx::{query, query_as, SqlitePool};
use tracing::debug;

use crate::repository::errors::{map_sqlx_error, RepositoryError};
use crate::repository::models::RoleRow;
use crate::repository::traits::UserRoleRepositoryTrait;

#[derive(Debug, Clone)]
pub struct UserRoleRepository {
    pub pool: SqlitePool,
}

impl UserRoleRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRoleRepositoryTrait for UserRoleRepository {
    async fn replace_roles(&self, login: &str, role_ids: &[i64]) -> Result<(), RepositoryError> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx_error)?;

        query(
            r#"
            DELETE FROM user_roles WHERE user_login = ?
            "#,
        )
        .bind(login)
        .execute(&mut *tx)
        .await
        .map_err(map_sqlx_error)?;

        for role_id in role_ids {
            query(
                r#"
                INSERT INTO user_roles (user_login, role_id)
                VALUES (?, ?)
                "#,
            )
            .bind(login)
            .bind(role_id)
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx_error)?;
        }

        tx.commit().await.map_err(map_sqlx_error)?;
        debug!(login, roles = role_ids.len(), "replaced role assignments");
        Ok(())
    }

    async fn get_roles_for_user(&self, login: &str) -> Result<Vec<RoleRow>, RepositoryError> {
        let roles = query_as::<_, RoleRow>(
            r#"
            SELECT r.id, r.name
            FROM roles r
            INNER JOIN user_roles ur ON ur.role_id = r.id
            WHERE ur.user_login = ?
            ORDER BY r.id
            "#,
        )
        .bind(login)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;
        Ok(roles)
    }
}
