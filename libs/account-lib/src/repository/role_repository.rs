use async_trait::async_trait;
use sqlx::{query, query_as, SqlitePool};

use crate::repository::errors::{map_sqlx_error, RepositoryError};
use crate::repository::models::RoleRow;
use crate::repository::traits::RoleRepositoryTrait;

#[derive(Debug, Clone)]
pub struct RoleRepository {
    pub pool: SqlitePool,
}

impl RoleRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RoleRepositoryTrait for RoleRepository {
    async fn create_role(&self, name: &str) -> Result<RoleRow, RepositoryError> {
        let result = query(
            r#"
            INSERT INTO roles (name)
            VALUES (?)
            "#,
        )
        .bind(name)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        let role = query_as::<_, RoleRow>(r#"SELECT id, name FROM roles WHERE id = ?"#)
            .bind(result.last_insert_rowid())
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx_error)?;
        Ok(role)
    }

    async fn get_role(&self, role_id: i64) -> Result<Option<RoleRow>, RepositoryError> {
        let role = query_as::<_, RoleRow>(
            r#"
            SELECT id, name FROM roles WHERE id = ?
            "#,
        )
        .bind(role_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;
        Ok(role)
    }

    async fn get_roles_by_ids(&self, role_ids: &[i64]) -> Result<Vec<RoleRow>, RepositoryError> {
        if role_ids.is_empty() {
            return Ok(Vec::new());
        }

        let placeholders = vec!["?"; role_ids.len()].join(", ");
        let sql = format!("SELECT id, name FROM roles WHERE id IN ({placeholders}) ORDER BY id");

        let mut q = query_as::<_, RoleRow>(&sql);
        for role_id in role_ids {
            q = q.bind(role_id);
        }

        let roles = q.fetch_all(&self.pool).await.map_err(map_sqlx_error)?;
        Ok(roles)
    }

    async fn update_role(&self, role_id: i64, name: &str) -> Result<RoleRow, RepositoryError> {
        let result = query(
            r#"
            UPDATE roles
            SET name = ?
            WHERE id = ?
            "#,
        )
        .bind(name)
        .bind(role_id)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        let role = query_as::<_, RoleRow>(r#"SELECT id, name FROM roles WHERE id = ?"#)
            .bind(role_id)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx_error)?;
        Ok(role)
    }

    async fn delete_role(&self, role_id: i64) -> Result<(), RepositoryError> {
        // Assignments go with the role; users themselves are left untouched.
        let mut tx = self.pool.begin().await.map_err(map_sqlx_error)?;

        query(
            r#"
            DELETE FROM user_roles WHERE role_id = ?
            "#,
        )
        .bind(role_id)
        .execute(&mut *tx)
        .await
        .map_err(map_sqlx_error)?;

        let result = query(
            r#"
            DELETE FROM roles WHERE id = ?
            "#,
        )
        .bind(role_id)
        .execute(&mut *tx)
        .await
        .map_err(map_sqlx_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        tx.commit().await.map_err(map_sqlx_error)?;
        Ok(())
    }

    async fn get_roles(&self) -> Result<Vec<RoleRow>, RepositoryError> {
        let roles = query_as::<_, RoleRow>(
            r#"
            SELECT id, name FROM roles ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;
        Ok(roles)
    }
}
