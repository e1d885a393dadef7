use async_trait::async_trait;
use sqlx::{query, query_as, SqlitePool};

use crate::repository::errors::{map_sqlx_error, RepositoryError};
use crate::repository::models::UserRow;
use crate::repository::traits::UserRepositoryTrait;

#[derive(Debug, Clone)]
pub struct UserRepository {
    pub pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepositoryTrait for UserRepository {
    async fn create_user(
        &self,
        login: &str,
        password: &str,
        name: &str,
    ) -> Result<UserRow, RepositoryError> {
        query(
            r#"
            INSERT INTO users (login, password, name)
            VALUES (?, ?, ?)
            "#,
        )
        .bind(login)
        .bind(password)
        .bind(name)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        let user = query_as::<_, UserRow>(
            r#"
            SELECT login, password, name FROM users WHERE login = ?
            "#,
        )
        .bind(login)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(user)
    }

    async fn get_user(&self, login: &str) -> Result<Option<UserRow>, RepositoryError> {
        let user = query_as::<_, UserRow>(
            r#"
            SELECT login, password, name FROM users WHERE login = ?
            "#,
        )
        .bind(login)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(user)
    }

    async fn update_user(
        &self,
        login: &str,
        password: &str,
        name: &str,
    ) -> Result<UserRow, RepositoryError> {
        let result = query(
            r#"
            UPDATE users
            SET password = ?, name = ?
            WHERE login = ?
            "#,
        )
        .bind(password)
        .bind(name)
        .bind(login)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        let user = query_as::<_, UserRow>(
            r#"
            SELECT login, password, name FROM users WHERE login = ?
            "#,
        )
        .bind(login)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(user)
    }

    async fn delete_user(&self, login: &str) -> Result<(), RepositoryError> {
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

        let result = query(
            r#"
            DELETE FROM users WHERE login = ?
            "#,
        )
        .bind(login)
        .execute(&mut *tx)
        .await
        .map_err(map_sqlx_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        tx.commit().await.map_err(map_sqlx_error)?;
        Ok(())
    }

    async fn get_users(&self) -> Result<Vec<UserRow>, RepositoryError> {
        // rowid order is insertion order for this table.
        let users = query_as::<_, UserRow>(
            r#"
            SELECT login, password, name FROM users ORDER BY rowid
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(users)
    }
}
