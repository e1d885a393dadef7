use crate::repository::errors::RepositoryError;

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum AccountServiceError {
    #[error("login already exists")]
    LoginAlreadyExists,

    #[error("resource not found")]
    NotFound,

    #[error("unknown role id: {0}")]
    UnknownRole(i64),

    #[error("validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl From<RepositoryError> for AccountServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::LoginAlreadyExists => AccountServiceError::LoginAlreadyExists,
            RepositoryError::NotFound => AccountServiceError::NotFound,
            RepositoryError::Sqlx(e) => AccountServiceError::Internal(e.into()),
        }
    }
}
