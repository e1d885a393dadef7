#[derive(Debug)]
pub enum RepositoryError {
    LoginAlreadyExists,
    NotFound,
    Sqlx(sqlx::Error),
}

impl std::fmt::Display for RepositoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RepositoryError::LoginAlreadyExists => write!(f, "login already exists"),
            RepositoryError::NotFound => write!(f, "not found"),
            RepositoryError::Sqlx(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for RepositoryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RepositoryError::LoginAlreadyExists => None,
            RepositoryError::NotFound => None,
            RepositoryError::Sqlx(e) => Some(e),
        }
    }
}

impl From<sqlx::Error> for RepositoryError {
    fn from(value: sqlx::Error) -> Self {
        map_sqlx_error(value)
    }
}

pub fn map_sqlx_error(err: sqlx::Error) -> RepositoryError {
    const USERS_LOGIN_UNIQUE: &str = "users.login";

    if let sqlx::Error::Database(db_err) = &err {
        // SQLite reports the violated column set in the message, e.g.
        // "UNIQUE constraint failed: users.login".
        if db_err.kind() == sqlx::error::ErrorKind::UniqueViolation
            && db_err.message().contains(USERS_LOGIN_UNIQUE)
        {
            return RepositoryError::LoginAlreadyExists;
        }
    }

    RepositoryError::Sqlx(err)
}
