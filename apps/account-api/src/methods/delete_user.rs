use crate::error::{handle_service_error, ApiError};
use crate::methods::routes::USERS_BY_LOGIN_PATH;
use crate::state::AppState;
use axum::http::StatusCode;

#[utoipa::path(
    delete,
    path = USERS_BY_LOGIN_PATH,
    tag = "users",
    params(
        ("login" = String, Path, description = "User login")
    ),
    responses(
        (status = 204, description = "User deleted successfully"),
        (status = 404, description = "User not found"),
        (status = 500, description = "Internal server error"),
    )
)]
pub async fn delete_user(
    axum::extract::Path(login): axum::extract::Path<String>,
    axum::extract::State(state): axum::extract::State<AppState>,
) -> Result<StatusCode, ApiError> {
    state
        .account_service
        .delete_user(&login)
        .await
        .map(|_| StatusCode::NO_CONTENT)
        .map_err(|e| handle_service_error(e, &state.env, "delete_user"))
}
