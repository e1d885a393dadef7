use crate::error::{handle_service_error, ApiError};
use crate::methods::entities::UserResponse;
use crate::methods::routes::USERS_BY_LOGIN_PATH;
use crate::state::AppState;
use axum::Json;

#[utoipa::path(
    get,
    path = USERS_BY_LOGIN_PATH,
    tag = "users",
    params(
        ("login" = String, Path, description = "User login")
    ),
    responses(
        (status = 200, description = "User with resolved roles", body = UserResponse),
        (status = 404, description = "User not found"),
        (status = 500, description = "Internal server error"),
    )
)]
pub async fn get_user_by_login(
    axum::extract::Path(login): axum::extract::Path<String>,
    axum::extract::State(state): axum::extract::State<AppState>,
) -> Result<Json<UserResponse>, ApiError> {
    state
        .account_service
        .get_user(&login)
        .await
        .map_err(|e| handle_service_error(e, &state.env, "get_user_by_login"))?
        .map(|user| Json(UserResponse::from(user)))
        .ok_or_else(ApiError::user_not_found)
}
