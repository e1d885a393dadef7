use crate::error::{handle_service_error, ApiError};
use crate::methods::entities::{UserPayload, UserResponse};
use crate::methods::routes::USERS_PATH;
use crate::state::AppState;
use axum::Json;

#[utoipa::path(
    put,
    path = USERS_PATH,
    tag = "users",
    request_body = UserPayload,
    responses(
        (status = 200, description = "User updated; submitted role set replaces the stored one", body = UserResponse),
        (status = 400, description = "Validation error or unknown role id"),
        (status = 404, description = "User not found"),
        (status = 500, description = "Internal server error"),
    )
)]
pub async fn update_user(
    axum::extract::State(state): axum::extract::State<AppState>,
    Json(payload): Json<UserPayload>,
) -> Result<Json<UserResponse>, ApiError> {
    state
        .account_service
        .update_user(payload.into())
        .await
        .map(|user| Json(UserResponse::from(user)))
        .map_err(|e| handle_service_error(e, &state.env, "update_user"))
}
