use crate::error::{handle_service_error, ApiError};
use crate::methods::entities::{UserPayload, UserResponse};
use crate::methods::routes::USERS_PATH;
use crate::state::AppState;
use axum::http::StatusCode;
use axum::Json;

#[utoipa::path(
    post,
    path = USERS_PATH,
    tag = "users",
    request_body = UserPayload,
    responses(
        (status = 201, description = "User created successfully", body = UserResponse),
        (status = 400, description = "Validation error or unknown role id"),
        (status = 409, description = "Login already exists"),
        (status = 500, description = "Internal server error"),
    )
)]
pub async fn create_user(
    axum::extract::State(state): axum::extract::State<AppState>,
    Json(payload): Json<UserPayload>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    state
        .account_service
        .create_user(payload.into())
        .await
        .map(|user| (StatusCode::CREATED, Json(UserResponse::from(user))))
        .map_err(|e| handle_service_error(e, &state.env, "create_user"))
}
