use crate::error::{handle_service_error, ApiError};
use crate::methods::entities::{RolePayload, RoleResponse};
use crate::methods::routes::ROLES_PATH;
use crate::state::AppState;
use axum::http::StatusCode;
use axum::Json;

#[utoipa::path(
    post,
    path = ROLES_PATH,
    tag = "roles",
    request_body = RolePayload,
    responses(
        (status = 201, description = "Role created with a store-assigned id", body = RoleResponse),
        (status = 400, description = "Validation error"),
        (status = 500, description = "Internal server error"),
    )
)]
pub async fn create_role(
    axum::extract::State(state): axum::extract::State<AppState>,
    Json(payload): Json<RolePayload>,
) -> Result<(StatusCode, Json<RoleResponse>), ApiError> {
    state
        .account_service
        .create_role(payload.name.as_deref().unwrap_or_default())
        .await
        .map(|role| (StatusCode::CREATED, Json(RoleResponse::from(role))))
        .map_err(|e| handle_service_error(e, &state.env, "create_role"))
}
