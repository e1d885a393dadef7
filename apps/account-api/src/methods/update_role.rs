use crate::error::{handle_service_error, ApiError};
use crate::methods::entities::{RoleResponse, RoleUpdatePayload};
use crate::methods::routes::ROLES_PATH;
use crate::state::AppState;
use axum::Json;

#[utoipa::path(
    put,
    path = ROLES_PATH,
    tag = "roles",
    request_body = RoleUpdatePayload,
    responses(
        (status = 200, description = "Role renamed", body = RoleResponse),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Role not found"),
        (status = 500, description = "Internal server error"),
    )
)]
pub async fn update_role(
    axum::extract::State(state): axum::extract::State<AppState>,
    Json(payload): Json<RoleUpdatePayload>,
) -> Result<Json<RoleResponse>, ApiError> {
    state
        .account_service
        .update_role(payload.id, payload.name.as_deref().unwrap_or_default())
        .await
        .map(|role| Json(RoleResponse::from(role)))
        .map_err(|e| handle_service_error(e, &state.env, "update_role"))
}
