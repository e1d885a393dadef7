use crate::error::{handle_service_error, ApiError};
use crate::methods::entities::RoleResponse;
use crate::methods::routes::ROLES_BY_ID_PATH;
use crate::state::AppState;
use axum::Json;

#[utoipa::path(
    get,
    path = ROLES_BY_ID_PATH,
    tag = "roles",
    params(
        ("id" = i64, Path, description = "Role id")
    ),
    responses(
        (status = 200, description = "Role found", body = RoleResponse),
        (status = 400, description = "Invalid role id"),
        (status = 404, description = "Role not found"),
        (status = 500, description = "Internal server error"),
    )
)]
pub async fn get_role_by_id(
    axum::extract::Path(id): axum::extract::Path<String>,
    axum::extract::State(state): axum::extract::State<AppState>,
) -> Result<Json<RoleResponse>, ApiError> {
    let role_id: i64 = id.parse().map_err(|_| ApiError::invalid_role_id())?;

    state
        .account_service
        .get_role(role_id)
        .await
        .map_err(|e| handle_service_error(e, &state.env, "get_role_by_id"))?
        .map(|role| Json(RoleResponse::from(role)))
        .ok_or_else(ApiError::role_not_found)
}
