use crate::error::{handle_service_error, ApiError};
use crate::methods::routes::ROLES_BY_ID_PATH;
use crate::state::AppState;
use axum::http::StatusCode;

#[utoipa::path(
    delete,
    path = ROLES_BY_ID_PATH,
    tag = "roles",
    params(
        ("id" = i64, Path, description = "Role id")
    ),
    responses(
        (status = 204, description = "Role deleted; assignments to it are removed"),
        (status = 400, description = "Invalid role id"),
        (status = 404, description = "Role not found"),
        (status = 500, description = "Internal server error"),
    )
)]
pub async fn delete_role(
    axum::extract::Path(id): axum::extract::Path<String>,
    axum::extract::State(state): axum::extract::State<AppState>,
) -> Result<StatusCode, ApiError> {
    let role_id: i64 = id.parse().map_err(|_| ApiError::invalid_role_id())?;

    state
        .account_service
        .delete_role(role_id)
        .await
        .map(|_| StatusCode::NO_CONTENT)
        .map_err(|e| handle_service_error(e, &state.env, "delete_role"))
}
