use crate::error::{handle_service_error, ApiError};
use crate::methods::entities::UserSummaryResponse;
use crate::methods::routes::USERS_PATH;
use crate::state::AppState;
use axum::Json;

#[utoipa::path(
    get,
    path = USERS_PATH,
    tag = "users",
    responses(
        (status = 200, description = "All users in creation order, without roles", body = Vec<UserSummaryResponse>),
        (status = 500, description = "Internal server error"),
    )
)]
pub async fn get_users(
    axum::extract::State(state): axum::extract::State<AppState>,
) -> Result<Json<Vec<UserSummaryResponse>>, ApiError> {
    state
        .account_service
        .get_users()
        .await
        .map(|users| {
            Json(
                users
                    .into_iter()
                    .map(UserSummaryResponse::from)
                    .collect::<Vec<_>>(),
            )
        })
        .map_err(|e| handle_service_error(e, &state.env, "get_users"))
}
