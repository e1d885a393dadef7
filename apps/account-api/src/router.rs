use axum::routing::get;
use axum::Router;

use crate::methods::create_role::create_role;
use crate::methods::create_user::create_user;
use crate::methods::delete_role::delete_role;
use crate::methods::delete_user::delete_user;
use crate::methods::get_role_by_id::get_role_by_id;
use crate::methods::get_roles::get_roles;
use crate::methods::get_user_by_login::get_user_by_login;
use crate::methods::get_users::get_users;
use crate::methods::health_check::health_check;
use crate::methods::routes::{
    ROLES_BY_ID_PATH, ROLES_PATH, SERVICE_HEALTH_PATH, USERS_BY_LOGIN_PATH, USERS_PATH,
};
use crate::methods::update_role::update_role;
use crate::methods::update_user::update_user;
use crate::state::AppState;

/// Routes only; middleware is layered on top in `main`. Integration tests
/// drive this router directly.
pub fn api_router(state: AppState) -> Router {
    Router::new()
        // User endpoints; PUT targets the login carried in the body
        .route(
            USERS_PATH,
            get(get_users).post(create_user).put(update_user),
        )
        .route(
            USERS_BY_LOGIN_PATH,
            get(get_user_by_login).delete(delete_user),
        )
        // Role endpoints; PUT targets the id carried in the body
        .route(
            ROLES_PATH,
            get(get_roles).post(create_role).put(update_role),
        )
        .route(ROLES_BY_ID_PATH, get(get_role_by_id).delete(delete_role))
        .route(SERVICE_HEALTH_PATH, get(health_check))
        .with_state(state)
}
