use utoipa::OpenApi;

use account_api::methods::entities::{
    RolePayload, RoleRefPayload, RoleResponse, RoleUpdatePayload, UserPayload, UserResponse,
    UserSummaryResponse,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        account_api::methods::create_user::create_user,
        account_api::methods::get_user_by_login::get_user_by_login,
        account_api::methods::get_users::get_users,
        account_api::methods::update_user::update_user,
        account_api::methods::delete_user::delete_user,
        account_api::methods::create_role::create_role,
        account_api::methods::get_role_by_id::get_role_by_id,
        account_api::methods::get_roles::get_roles,
        account_api::methods::update_role::update_role,
        account_api::methods::delete_role::delete_role
    ),
    components(schemas(
        UserPayload, RoleRefPayload, UserResponse, UserSummaryResponse,
        RolePayload, RoleUpdatePayload, RoleResponse
    )),
    tags(
        (name = "users", description = "User management endpoints"),
        (name = "roles", description = "Role management endpoints")
    )
)]
struct ApiDoc;

#[test]
fn test_openapi_spec_has_all_endpoints() {
    let spec = ApiDoc::openapi();
    let json = spec.to_pretty_json().expect("Failed to generate OpenAPI JSON");

    let paths = spec.paths.paths;

    assert!(paths.contains_key("/user"), "Missing /user path");
    assert!(
        paths.contains_key("/user/{login}"),
        "Missing /user/{{login}} path"
    );
    assert!(paths.contains_key("/role"), "Missing /role path");
    assert!(paths.contains_key("/role/{id}"), "Missing /role/{{id}} path");

    // The collection paths carry the PUTs: updates identify their target in
    // the body, not the path.
    let user_path = paths.get("/user").unwrap();
    assert!(user_path.get.is_some(), "Missing GET /user");
    assert!(user_path.post.is_some(), "Missing POST /user");
    assert!(user_path.put.is_some(), "Missing PUT /user");

    let user_by_login_path = paths.get("/user/{login}").unwrap();
    assert!(user_by_login_path.get.is_some(), "Missing GET /user/{{login}}");
    assert!(
        user_by_login_path.delete.is_some(),
        "Missing DELETE /user/{{login}}"
    );

    let role_path = paths.get("/role").unwrap();
    assert!(role_path.get.is_some(), "Missing GET /role");
    assert!(role_path.post.is_some(), "Missing POST /role");
    assert!(role_path.put.is_some(), "Missing PUT /role");

    let role_by_id_path = paths.get("/role/{id}").unwrap();
    assert!(role_by_id_path.get.is_some(), "Missing GET /role/{{id}}");
    assert!(role_by_id_path.delete.is_some(), "Missing DELETE /role/{{id}}");

    let schemas = &spec.components.as_ref().unwrap().schemas;
    assert!(schemas.contains_key("UserPayload"), "Missing UserPayload schema");
    assert!(
        schemas.contains_key("RoleRefPayload"),
        "Missing RoleRefPayload schema"
    );
    assert!(schemas.contains_key("UserResponse"), "Missing UserResponse schema");
    assert!(
        schemas.contains_key("UserSummaryResponse"),
        "Missing UserSummaryResponse schema"
    );
    assert!(schemas.contains_key("RolePayload"), "Missing RolePayload schema");
    assert!(
        schemas.contains_key("RoleUpdatePayload"),
        "Missing RoleUpdatePayload schema"
    );
    assert!(schemas.contains_key("RoleResponse"), "Missing RoleResponse schema");

    println!("OpenAPI Spec:\n{}", json);
}

#[test]
fn test_openapi_json_contains_tags() {
    let spec = ApiDoc::openapi();
    let json = spec.to_pretty_json().expect("Failed to generate OpenAPI JSON");

    assert!(json.contains("\"users\""), "Missing 'users' tag in JSON");
    assert!(json.contains("\"roles\""), "Missing 'roles' tag in JSON");
}
