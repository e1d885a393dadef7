// API routes
pub const USERS_PATH: &str = "/user";
pub const USERS_BY_LOGIN_PATH: &str = "/user/{login}";
pub const ROLES_PATH: &str = "/role";
pub const ROLES_BY_ID_PATH: &str = "/role/{id}";

// Root-level service routes
pub const SERVICE_HEALTH_PATH: &str = "/health";
pub const SERVICE_DOCS_PATH: &str = "/docs";
