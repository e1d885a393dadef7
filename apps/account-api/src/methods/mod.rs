pub mod entities;
pub mod routes;

pub mod create_role;
pub mod create_user;
pub mod delete_role;
pub mod delete_user;
pub mod get_role_by_id;
pub mod get_roles;
pub mod get_user_by_login;
pub mod get_users;
pub mod health_check;
pub mod update_role;
pub mod update_user;
