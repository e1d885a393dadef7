pub mod user_repository;
pub mod role_repository;
pub mod user_role_repository;
pub mod models;
pub mod traits;
pub mod errors;

pub use user_repository::UserRepository;
pub use role_repository::RoleRepository;
pub use user_role_repository::UserRoleRepository;
pub use errors::RepositoryError;
