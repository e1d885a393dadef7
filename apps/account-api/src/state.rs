use std::sync::Arc;

use account_lib::account_service::AccountService;
use account_lib::repository::role_repository::RoleRepository;
use account_lib::repository::traits::{
    RoleRepositoryTrait, UserRepositoryTrait, UserRoleRepositoryTrait,
};
use account_lib::repository::user_repository::UserRepository;
use account_lib::repository::user_role_repository::UserRoleRepository;

pub struct AppState<U = UserRepository, R = RoleRepository, UR = UserRoleRepository>
where
    U: UserRepositoryTrait + Send + Sync + 'static,
    R: RoleRepositoryTrait + Send + Sync + 'static,
    UR: UserRoleRepositoryTrait + Send + Sync + 'static,
{
    pub account_service: Arc<AccountService<U, R, UR>>,
    pub env: String,
}

// Clone without requiring Clone from the repo type params.
impl<U, R, UR> Clone for AppState<U, R, UR>
where
    U: UserRepositoryTrait + Send + Sync + 'static,
    R: RoleRepositoryTrait + Send + Sync + 'static,
    UR: UserRoleRepositoryTrait + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            account_service: Arc::clone(&self.account_service),
            env: self.env.clone(),
        }
    }
}
