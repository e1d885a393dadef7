pub mod entities;
pub mod repository;
pub mod util;
pub mod account_service;
pub mod errors_service;

pub use account_service::*;
pub use entities::*;
pub use errors_service::*;
