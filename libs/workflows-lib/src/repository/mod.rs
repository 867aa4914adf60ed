pub mod end_user_repository;
pub mod errors;
pub mod models;
pub mod traits;
pub mod user_repository;

pub use end_user_repository::EndUserRepository;
pub use errors::RepositoryError;
pub use user_repository::UserRepository;
