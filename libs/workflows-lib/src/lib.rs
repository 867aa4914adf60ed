pub mod end_user_service;
pub mod entities;
pub mod errors_service;
pub mod repository;
pub mod user_service;
pub mod util;

pub use end_user_service::*;
pub use entities::*;
pub use errors_service::*;
pub use user_service::*;
