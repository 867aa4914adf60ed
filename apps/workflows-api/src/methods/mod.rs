pub mod approve_end_user;
pub mod create_end_user;
pub mod entities;
pub mod get_end_user_by_id;
pub mod get_end_users;
pub mod get_me;
pub mod health_check;
pub mod next_end_user;
pub mod reject_end_user;
pub mod routes;
