//! Secrets provider implementations

mod env;
mod file;

pub use env::EnvProvider;
pub use file::FileProvider;
