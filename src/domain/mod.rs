pub mod env;
pub mod error;
pub mod identity;

pub use env::EnvSnapshot;
pub use error::AppError;
pub use identity::{IdentityConfig, Slug};
