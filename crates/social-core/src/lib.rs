pub mod config;
pub mod error;
pub mod models;
pub mod session;

// Re-export the common error type and result alias
pub use error::{Result, SocialError};
pub use session::{Session, SessionStore};
