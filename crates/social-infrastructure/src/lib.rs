//! Local persistence for the GameSocial client.
//!
//! Everything here is plain files under the platform config directory:
//! the session (token + cached user) as two independent entries, and the
//! client configuration as `config.toml`. Single writer, last-write-wins.

pub mod config_loader;
pub mod memory_store;
pub mod paths;
pub mod session_store;

pub use config_loader::{load_config, save_config};
pub use memory_store::MemorySessionStore;
pub use paths::SocialPaths;
pub use session_store::FileSessionStore;
