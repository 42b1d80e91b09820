//! Game wiring
//!
//! Configuration and the session that owns the round for a front end.

mod config;
mod session;

pub use config::GameConfig;
pub use session::Session;
