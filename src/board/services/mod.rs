//! Application services for board sessions.

mod session;

pub use session::{BoardSession, BoardSessionError, BoardSessionResult};
