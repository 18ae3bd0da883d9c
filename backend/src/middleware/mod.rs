//! HTTP middleware

pub mod session;

pub use session::{session_middleware, CurrentSession, LiveSession};
