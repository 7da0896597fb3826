//! # SpringBank Core
//!
//! The domain layer of the SpringBank client SDK.
//! Session state, access policy, and the ports infrastructure must
//! implement - with zero infrastructure dependencies of its own.

pub mod domain;
pub mod error;
pub mod ports;
pub mod routes;
pub mod session;

pub use error::SessionError;
pub use session::SessionManager;
