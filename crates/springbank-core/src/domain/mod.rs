//! Domain entities - the client-held view of the authenticated identity.

mod session;

pub use session::{Session, SessionSnapshot};
