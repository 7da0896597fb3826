//! Domain-level error types.

use thiserror::Error;

use crate::ports::{ApiError, StoreError};

/// Failures surfaced by the session state machine.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Client-side registration precondition; checked before any request
    /// is issued. Carries no security guarantee - the API re-validates.
    #[error("passwords do not match")]
    PasswordMismatch,

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Store(#[from] StoreError),
}
