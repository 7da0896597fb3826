//! # SpringBank Shared
//!
//! Wire types shared between every consumer of the SDK.
//! These mirror the remote banking API's JSON shapes verbatim.

pub mod dto;

pub use dto::Role;
