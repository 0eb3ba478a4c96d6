//! `bookshelf-core` — the error taxonomy shared by every other crate.
//!
//! This crate contains **pure error model** primitives (no HTTP framework
//! concerns). The `api` crate owns the one translation point onto the wire.

pub mod error;

pub use error::{ApiError, ApiResult, ErrorKind};
