//! Shared primitives and traits for the velella sequence toolkit.
//!
//! `velella-core` provides the foundation the domain crates build on:
//!
//! - **Error types** — [`VelellaError`] and [`Result`] for structured error handling
//! - **Traits** — [`Sequence`], [`Annotated`], [`Summarizable`], [`ContentAddressable`]
//! - **Hashing** — SHA-256 content addressing for data integrity

pub mod error;
pub mod hash;
pub mod traits;

pub use error::{Result, VelellaError};
pub use traits::*;
