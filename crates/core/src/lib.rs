//! `agrisite-core`: shared building blocks for the storefront crates.
//!
//! This crate contains **pure domain** primitives (no IO, no HTTP).

pub mod error;
pub mod id;
pub mod value_object;

pub use error::{DomainError, DomainResult};
pub use id::SubmissionId;
pub use value_object::ValueObject;
