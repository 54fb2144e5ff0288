//! Core types and traits for the Quill posts service.
//!
//! This crate provides the shared [`Post`] record, the store contract and the
//! service contract used by the storage, service and gateway crates.

pub mod error;
pub mod manager;
pub mod outcome;
pub mod post;
pub mod repository;

pub use error::{ServiceError, StorageError};
pub use manager::PostManager;
pub use outcome::Outcome;
pub use post::{Post, PostDraft, PostId};
pub use repository::{ReadRepository, Repository};
