//! Post service implementation.
//!
//! This crate provides [`PostService`], which applies the post business
//! rules on top of any [`Repository`](quill_core::Repository). Core types are
//! re-exported from `quill_core`.

pub mod service;

pub use quill_core::{Outcome, PostManager, ServiceError};
pub use service::PostService;
