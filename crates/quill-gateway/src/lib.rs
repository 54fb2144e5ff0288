//! HTTP gateway for the Quill posts service.
//!
//! Exposes the [`PostManager`](quill_core::PostManager) operations as a JSON
//! REST API under `/api`.

pub mod app;
pub mod error;
pub mod handlers;
pub mod model;
pub mod response;
pub mod state;

pub use app::App;
pub use state::AppState;
