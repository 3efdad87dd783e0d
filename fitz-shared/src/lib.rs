#![cfg_attr(not(test), forbid(unsafe_code))]
//! Shared building blocks for the Fitz clients.
//!
//! Everything here compiles for both native targets and `wasm32`, so the web
//! frontend and the CLI speak to the remote API through the same models,
//! session store and HTTP client.

pub mod api;
#[cfg(not(target_arch = "wasm32"))]
pub mod config;
pub mod forms;
pub mod models;
pub mod pagination;
pub mod resource;
pub mod session;
pub mod validation;

pub use api::{ClientError, FitzClient};
pub use pagination::Pager;
pub use resource::RemoteResource;
pub use session::{Session, SessionStorage, SessionStore};
