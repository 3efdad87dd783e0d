//! # Configuration
//!
//! Client configuration for native front ends. The web frontend is
//! configured at compile time instead.

pub mod client;

pub use client::{ClientConfig, ConfigError, ConfigFormat};
