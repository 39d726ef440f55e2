//! Shared library for the otakudesu catalog workspace.
//!
//! This crate provides common functionality used by the catalog client and CLI:
//! - Configuration management
//! - Internal catalog models handed to the rendering layer
//! - Continue-watching persistence
//! - Logging infrastructure

pub mod config;
pub mod history;
pub mod logging;
pub mod models;

// Re-export commonly used types
pub use config::Config;
pub use history::{ContinueWatchingItem, ContinueWatchingStore, NewContinueWatchingItem};
pub use logging::LogConfig;
pub use models::*;
