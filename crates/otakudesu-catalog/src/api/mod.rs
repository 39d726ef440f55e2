//! wajik-anime-api client implementation.
//!
//! This module provides the HTTP client for the otakudesu endpoints of the
//! wajik-anime-api wrapper, its response types and its error type.

pub mod client;
pub mod error;
pub mod types;

pub use client::{WajikClient, REQUEST_TIMEOUT};
pub use error::{ApiError, ApiResult};
pub use types::*;
