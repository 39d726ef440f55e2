//! otakudesu catalog library.
//!
//! Fetches catalog data from the wajik-anime-api wrapper and translates it
//! into the stable internal models defined in `shared::models`.

pub mod api;
pub mod catalog;
pub mod navigation;
pub mod translator;

#[cfg(test)]
mod test_support;

pub use api::{ApiError, ApiResult, WajikClient};
pub use catalog::AnimeCatalog;
pub use navigation::{NavigationToken, Navigator};
