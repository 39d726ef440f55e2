//! Navigation-scoped cancellation.
//!
//! Every navigation gets its own token; beginning a new navigation cancels the
//! previous one. Requests run under a cancelled token resolve to
//! [`ApiError::Superseded`], so a slow response from an abandoned page can
//! never overwrite the state of the current one.

use crate::api::{ApiError, ApiResult};
use std::future::Future;
use std::sync::Mutex;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Issues one token per navigation
#[derive(Debug, Default)]
pub struct Navigator {
    current: Mutex<CancellationToken>,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new navigation, superseding the previous one
    pub fn begin(&self) -> NavigationToken {
        let token = CancellationToken::new();
        let mut current = self.current.lock().unwrap_or_else(|e| e.into_inner());
        current.cancel();
        *current = token.clone();
        debug!("Navigation started");
        NavigationToken { token }
    }

    /// Cancel the current navigation without starting another
    pub fn cancel(&self) {
        self.current
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .cancel();
    }
}

/// Handle for the requests of one navigation
#[derive(Debug, Clone)]
pub struct NavigationToken {
    token: CancellationToken,
}

impl NavigationToken {
    pub fn is_superseded(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Run a request under this navigation.
    ///
    /// The request future is dropped as soon as the navigation is superseded.
    pub async fn run<F, T>(&self, request: F) -> ApiResult<T>
    where
        F: Future<Output = ApiResult<T>>,
    {
        if self.token.is_cancelled() {
            return Err(ApiError::Superseded);
        }

        tokio::select! {
            biased;
            _ = self.token.cancelled() => {
                debug!("Request abandoned by newer navigation");
                Err(ApiError::Superseded)
            }
            result = request => {
                if self.token.is_cancelled() {
                    Err(ApiError::Superseded)
                } else {
                    result
                }
            }
        }
    }
}
