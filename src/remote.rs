use std::sync::Arc;
use std::time::Duration;

use reqwest::Method;

use crate::model::ClientConfig;
use crate::navigation::Navigator;
use crate::store::SessionStore;

mod admin;
mod error;
mod http_client;
mod types;
mod users;

pub use self::error::ApiError;
pub use self::http_client::{AuthAction, auth_action, server_message};
pub use self::types::*;

/// The single outbound gateway to the forum backend.
///
/// Attaches the stored bearer token to every request and applies the
/// 401/403 policy to every response (see [`auth_action`]).
#[derive(Clone)]
pub struct ForumClient {
    base_url: String,
    client: reqwest::blocking::Client,
    session: Arc<dyn SessionStore>,
    navigator: Arc<Navigator>,
}

impl ForumClient {
    pub fn new(
        config: &ClientConfig,
        session: Arc<dyn SessionStore>,
        navigator: Arc<Navigator>,
    ) -> Result<Self, ApiError> {
        let client = reqwest::blocking::Client::builder()
            .user_agent("qaboard")
            .timeout(config.timeout_secs.map(Duration::from_secs))
            .build()
            .map_err(ApiError::Client)?;
        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client,
            session,
            navigator,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl std::fmt::Debug for ForumClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ForumClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "tests/remote_tests.rs"]
mod tests;
