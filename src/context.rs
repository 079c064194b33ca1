use std::sync::Arc;

use crate::guard::{RouteGuard, Router};
use crate::model::{ClientConfig, Session};
use crate::navigation::Navigator;
use crate::remote::{ApiError, ForumClient};
use crate::routes::Route;
use crate::store::SessionStore;

/// Everything a screen needs, passed in explicitly.
#[derive(Clone)]
pub struct AppContext {
    store: Arc<dyn SessionStore>,
    navigator: Arc<Navigator>,
    client: ForumClient,
}

impl AppContext {
    pub fn new(config: &ClientConfig, store: Arc<dyn SessionStore>) -> Result<Self, ApiError> {
        Self::with_navigator(config, store, Arc::new(Navigator::default()))
    }

    pub fn with_navigator(
        config: &ClientConfig,
        store: Arc<dyn SessionStore>,
        navigator: Arc<Navigator>,
    ) -> Result<Self, ApiError> {
        let client = ForumClient::new(config, Arc::clone(&store), Arc::clone(&navigator))?;
        Ok(Self {
            store,
            navigator,
            client,
        })
    }

    pub fn session(&self) -> Session {
        self.store.get_session()
    }

    pub fn store(&self) -> &dyn SessionStore {
        self.store.as_ref()
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn client(&self) -> &ForumClient {
        &self.client
    }

    pub fn location(&self) -> String {
        self.navigator.location()
    }

    /// Run the route's guard and navigate (or redirect to the entry route).
    pub fn open(&self, route: &Route) -> RouteGuard {
        Router::new(self.store.as_ref(), &self.navigator).open(route)
    }
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext")
            .field("location", &self.navigator.location())
            .field("client", &self.client)
            .finish_non_exhaustive()
    }
}
