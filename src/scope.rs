//! View lifetimes.
//!
//! A mounted screen owns a [`ViewLifetime`]; fetches it starts carry a
//! [`ViewScope`] and their results are dropped once the view is gone.

use std::sync::mpsc;
use std::thread;

use tokio_util::sync::{CancellationToken, DropGuard};

/// Cancelled when the owning view unmounts or is dropped.
pub struct ViewLifetime {
    token: CancellationToken,
    _guard: DropGuard,
}

impl std::fmt::Debug for ViewLifetime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ViewLifetime")
            .field("live", &self.is_live())
            .finish()
    }
}

impl Default for ViewLifetime {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewLifetime {
    pub fn new() -> Self {
        let token = CancellationToken::new();
        let guard = token.clone().drop_guard();
        Self {
            token,
            _guard: guard,
        }
    }

    pub fn scope(&self) -> ViewScope {
        ViewScope {
            token: self.token.clone(),
        }
    }

    pub fn end(&self) {
        self.token.cancel();
    }

    pub fn is_live(&self) -> bool {
        !self.token.is_cancelled()
    }
}

#[derive(Clone, Debug)]
pub struct ViewScope {
    token: CancellationToken,
}

impl ViewScope {
    pub fn is_live(&self) -> bool {
        !self.token.is_cancelled()
    }

    /// Run `f` on its own thread, tied to this scope.
    pub fn spawn<T, F>(&self, f: F) -> Pending<T>
    where
        T: Send + 'static,
        F: FnOnce() -> T + Send + 'static,
    {
        let (tx, rx) = mpsc::channel();
        let token = self.token.clone();
        thread::spawn(move || {
            if token.is_cancelled() {
                return;
            }
            let _ = tx.send(f());
        });
        Pending {
            rx,
            scope: self.clone(),
        }
    }
}

/// Result of a fetch started with [`ViewScope::spawn`].
#[derive(Debug)]
pub struct Pending<T> {
    rx: mpsc::Receiver<T>,
    scope: ViewScope,
}

impl<T> Pending<T> {
    /// Block until the fetch finishes.
    ///
    /// `None` when the view ended first: the result is stale and must not be
    /// applied.
    pub fn wait(self) -> Option<T> {
        let value = self.rx.recv().ok()?;
        if !self.scope.is_live() {
            tracing::debug!("discarding result for an unmounted view");
            return None;
        }
        Some(value)
    }
}

#[cfg(test)]
#[path = "tests/scope_tests.rs"]
mod tests;
