use std::sync::{Mutex, MutexGuard};

/// Public entry route (the login screen).
pub const ENTRY_PATH: &str = "/";

#[derive(Debug)]
struct NavState {
    location: String,
    history: Vec<String>,
}

/// Current location plus the trail of locations visited.
///
/// Shared between the router and the HTTP wrapper, which both redirect.
#[derive(Debug)]
pub struct Navigator {
    state: Mutex<NavState>,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new(ENTRY_PATH)
    }
}

impl Navigator {
    pub fn new(initial: &str) -> Self {
        Self {
            state: Mutex::new(NavState {
                location: initial.to_string(),
                history: vec![initial.to_string()],
            }),
        }
    }

    pub fn location(&self) -> String {
        self.lock().location.clone()
    }

    pub fn is_at_entry(&self) -> bool {
        self.lock().location == ENTRY_PATH
    }

    /// Move to `path`, keeping the previous location in history.
    pub fn navigate(&self, path: &str) {
        let mut st = self.lock();
        tracing::debug!(from = %st.location, to = %path, "navigate");
        st.location = path.to_string();
        st.history.push(path.to_string());
    }

    /// Move to `path`, overwriting the current history entry.
    pub fn replace(&self, path: &str) {
        let mut st = self.lock();
        tracing::debug!(from = %st.location, to = %path, "navigate (replace)");
        st.location = path.to_string();
        if let Some(last) = st.history.last_mut() {
            *last = path.to_string();
        } else {
            st.history.push(path.to_string());
        }
    }

    pub fn history(&self) -> Vec<String> {
        self.lock().history.clone()
    }

    fn lock(&self) -> MutexGuard<'_, NavState> {
        self.state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
