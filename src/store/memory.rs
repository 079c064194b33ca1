use std::sync::Mutex;

use anyhow::Result;

use super::SessionStore;
use crate::model::{Session, SessionUser};

/// Session store that lives only as long as the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    session: Mutex<Session>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_session(session: Session) -> Self {
        Self {
            session: Mutex::new(session),
        }
    }
}

impl SessionStore for MemoryStore {
    fn get_session(&self) -> Session {
        self.session
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    fn set_session(&self, token: &str, user: SessionUser) -> Result<()> {
        let mut session = self
            .session
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *session = Session::new(Some(token.to_string()), Some(user));
        Ok(())
    }

    fn clear_session(&self) -> Result<()> {
        let mut session = self
            .session
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *session = Session::empty();
        Ok(())
    }
}
