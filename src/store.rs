use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::model::{Session, SessionUser};

mod local;
mod memory;

pub use self::local::LocalStore;
pub use self::memory::MemoryStore;

/// Storage key of the bearer token.
pub const TOKEN_KEY: &str = "token";
/// Storage key of the serialized [`SessionUser`].
pub const USER_DATA_KEY: &str = "userData";

/// Holder of the current [`Session`].
///
/// Reads are synchronous and never touch the network. Expiry is not swept
/// locally; a failing protected call is what ends a stale session.
pub trait SessionStore: Send + Sync {
    fn get_session(&self) -> Session;

    /// Persist the token and profile together.
    fn set_session(&self, token: &str, user: SessionUser) -> Result<()>;

    /// Remove the token and profile together.
    fn clear_session(&self) -> Result<()>;
}

/// Rebuild a session from the two raw storage entries.
///
/// Returns the session and whether the stored profile was unreadable and
/// should be dropped from storage.
pub(crate) fn session_from_entries(
    token: Option<&str>,
    user_data: Option<&str>,
) -> (Session, bool) {
    let mut corrupt = false;
    let user = user_data.and_then(|raw| match serde_json::from_str::<SessionUser>(raw) {
        Ok(u) => Some(u),
        Err(err) => {
            tracing::warn!(error = %err, "discarding unreadable cached profile");
            corrupt = true;
            None
        }
    });
    (Session::new(token.map(str::to_string), user), corrupt)
}

pub(crate) fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("create parent directories")?;
    }
    let tmp = path.with_extension(format!("tmp.{}", std::process::id()));
    fs::write(&tmp, bytes).with_context(|| format!("write temp file {}", tmp.display()))?;
    fs::rename(&tmp, path)
        .with_context(|| format!("rename {} -> {}", tmp.display(), path.display()))?;
    Ok(())
}

#[cfg(test)]
#[path = "tests/store_tests.rs"]
mod tests;
