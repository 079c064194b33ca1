use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use super::{SessionStore, TOKEN_KEY, USER_DATA_KEY, session_from_entries, write_atomic};
use crate::model::{ClientConfig, Session, SessionUser};

const STORE_DIR: &str = ".qaboard";
const STORAGE_FILE: &str = "storage.json";
const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Default, Serialize, Deserialize)]
struct StorageFile {
    version: u32,

    #[serde(default)]
    entries: BTreeMap<String, String>,
}

/// Durable key-value storage in a state directory.
///
/// `storage.json` holds string entries (the token and the serialized profile);
/// `config.json` holds the [`ClientConfig`]. Entries are cached in memory and
/// written through on every change.
#[derive(Debug)]
pub struct LocalStore {
    root: PathBuf,
    entries: Mutex<BTreeMap<String, String>>,
}

impl LocalStore {
    /// Default state directory under `base`.
    pub fn state_dir(base: &Path) -> PathBuf {
        base.join(STORE_DIR)
    }

    /// Open (creating if needed) the state directory at `root`.
    pub fn open(root: &Path) -> Result<Self> {
        fs::create_dir_all(root)
            .with_context(|| format!("create state dir {}", root.display()))?;

        let path = root.join(STORAGE_FILE);
        let entries = if path.exists() {
            let bytes = fs::read(&path).context("read storage.json")?;
            let file: StorageFile =
                serde_json::from_slice(&bytes).context("parse storage.json")?;
            if file.version != 1 {
                anyhow::bail!("unsupported storage version {}", file.version);
            }
            file.entries
        } else {
            BTreeMap::new()
        };

        Ok(Self {
            root: root.to_path_buf(),
            entries: Mutex::new(entries),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn read_config(&self) -> Result<ClientConfig> {
        let path = self.root.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(ClientConfig::default());
        }
        let bytes = fs::read(&path).context("read config.json")?;
        let cfg: ClientConfig = serde_json::from_slice(&bytes).context("parse config.json")?;
        if cfg.version != 1 {
            anyhow::bail!("unsupported config version {}", cfg.version);
        }
        Ok(cfg)
    }

    pub fn write_config(&self, cfg: &ClientConfig) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(cfg).context("serialize config")?;
        write_atomic(&self.root.join(CONFIG_FILE), &bytes).context("write config.json")
    }

    pub fn get_item(&self, key: &str) -> Option<String> {
        self.lock().get(key).cloned()
    }

    pub fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.update(|entries| {
            entries.insert(key.to_string(), value.to_string());
            true
        })
    }

    pub fn remove_item(&self, key: &str) -> Result<()> {
        self.update(|entries| entries.remove(key).is_some())
    }

    /// Apply `change` to a copy of the entries and swap it in once written.
    ///
    /// `change` returns whether anything changed; an unchanged copy is not
    /// written. On a failed write the cached entries are left as they were.
    fn update<F>(&self, change: F) -> Result<()>
    where
        F: FnOnce(&mut BTreeMap<String, String>) -> bool,
    {
        let mut entries = self.lock();
        let mut next = entries.clone();
        if !change(&mut next) {
            return Ok(());
        }
        self.persist(&next)?;
        *entries = next;
        Ok(())
    }

    fn lock(&self) -> MutexGuard<'_, BTreeMap<String, String>> {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn persist(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        let file = StorageFile {
            version: 1,
            entries: entries.clone(),
        };
        let bytes = serde_json::to_vec_pretty(&file).context("serialize storage")?;
        write_atomic(&self.root.join(STORAGE_FILE), &bytes).context("write storage.json")
    }
}

impl SessionStore for LocalStore {
    fn get_session(&self) -> Session {
        let (session, corrupt) = {
            let entries = self.lock();
            session_from_entries(
                entries.get(TOKEN_KEY).map(String::as_str),
                entries.get(USER_DATA_KEY).map(String::as_str),
            )
        };
        if corrupt {
            if let Err(err) = self.remove_item(USER_DATA_KEY) {
                tracing::warn!(error = %format!("{:#}", err), "failed to drop cached profile");
            }
        }
        session
    }

    fn set_session(&self, token: &str, user: SessionUser) -> Result<()> {
        let user_data = serde_json::to_string(&user).context("serialize user profile")?;
        self.update(|entries| {
            entries.insert(TOKEN_KEY.to_string(), token.to_string());
            entries.insert(USER_DATA_KEY.to_string(), user_data);
            true
        })?;
        tracing::debug!(username = %user.username, admin = user.is_admin, "session stored");
        Ok(())
    }

    fn clear_session(&self) -> Result<()> {
        self.update(|entries| {
            let token = entries.remove(TOKEN_KEY).is_some();
            let user = entries.remove(USER_DATA_KEY).is_some();
            token || user
        })?;
        tracing::debug!("session cleared");
        Ok(())
    }
}
