//! Session cookie jar.
//!
//! A browser keeps the session cookie between page loads; this jar keeps it
//! between invocations by writing it to a small JSON file. The HTTP client
//! reads and updates the jar on every request, honouring `Expires`,
//! `Max-Age`, `Domain` and `Path`.

use cookie_store::{serde::json, CookieStore, RawCookie};
use reqwest::Url;
use reqwest_cookie_store::CookieStoreMutex;
use std::{
    fs,
    io::{BufReader, Write},
    path::{Path, PathBuf},
    sync::{Arc, MutexGuard, PoisonError},
};
use tracing::debug;

use crate::{error::NuflError, Result};

#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    path: Option<PathBuf>,
    jar: Arc<CookieStoreMutex>,
}

impl SessionStore {
    /// A jar that lives only as long as this process.
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Open the jar stored at `path`. A missing or unreadable file yields an
    /// empty jar; expired cookies are dropped on load.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let store = fs::File::open(&path)
            .ok()
            .and_then(|f| json::load(BufReader::new(f)).ok())
            .unwrap_or_default();
        debug!(
            path = %path.display(),
            cookies = store.iter_unexpired().count(),
            "opened session store"
        );
        Self {
            path: Some(path),
            jar: Arc::new(CookieStoreMutex::new(store)),
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// The shared jar, for `reqwest::ClientBuilder::cookie_provider`.
    pub fn jar(&self) -> Arc<CookieStoreMutex> {
        Arc::clone(&self.jar)
    }

    fn store(&self) -> MutexGuard<'_, CookieStore> {
        self.jar.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn is_empty(&self) -> bool {
        self.store().iter_unexpired().next().is_none()
    }

    /// Value of the unexpired cookie called `name`, whatever its domain.
    pub fn get(&self, name: &str) -> Option<String> {
        self.store()
            .iter_unexpired()
            .find(|c| c.name() == name)
            .map(|c| c.value().to_string())
    }

    /// Store a cookie as if `url` had sent it.
    pub fn set(&self, url: &str, name: &str, value: &str) -> Result<()> {
        let url = Url::parse(url).map_err(|_| NuflError::InvalidApiUrl {
            url: url.to_string(),
        })?;
        self.store()
            .insert_raw(&RawCookie::new(name.to_string(), value.to_string()), &url)
            .map_err(|e| NuflError::Session {
                message: e.to_string(),
            })?;
        self.persist()
    }

    /// Forget every cookie and remove the file.
    pub fn clear(&self) -> Result<()> {
        self.store().clear();
        self.persist()
    }

    /// Write the jar to its file, session cookies included. An empty jar
    /// removes the file.
    pub fn persist(&self) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        let mut buf = Vec::new();
        {
            let store = self.store();
            if store.iter_unexpired().next().is_none() {
                return match fs::remove_file(path) {
                    Err(e) if e.kind() != std::io::ErrorKind::NotFound => Err(e.into()),
                    _ => Ok(()),
                };
            }
            json::save_incl_expired_and_nonpersistent(&store, &mut buf).map_err(|e| {
                NuflError::Session {
                    message: e.to_string(),
                }
            })?;
        }
        write_private(path, &buf)?;
        Ok(())
    }
}

/// Write the jar, readable by the current user only where supported.
fn write_private(path: &Path, contents: &[u8]) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut f = fs::File::create(path)?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        f.set_permissions(fs::Permissions::from_mode(0o600))?;
    }
    f.write_all(contents)
}
